use crate::custody::{pull, push, redeem, supply};
use crate::errors::YieldRouterError;
use crate::estimator::{get_amounts_in, get_amounts_out};
use crate::events::{Events, YieldRouterEvents};
use crate::executor;
use crate::interface::{LendingPassthroughInterface, YieldRouterInterface};
use crate::path::{compute_swap, SwapPlan};
use crate::resolver::ReserveResolver;
use crate::storage::{
    get_amm_router, get_lending_pool, get_native_asset, set_amm_router, set_lending_pool,
    set_native_asset, set_native_sentinel,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

#[contract]
pub struct YieldRouter;

#[contractimpl]
impl YieldRouter {
    // __constructor
    // Initializes the router. The references are never changed afterwards.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - amm_router: The exchange router executing the inner path.
    //   - lending_pool: The yield protocol minting and burning wrapped tokens.
    //   - native_asset: Token contract of the native asset as used in swap paths.
    //   - native_sentinel: Address the yield protocol registry uses for the native asset.
    pub fn __constructor(
        e: Env,
        amm_router: Address,
        lending_pool: Address,
        native_asset: Address,
        native_sentinel: Address,
    ) {
        set_amm_router(&e, &amm_router);
        set_lending_pool(&e, &lending_pool);
        set_native_asset(&e, &native_asset);
        set_native_sentinel(&e, &native_sentinel);
    }

    pub fn get_amm_router(e: Env) -> Address {
        get_amm_router(&e)
    }

    pub fn get_lending_pool(e: Env) -> Address {
        get_lending_pool(&e)
    }

    pub fn get_native_asset(e: Env) -> Address {
        get_native_asset(&e)
    }
}

#[contractimpl]
impl YieldRouterInterface for YieldRouter {
    fn compute_swap(e: Env, path: Vec<Address>) -> SwapPlan {
        compute_swap(&e, &ReserveResolver::new(&e), &path)
    }

    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128> {
        let plan = compute_swap(&e, &ReserveResolver::new(&e), &path);
        get_amounts_out(&e, &plan, amount_in)
    }

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128> {
        let plan = compute_swap(&e, &ReserveResolver::new(&e), &path);
        get_amounts_in(&e, &plan, amount_out)
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        user.require_auth();
        executor::swap_exact_tokens_for_tokens(
            &e,
            user,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        )
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        user.require_auth();
        executor::swap_tokens_for_exact_tokens(
            &e,
            user,
            amount_out,
            amount_in_max,
            path,
            to,
            deadline,
        )
    }
}

#[contractimpl]
impl LendingPassthroughInterface for YieldRouter {
    fn deposit(e: Env, user: Address, reserve: Address, amount: u128) {
        user.require_auth();
        if ReserveResolver::new(&e).resolve_wrapped(&reserve).is_none() {
            panic_with_error!(&e, YieldRouterError::UnknownReserve);
        }

        pull(&e, &reserve, &user, amount);
        supply(&e, &reserve, amount, &user);
        Events::new(&e).deposit(user, reserve, amount);
    }

    fn withdraw(e: Env, user: Address, reserve: Address, amount: u128) {
        user.require_auth();
        let wrapped = match ReserveResolver::new(&e).resolve_wrapped(&reserve) {
            Some(v) => v,
            None => panic_with_error!(&e, YieldRouterError::UnknownReserve),
        };

        pull(&e, &wrapped, &user, amount);
        let received = redeem(&e, &wrapped, amount);
        push(&e, &reserve, &user, received);
        Events::new(&e).withdraw(user, reserve, received);
    }
}
