use crate::events::{Events, ReferrerRouterEvents};
use crate::interface::ReferrerRouterInterface;
use crate::storage::{get_yield_router, set_yield_router};
use crate::yield_router::YieldRouterClient;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct ReferrerRouter;

#[contractimpl]
impl ReferrerRouter {
    pub fn __constructor(e: Env, yield_router: Address) {
        set_yield_router(&e, &yield_router);
    }

    pub fn get_yield_router(e: Env) -> Address {
        get_yield_router(&e)
    }
}

#[contractimpl]
impl ReferrerRouterInterface for ReferrerRouter {
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128> {
        YieldRouterClient::new(&e, &get_yield_router(&e)).get_amounts_out(&amount_in, &path)
    }

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128> {
        YieldRouterClient::new(&e, &get_yield_router(&e)).get_amounts_in(&amount_out, &path)
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
        referrer: Address,
    ) -> Vec<u128> {
        user.require_auth();
        let amounts = YieldRouterClient::new(&e, &get_yield_router(&e))
            .swap_exact_tokens_for_tokens(
                &user,
                &amount_in,
                &amount_out_min,
                &path,
                &to,
                &deadline,
            );
        Events::new(&e).referral(referrer, user, path, amounts.clone());
        amounts
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
        referrer: Address,
    ) -> Vec<u128> {
        user.require_auth();
        let amounts = YieldRouterClient::new(&e, &get_yield_router(&e))
            .swap_tokens_for_exact_tokens(
                &user,
                &amount_out,
                &amount_in_max,
                &path,
                &to,
                &deadline,
            );
        Events::new(&e).referral(referrer, user, path, amounts.clone());
        amounts
    }
}
