use crate::pool::{amounts_in, amounts_out};
use crate::storage::{get_reserves, set_reserves};
use amm_router_interface::{AmmRouterError, AmmRouterInterface};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

// Constant-product router keeping every pair's reserves in its own balance.
#[contract]
pub struct MockAmmRouter;

fn check_deadline(e: &Env, deadline: u64) -> Result<(), AmmRouterError> {
    if e.ledger().timestamp() > deadline {
        return Err(AmmRouterError::Expired);
    }
    Ok(())
}

// Pull the input from `sender`, move every hop through the pair reserves and pay `to`.
fn settle(e: &Env, sender: &Address, path: &Vec<Address>, amounts: &Vec<u128>, to: &Address) {
    let router = e.current_contract_address();
    TokenClient::new(e, &path.get_unchecked(0)).transfer(
        sender,
        &router,
        &(amounts.get_unchecked(0) as i128),
    );

    for i in 0..path.len() - 1 {
        let sell = path.get_unchecked(i);
        let buy = path.get_unchecked(i + 1);
        let (reserve_sell, reserve_buy) = match get_reserves(e, &sell, &buy) {
            Some(v) => v,
            None => panic_with_error!(e, AmmRouterError::PairNotFound),
        };
        set_reserves(
            e,
            &sell,
            &buy,
            reserve_sell + amounts.get_unchecked(i),
            reserve_buy - amounts.get_unchecked(i + 1),
        );
    }

    let last = path.len() - 1;
    TokenClient::new(e, &path.get_unchecked(last)).transfer(
        &router,
        to,
        &(amounts.get_unchecked(last) as i128),
    );
}

#[contractimpl]
impl MockAmmRouter {
    // Seed a pair with liquidity taken from `provider`. Amounts are added as given.
    pub fn add_liquidity(
        e: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
    ) {
        provider.require_auth();

        let router = e.current_contract_address();
        TokenClient::new(&e, &token_a).transfer(&provider, &router, &(amount_a as i128));
        TokenClient::new(&e, &token_b).transfer(&provider, &router, &(amount_b as i128));

        let (reserve_a, reserve_b) = get_reserves(&e, &token_a, &token_b).unwrap_or((0, 0));
        set_reserves(
            &e,
            &token_a,
            &token_b,
            reserve_a + amount_a,
            reserve_b + amount_b,
        );
    }

    pub fn get_reserves(e: Env, token_a: Address, token_b: Address) -> (u128, u128) {
        get_reserves(&e, &token_a, &token_b).unwrap_or((0, 0))
    }
}

#[contractimpl]
impl AmmRouterInterface for MockAmmRouter {
    fn get_amounts_out(
        e: Env,
        amount_in: u128,
        path: Vec<Address>,
    ) -> Result<Vec<u128>, AmmRouterError> {
        amounts_out(&e, amount_in, &path)
    }

    fn get_amounts_in(
        e: Env,
        amount_out: u128,
        path: Vec<Address>,
    ) -> Result<Vec<u128>, AmmRouterError> {
        amounts_in(&e, amount_out, &path)
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, AmmRouterError> {
        sender.require_auth();
        check_deadline(&e, deadline)?;

        let amounts = amounts_out(&e, amount_in, &path)?;
        if amounts.last_unchecked() < amount_out_min {
            return Err(AmmRouterError::InsufficientOutputAmount);
        }
        settle(&e, &sender, &path, &amounts, &to);
        Ok(amounts)
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        sender: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, AmmRouterError> {
        sender.require_auth();
        check_deadline(&e, deadline)?;

        let amounts = amounts_in(&e, amount_out, &path)?;
        if amounts.first_unchecked() > amount_in_max {
            return Err(AmmRouterError::ExcessiveInputAmount);
        }
        settle(&e, &sender, &path, &amounts, &to);
        Ok(amounts)
    }
}
