use crate::custody::{authorize_spend, pull, redeem, supply};
use crate::errors::YieldRouterError;
use crate::estimator::{extend_amounts, quote_inner_amounts_in};
use crate::events::{Events, YieldRouterEvents};
use crate::path::{compute_swap, SwapPlan};
use crate::protocol::expect_router_call;
use crate::resolver::ReserveResolver;
use crate::storage::get_amm_router;
use amm_router_interface::AmmRouterClient;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Take `amount` of path[0] from the user and, for a wrapped head, redeem it so the
// router holds the first token of the inner path.
fn take_input(e: &Env, plan: &SwapPlan, path: &Vec<Address>, user: &Address, amount: u128) {
    let token_in = path.first_unchecked();
    pull(e, &token_in, user, amount);
    if plan.reserve_in.is_some() && !plan.deposit_in {
        redeem(e, &token_in, amount);
    }
}

// Wrapped tail output has to pass through the router to be deposited.
fn swap_recipient(e: &Env, plan: &SwapPlan, to: &Address) -> Address {
    if plan.deposit_out {
        e.current_contract_address()
    } else {
        to.clone()
    }
}

fn deliver_output(e: &Env, plan: &SwapPlan, to: &Address, amount: u128) {
    if let (true, Some(reserve_out)) = (plan.deposit_out, &plan.reserve_out) {
        supply(e, reserve_out, amount, to);
    }
}

fn finish(
    e: &Env,
    plan: &SwapPlan,
    user: Address,
    to: Address,
    path: Vec<Address>,
    inner: Vec<u128>,
) -> Vec<u128> {
    let amounts = extend_amounts(plan, inner);
    Events::new(e).swap(user, to, path, amounts.clone());
    amounts
}

pub(crate) fn swap_exact_tokens_for_tokens(
    e: &Env,
    user: Address,
    amount_in: u128,
    amount_out_min: u128,
    path: Vec<Address>,
    to: Address,
    deadline: u64,
) -> Vec<u128> {
    let plan = compute_swap(e, &ReserveResolver::new(e), &path);
    plan.require_routable(e);

    take_input(e, &plan, &path, &user, amount_in);

    let amm_router = get_amm_router(e);
    authorize_spend(e, &plan.next_path.first_unchecked(), &amm_router, amount_in);
    let inner = expect_router_call(
        e,
        AmmRouterClient::new(e, &amm_router).try_swap_exact_tokens_for_tokens(
            &e.current_contract_address(),
            &amount_in,
            &amount_out_min,
            &plan.next_path,
            &swap_recipient(e, &plan, &to),
            &deadline,
        ),
    );

    deliver_output(e, &plan, &to, inner.last_unchecked());
    finish(e, &plan, user, to, path, inner)
}

pub(crate) fn swap_tokens_for_exact_tokens(
    e: &Env,
    user: Address,
    amount_out: u128,
    amount_in_max: u128,
    path: Vec<Address>,
    to: Address,
    deadline: u64,
) -> Vec<u128> {
    let plan = compute_swap(e, &ReserveResolver::new(e), &path);

    // Only the quoted input is taken into custody, so nothing is left to refund.
    let amount_in = quote_inner_amounts_in(e, &plan, amount_out).first_unchecked();
    if amount_in > amount_in_max {
        panic_with_error!(e, YieldRouterError::SlippageExceeded);
    }

    take_input(e, &plan, &path, &user, amount_in);

    let amm_router = get_amm_router(e);
    authorize_spend(e, &plan.next_path.first_unchecked(), &amm_router, amount_in);
    let inner = expect_router_call(
        e,
        AmmRouterClient::new(e, &amm_router).try_swap_tokens_for_exact_tokens(
            &e.current_contract_address(),
            &amount_out,
            &amount_in,
            &plan.next_path,
            &swap_recipient(e, &plan, &to),
            &deadline,
        ),
    );

    deliver_output(e, &plan, &to, inner.last_unchecked());
    finish(e, &plan, user, to, path, inner)
}
