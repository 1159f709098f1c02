use crate::path::SwapPlan;
use crate::protocol::expect_router_call;
use crate::storage::get_amm_router;
use amm_router_interface::AmmRouterClient;
use soroban_sdk::{Env, Vec};

// Extend an inner amount vector over the stripped path ends. Deposit and withdraw
// convert 1:1, so a boundary slot repeats its neighbouring underlying amount and the
// result stays aligned with the caller's path.
pub(crate) fn extend_amounts(plan: &SwapPlan, inner: Vec<u128>) -> Vec<u128> {
    let mut amounts = inner;
    if plan.reserve_in.is_some() {
        amounts.push_front(amounts.first_unchecked());
    }
    if plan.reserve_out.is_some() {
        amounts.push_back(amounts.last_unchecked());
    }
    amounts
}

pub(crate) fn quote_inner_amounts_out(e: &Env, plan: &SwapPlan, amount_in: u128) -> Vec<u128> {
    plan.require_routable(e);
    expect_router_call(
        e,
        AmmRouterClient::new(e, &get_amm_router(e)).try_get_amounts_out(&amount_in, &plan.next_path),
    )
}

pub(crate) fn quote_inner_amounts_in(e: &Env, plan: &SwapPlan, amount_out: u128) -> Vec<u128> {
    plan.require_routable(e);
    expect_router_call(
        e,
        AmmRouterClient::new(e, &get_amm_router(e)).try_get_amounts_in(&amount_out, &plan.next_path),
    )
}

pub(crate) fn get_amounts_out(e: &Env, plan: &SwapPlan, amount_in: u128) -> Vec<u128> {
    extend_amounts(plan, quote_inner_amounts_out(e, plan, amount_in))
}

pub(crate) fn get_amounts_in(e: &Env, plan: &SwapPlan, amount_out: u128) -> Vec<u128> {
    extend_amounts(plan, quote_inner_amounts_in(e, plan, amount_out))
}
