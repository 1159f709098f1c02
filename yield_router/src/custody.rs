use crate::errors::YieldRouterError;
use crate::protocol::expect_protocol_call;
use crate::storage::get_lending_pool;
use lending_pool_interface::LendingPoolClient;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, vec, Address, Env, IntoVal, Symbol, Val, Vec};

// Pre-authorize a single token call made by another contract on our behalf.
// The entry covers exactly these arguments, so no standing allowance is left behind.
fn authorize_token_call(e: &Env, token: &Address, fn_name: &str, args: Vec<Val>) {
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, fn_name),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);
}

// Let `spender` move exactly `amount` of `token` out of the router's custody.
pub(crate) fn authorize_spend(e: &Env, token: &Address, spender: &Address, amount: u128) {
    authorize_token_call(
        e,
        token,
        "transfer",
        (e.current_contract_address(), spender.clone(), amount as i128).into_val(e),
    );
}

pub(crate) fn pull(e: &Env, token: &Address, from: &Address, amount: u128) {
    expect_protocol_call(
        e,
        SorobanTokenClient::new(e, token).try_transfer(
            from,
            &e.current_contract_address(),
            &(amount as i128),
        ),
    );
}

pub(crate) fn push(e: &Env, token: &Address, to: &Address, amount: u128) {
    expect_protocol_call(
        e,
        SorobanTokenClient::new(e, token).try_transfer(
            &e.current_contract_address(),
            to,
            &(amount as i128),
        ),
    );
}

// Redeem wrapped tokens held by the router for the same amount of underlying.
pub(crate) fn redeem(e: &Env, wrapped: &Address, amount: u128) -> u128 {
    let router = e.current_contract_address();
    authorize_token_call(
        e,
        wrapped,
        "burn",
        (router.clone(), amount as i128).into_val(e),
    );
    let received = expect_protocol_call(
        e,
        LendingPoolClient::new(e, &get_lending_pool(e)).try_withdraw(&router, wrapped, &amount),
    );
    if received != amount {
        panic_with_error!(e, YieldRouterError::ProtocolCallFailure);
    }
    received
}

// Deposit underlying held by the router, minting the wrapped token to `on_behalf_of`.
pub(crate) fn supply(e: &Env, reserve: &Address, amount: u128, on_behalf_of: &Address) {
    let lending_pool = get_lending_pool(e);
    authorize_spend(e, reserve, &lending_pool, amount);
    expect_protocol_call(
        e,
        LendingPoolClient::new(e, &lending_pool).try_deposit(
            &e.current_contract_address(),
            reserve,
            &amount,
            on_behalf_of,
        ),
    );
}
