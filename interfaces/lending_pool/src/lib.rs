#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingPoolError {
    ReserveNotListed = 2301,
    AlreadyListed = 2302,
}

// Call contract of a yield-bearing deposit protocol. Every listed reserve has exactly
// one wrapped token, minted on deposit and burned on withdraw at a 1:1 rate.
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolInterface {
    // Wrapped token registered for the reserve. The native asset is looked up by the
    // protocol's own sentinel address, not by its token contract address.
    fn wrapped_token_for(e: Env, reserve: Address) -> Option<Address>;

    // deposit
    // Moves `amount` of `reserve` from `from` into the pool and mints the same amount
    // of the wrapped token to `on_behalf_of`.
    //
    // Arguments:
    //   - from: The address paying the reserve (must be authorized).
    //   - reserve: The underlying reserve token.
    //   - amount: Amount to deposit.
    //   - on_behalf_of: Receiver of the wrapped token.
    fn deposit(
        e: Env,
        from: Address,
        reserve: Address,
        amount: u128,
        on_behalf_of: Address,
    ) -> Result<(), LendingPoolError>;

    // withdraw
    // Burns `amount` of `wrapped_token` held by `from` and sends the same amount of the
    // underlying reserve back to `from`.
    //
    // Returns:
    //   - The underlying amount received.
    fn withdraw(
        e: Env,
        from: Address,
        wrapped_token: Address,
        amount: u128,
    ) -> Result<u128, LendingPoolError>;
}
