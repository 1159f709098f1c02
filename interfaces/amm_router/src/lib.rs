#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, Env, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmRouterError {
    InvalidPath = 2201,
    PairNotFound = 2202,
    InsufficientLiquidity = 2203,
    InsufficientOutputAmount = 2204,
    ExcessiveInputAmount = 2205,
    Expired = 2206,
}

// Call contract of a multi-hop constant-product exchange router.
// Amount vectors are aligned with `path`: amounts[i] is the quantity of path[i]
// entering hop i, the last element is the final output.
#[contractclient(name = "AmmRouterClient")]
pub trait AmmRouterInterface {
    // Quote the output of every hop for an exact input amount.
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>)
        -> Result<Vec<u128>, AmmRouterError>;

    // Quote the input of every hop required to receive an exact output amount.
    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>)
        -> Result<Vec<u128>, AmmRouterError>;

    // swap_exact_tokens_for_tokens
    // Sells exactly `amount_in` of path[0] pulled from `sender`, sends the final output to `to`.
    //
    // Arguments:
    //   - sender: The address paying path[0] (must be authorized).
    //   - amount_in: Exact amount of path[0] to sell.
    //   - amount_out_min: Minimum acceptable amount of the last path token.
    //   - path: Tokens to route through, at least two.
    //   - to: Recipient of the output.
    //   - deadline: Ledger timestamp after which the swap is rejected.
    fn swap_exact_tokens_for_tokens(
        e: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, AmmRouterError>;

    // swap_tokens_for_exact_tokens
    // Buys exactly `amount_out` of the last path token, pulling the required input from `sender`.
    //
    // Arguments:
    //   - sender: The address paying path[0] (must be authorized).
    //   - amount_out: Exact amount of the last path token to receive.
    //   - amount_in_max: Maximum acceptable amount of path[0] to spend.
    //   - path: Tokens to route through, at least two.
    //   - to: Recipient of the output.
    //   - deadline: Ledger timestamp after which the swap is rejected.
    fn swap_tokens_for_exact_tokens(
        e: Env,
        sender: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, AmmRouterError>;
}
