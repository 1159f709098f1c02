use crate::path::SwapPlan;
use soroban_sdk::{Address, Env, Vec};

pub trait YieldRouterInterface {
    // compute_swap
    // Resolves wrapped tokens at both ends of a path against the yield protocol registry.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - path: Caller path, at least two tokens; only the ends may be wrapped tokens.
    //
    // Returns:
    //   - A SwapPlan with the boundary reserves, conversion directions and the inner path.
    fn compute_swap(e: Env, path: Vec<Address>) -> SwapPlan;

    // get_amounts_out
    // Quotes every step of the path for an exact input amount.
    //
    // Returns:
    //   - One amount per path token; wrapped ends repeat their underlying neighbour.
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    // get_amounts_in
    // Quotes every step of the path required to receive an exact output amount.
    //
    // Returns:
    //   - One amount per path token; wrapped ends repeat their underlying neighbour.
    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;

    // swap_exact_tokens_for_tokens
    // Sells exactly `amount_in` of path[0], redeeming or minting wrapped ends as needed.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - user: The user paying path[0] (must be authorized).
    //   - amount_in: Exact amount of path[0] taken from the user.
    //   - amount_out_min: Minimum acceptable amount of the last path token.
    //   - path: Caller path, wrapped tokens allowed at either end.
    //   - to: Recipient of the last path token.
    //   - deadline: Ledger timestamp after which the exchange router rejects the swap.
    //
    // Returns:
    //   - The settled amount for every path token.
    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    // swap_tokens_for_exact_tokens
    // Buys exactly `amount_out` of the last path token, taking only the required input.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - user: The user paying path[0] (must be authorized).
    //   - amount_out: Exact amount of the last path token delivered to `to`.
    //   - amount_in_max: Maximum acceptable amount of path[0].
    //   - path: Caller path, wrapped tokens allowed at either end.
    //   - to: Recipient of the last path token.
    //   - deadline: Ledger timestamp after which the exchange router rejects the swap.
    //
    // Returns:
    //   - The settled amount for every path token.
    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;
}

pub trait LendingPassthroughInterface {
    // Deposit `amount` of `reserve` from the user, minting its wrapped token to the user.
    fn deposit(e: Env, user: Address, reserve: Address, amount: u128);

    // Redeem `amount` of the wrapped token of `reserve` held by the user back into `reserve`.
    fn withdraw(e: Env, user: Address, reserve: Address, amount: u128);
}
