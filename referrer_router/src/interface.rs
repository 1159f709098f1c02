use soroban_sdk::{Address, Env, Vec};

pub trait ReferrerRouterInterface {
    // Quotes are forwarded to the yield router unchanged.
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;

    // swap_exact_tokens_for_tokens
    // Executes the swap through the yield router and attributes it to `referrer`.
    //
    // Arguments:
    //   - user: The user paying path[0] (must be authorized). Funds move from the user
    //     straight to the yield router.
    //   - referrer: Address credited in the referral event.
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
        referrer: Address,
    ) -> Vec<u128>;

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
        referrer: Address,
    ) -> Vec<u128>;
}
