use soroban_sdk::{contracttype, Address, Env};
use utils::bump::bump_persistent;
use utils::utils::sort;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Reserves(Address, Address), // sorted token pair
}

// Reserves of a pair, ordered as (token_a, token_b) regardless of storage order.
pub(crate) fn get_reserves(e: &Env, token_a: &Address, token_b: &Address) -> Option<(u128, u128)> {
    let (first, second) = sort(token_a, token_b);
    let key = DataKey::Reserves(first.clone(), second);
    let (reserve_first, reserve_second): (u128, u128) = e.storage().persistent().get(&key)?;
    bump_persistent(e, &key);
    if &first == token_a {
        Some((reserve_first, reserve_second))
    } else {
        Some((reserve_second, reserve_first))
    }
}

pub(crate) fn set_reserves(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    reserve_a: u128,
    reserve_b: u128,
) {
    let (first, second) = sort(token_a, token_b);
    let value = if &first == token_a {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    };
    let key = DataKey::Reserves(first, second);
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
