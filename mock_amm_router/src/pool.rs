use crate::constants::{FEE_FRACTION, FEE_MULTIPLIER};
use crate::storage::get_reserves;
use amm_router_interface::AmmRouterError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Address, Env, Vec};

pub(crate) fn get_amount_out(
    e: &Env,
    in_amount: u128,    // dx
    reserve_sell: u128, // x
    reserve_buy: u128,  // y
) -> u128 {
    if in_amount == 0 {
        return 0;
    }
    let in_after_fee = in_amount * (FEE_MULTIPLIER - FEE_FRACTION) / FEE_MULTIPLIER;
    in_after_fee.fixed_mul_floor(e, &reserve_buy, &(reserve_sell + in_after_fee))
}

pub(crate) fn get_amount_in(
    e: &Env,
    out_amount: u128,   // dy
    reserve_sell: u128, // x
    reserve_buy: u128,  // y
) -> Result<u128, AmmRouterError> {
    if out_amount == 0 {
        return Ok(0);
    }
    if out_amount >= reserve_buy {
        return Err(AmmRouterError::InsufficientLiquidity);
    }

    // dx_after_fee = ceil(x·dy / (y-dy)), then gross up for the fee taken on input
    let dx_after_fee = reserve_sell.fixed_mul_ceil(e, &out_amount, &(reserve_buy - out_amount));
    Ok(dx_after_fee.fixed_mul_ceil(e, &FEE_MULTIPLIER, &(FEE_MULTIPLIER - FEE_FRACTION)))
}

fn hop_reserves(e: &Env, sell: &Address, buy: &Address) -> Result<(u128, u128), AmmRouterError> {
    if sell == buy {
        return Err(AmmRouterError::InvalidPath);
    }
    match get_reserves(e, sell, buy) {
        Some((0, _)) | Some((_, 0)) => Err(AmmRouterError::InsufficientLiquidity),
        Some(v) => Ok(v),
        None => Err(AmmRouterError::PairNotFound),
    }
}

pub(crate) fn amounts_out(
    e: &Env,
    amount_in: u128,
    path: &Vec<Address>,
) -> Result<Vec<u128>, AmmRouterError> {
    if path.len() < 2 {
        return Err(AmmRouterError::InvalidPath);
    }
    let mut amounts = Vec::from_array(e, [amount_in]);
    let mut current = amount_in;
    for i in 0..path.len() - 1 {
        let (reserve_sell, reserve_buy) =
            hop_reserves(e, &path.get_unchecked(i), &path.get_unchecked(i + 1))?;
        current = get_amount_out(e, current, reserve_sell, reserve_buy);
        amounts.push_back(current);
    }
    Ok(amounts)
}

pub(crate) fn amounts_in(
    e: &Env,
    amount_out: u128,
    path: &Vec<Address>,
) -> Result<Vec<u128>, AmmRouterError> {
    if path.len() < 2 {
        return Err(AmmRouterError::InvalidPath);
    }
    let mut amounts = Vec::from_array(e, [amount_out]);
    let mut current = amount_out;
    for i in (1..path.len()).rev() {
        let (reserve_sell, reserve_buy) =
            hop_reserves(e, &path.get_unchecked(i - 1), &path.get_unchecked(i))?;
        current = get_amount_in(e, current, reserve_sell, reserve_buy)?;
        amounts.push_front(current);
    }
    Ok(amounts)
}
