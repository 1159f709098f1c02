pub(crate) const FEE_MULTIPLIER: u128 = 10_000;
pub(crate) const FEE_FRACTION: u128 = 30; // 0.3%
