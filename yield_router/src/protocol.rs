use crate::errors::YieldRouterError;
use amm_router_interface::AmmRouterError;
use soroban_sdk::{panic_with_error, Env};

// Unwrap the outcome of a `try_*` call into the yield protocol or a token contract.
// Any failure aborts the invocation, rolling back custody moved earlier in it.
pub(crate) fn expect_protocol_call<T, C, E>(e: &Env, result: Result<Result<T, C>, E>) -> T {
    match result {
        Ok(Ok(value)) => value,
        _ => panic_with_error!(e, YieldRouterError::ProtocolCallFailure),
    }
}

// Same as above for the exchange router, keeping its failure reason.
pub(crate) fn expect_router_call<T, C, I>(
    e: &Env,
    result: Result<Result<T, C>, Result<AmmRouterError, I>>,
) -> T {
    match result {
        Ok(Ok(value)) => value,
        Err(Ok(AmmRouterError::Expired)) => panic_with_error!(e, YieldRouterError::Expired),
        Err(Ok(AmmRouterError::InsufficientOutputAmount))
        | Err(Ok(AmmRouterError::ExcessiveInputAmount)) => {
            panic_with_error!(e, YieldRouterError::SlippageExceeded)
        }
        Err(Ok(AmmRouterError::InvalidPath)) | Err(Ok(AmmRouterError::PairNotFound)) => {
            panic_with_error!(e, YieldRouterError::InvalidPath)
        }
        _ => panic_with_error!(e, YieldRouterError::ProtocolCallFailure),
    }
}
