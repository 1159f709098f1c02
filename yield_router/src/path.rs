use crate::errors::YieldRouterError;
use crate::resolver::{ReserveKind, ReserveResolver};
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

// Boundary conversions needed to route a caller path through the exchange router.
//
// A wrapped token at the head is always redeemed (`deposit_in` stays false) and a
// wrapped token at the tail is always minted by depositing the swap output
// (`deposit_out` is true). `next_path` holds the underlying-only inner path.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapPlan {
    pub reserve_in: Option<Address>,
    pub deposit_in: bool,
    pub reserve_out: Option<Address>,
    pub deposit_out: bool,
    pub next_path: Vec<Address>,
}

impl SwapPlan {
    // Inner path must still describe at least one hop on the exchange router.
    pub(crate) fn require_routable(&self, e: &Env) {
        if self.next_path.len() < 2 {
            panic_with_error!(e, YieldRouterError::InvalidPath);
        }
    }
}

pub(crate) fn compute_swap(e: &Env, resolver: &ReserveResolver, path: &Vec<Address>) -> SwapPlan {
    if path.len() < 2 {
        panic_with_error!(e, YieldRouterError::InvalidPath);
    }

    let mut next_path = path.clone();

    let mut reserve_in = None;
    if let ReserveKind::Wrapped(underlying) =
        resolver.classify(&next_path.get_unchecked(0), &next_path.get_unchecked(1))
    {
        reserve_in = Some(underlying);
        next_path = next_path.slice(1..);
    }

    let mut reserve_out = None;
    let mut deposit_out = false;
    let len = next_path.len();
    if len >= 2 {
        if let ReserveKind::Wrapped(underlying) = resolver.classify(
            &next_path.get_unchecked(len - 1),
            &next_path.get_unchecked(len - 2),
        ) {
            reserve_out = Some(underlying);
            deposit_out = true;
            next_path = next_path.slice(..len - 1);
        }
    }

    SwapPlan {
        reserve_in,
        deposit_in: false,
        reserve_out,
        deposit_out,
        next_path,
    }
}
