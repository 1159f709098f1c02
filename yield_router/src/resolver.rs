use crate::protocol::expect_protocol_call;
use crate::storage::{get_lending_pool, get_native_asset, get_native_sentinel};
use lending_pool_interface::LendingPoolClient;
use soroban_sdk::{log, Address, Env};

// The native asset is known under two addresses: the token contract used in swap paths
// and the sentinel the yield protocol registry files it under. Only the resolver
// translates between them.
#[derive(Clone)]
pub(crate) struct NativeAsset {
    canonical: Address,
    sentinel: Address,
}

impl NativeAsset {
    pub(crate) fn new(canonical: Address, sentinel: Address) -> Self {
        NativeAsset {
            canonical,
            sentinel,
        }
    }

    pub(crate) fn registry_key(&self, token: &Address) -> Address {
        if token == &self.canonical {
            self.sentinel.clone()
        } else {
            token.clone()
        }
    }
}

// Role of a path-end token relative to its neighbour inside the path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ReserveKind {
    // the neighbour has a wrapped token, but it is some other token
    Underlying,
    // token is the wrapped token minted against the contained underlying
    Wrapped(Address),
    // the neighbour has no wrapped token listed
    Unknown,
}

pub(crate) struct ReserveResolver {
    env: Env,
    lending_pool: Address,
    native: NativeAsset,
}

impl ReserveResolver {
    pub(crate) fn new(e: &Env) -> ReserveResolver {
        ReserveResolver {
            env: e.clone(),
            lending_pool: get_lending_pool(e),
            native: NativeAsset::new(get_native_asset(e), get_native_sentinel(e)),
        }
    }

    // Wrapped token the yield protocol mints for `reserve`, if it lists one.
    pub(crate) fn resolve_wrapped(&self, reserve: &Address) -> Option<Address> {
        let key = self.native.registry_key(reserve);
        if &key != reserve {
            log!(&self.env, "native reserve looked up by sentinel");
        }
        expect_protocol_call(
            &self.env,
            LendingPoolClient::new(&self.env, &self.lending_pool).try_wrapped_token_for(&key),
        )
    }

    pub(crate) fn classify(&self, token: &Address, neighbour: &Address) -> ReserveKind {
        match self.resolve_wrapped(neighbour) {
            Some(wrapped) if &wrapped == token => ReserveKind::Wrapped(neighbour.clone()),
            Some(_) => ReserveKind::Underlying,
            None => ReserveKind::Unknown,
        }
    }
}
