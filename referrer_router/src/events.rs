use soroban_sdk::{Address, Env, Symbol, Vec};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

pub(crate) trait ReferrerRouterEvents {
    fn referral(&self, referrer: Address, user: Address, path: Vec<Address>, amounts: Vec<u128>);
}

impl ReferrerRouterEvents for Events {
    fn referral(&self, referrer: Address, user: Address, path: Vec<Address>, amounts: Vec<u128>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "referral"), referrer, user),
            (path, amounts),
        );
    }
}
