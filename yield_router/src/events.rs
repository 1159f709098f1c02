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

pub(crate) trait YieldRouterEvents {
    fn swap(&self, user: Address, to: Address, path: Vec<Address>, amounts: Vec<u128>);

    fn deposit(&self, user: Address, reserve: Address, amount: u128);

    fn withdraw(&self, user: Address, reserve: Address, amount: u128);
}

impl YieldRouterEvents for Events {
    fn swap(&self, user: Address, to: Address, path: Vec<Address>, amounts: Vec<u128>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "swap"), user, to),
            (path, amounts),
        );
    }

    fn deposit(&self, user: Address, reserve: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deposit"), user),
            (reserve, amount),
        );
    }

    fn withdraw(&self, user: Address, reserve: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "withdraw"), user),
            (reserve, amount),
        );
    }
}
