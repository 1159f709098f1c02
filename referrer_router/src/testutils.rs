#![cfg(test)]
extern crate std;

use crate::{ReferrerRouter, ReferrerRouterClient};
use mock_amm_router::{MockAmmRouter, MockAmmRouterClient};
use mock_lending_pool::{MockLendingPool, MockLendingPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Vec};
use yield_router::{YieldRouter, YieldRouterClient};

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) contract: ReferrerRouterClient<'a>,
    pub(crate) yield_router: YieldRouterClient<'a>,
    pub(crate) lending_pool: MockLendingPoolClient<'a>,

    pub(crate) usd: TokenClient<'a>,
    pub(crate) wrapped_usd: TokenClient<'a>,
    pub(crate) token_a: TokenClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let native = create_token_contract(&e, &admin);
        let native_sentinel = Address::generate(&e);
        let usd = create_token_contract(&e, &admin);
        let token_a = create_token_contract(&e, &admin);

        let lending_pool = MockLendingPoolClient::new(
            &e,
            &e.register(
                MockLendingPool,
                (&admin, &native.address, &native_sentinel),
            ),
        );
        let wrapped_usd = create_token_contract(&e, &lending_pool.address);
        lending_pool.list_reserve(&admin, &usd.address, &wrapped_usd.address);

        let amm_router = MockAmmRouterClient::new(&e, &e.register(MockAmmRouter, ()));
        for token in [&usd, &token_a] {
            StellarAssetClient::new(&e, &token.address).mint(&admin, &1000_0000000);
        }
        amm_router.add_liquidity(
            &admin,
            &usd.address,
            &token_a.address,
            &1000_0000000,
            &1000_0000000,
        );

        let yield_router = YieldRouterClient::new(
            &e,
            &e.register(
                YieldRouter,
                (
                    &amm_router.address,
                    &lending_pool.address,
                    &native.address,
                    &native_sentinel,
                ),
            ),
        );
        let contract = ReferrerRouterClient::new(
            &e,
            &e.register(ReferrerRouter, (&yield_router.address,)),
        );

        Setup {
            env: e,
            contract,
            yield_router,
            lending_pool,
            usd,
            wrapped_usd,
            token_a,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn mint(&self, token: &TokenClient, to: &Address, amount: u128) {
        StellarAssetClient::new(&self.env, &token.address).mint(to, &(amount as i128));
    }

    pub(crate) fn mint_wrapped(&self, to: &Address, amount: u128) {
        self.mint(&self.usd, to, amount);
        self.lending_pool
            .deposit(to, &self.usd.address, &amount, to);
    }

    pub(crate) fn path(&self, tokens: &[&TokenClient]) -> Vec<Address> {
        let mut path = Vec::new(&self.env);
        for token in tokens {
            path.push_back(token.address.clone());
        }
        path
    }

    // Neither router keeps anything once a call settles.
    pub(crate) fn assert_no_residual(&self) {
        for token in [&self.usd, &self.wrapped_usd, &self.token_a] {
            assert_eq!(token.balance(&self.contract.address), 0);
            assert_eq!(token.balance(&self.yield_router.address), 0);
        }
    }
}

fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}
