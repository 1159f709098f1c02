#![cfg(test)]
extern crate std;

use crate::{YieldRouter, YieldRouterClient};
use mock_amm_router::{MockAmmRouter, MockAmmRouterClient};
use mock_lending_pool::{MockLendingPool, MockLendingPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Env, Vec};

pub(crate) const PAIR_LIQUIDITY: u128 = 1000_0000000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) admin: Address,
    pub(crate) contract: YieldRouterClient<'a>,
    pub(crate) amm_router: MockAmmRouterClient<'a>,
    pub(crate) lending_pool: MockLendingPoolClient<'a>,
    pub(crate) native_sentinel: Address,

    // reserves listed on the yield protocol and their wrapped tokens
    pub(crate) usd: SorobanTokenClient<'a>,
    pub(crate) wrapped_usd: SorobanTokenClient<'a>,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped_native: SorobanTokenClient<'a>,

    // plain exchange tokens
    pub(crate) token_a: SorobanTokenClient<'a>,
    pub(crate) token_b: SorobanTokenClient<'a>,
    pub(crate) token_c: SorobanTokenClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::setup()
    }
}

impl<'a> Setup<'a> {
    pub(crate) fn setup() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let native_sentinel = Address::generate(&e);

        let native = create_token_contract(&e, &admin);
        let usd = create_token_contract(&e, &admin);
        let token_a = create_token_contract(&e, &admin);
        let token_b = create_token_contract(&e, &admin);
        let token_c = create_token_contract(&e, &admin);

        let lending_pool = MockLendingPoolClient::new(
            &e,
            &e.register(MockLendingPool, (&admin, &native.address, &native_sentinel)),
        );
        let wrapped_usd = create_token_contract(&e, &lending_pool.address);
        let wrapped_native = create_token_contract(&e, &lending_pool.address);
        lending_pool.list_reserve(&admin, &usd.address, &wrapped_usd.address);
        lending_pool.list_reserve(&admin, &native.address, &wrapped_native.address);

        let amm_router = MockAmmRouterClient::new(&e, &e.register(MockAmmRouter, ()));

        let contract = create_contract(
            &e,
            &amm_router.address,
            &lending_pool.address,
            &native.address,
            &native_sentinel,
        );

        let setup = Self {
            env: e,
            admin,
            contract,
            amm_router,
            lending_pool,
            native_sentinel,
            usd,
            wrapped_usd,
            native,
            wrapped_native,
            token_a,
            token_b,
            token_c,
        };
        setup.add_liquidity(&setup.usd, &setup.token_a);
        setup.add_liquidity(&setup.token_a, &setup.token_b);
        setup.add_liquidity(&setup.token_b, &setup.token_c);
        setup.add_liquidity(&setup.token_c, &setup.native);
        setup
    }

    fn add_liquidity(&self, token_a: &SorobanTokenClient, token_b: &SorobanTokenClient) {
        self.mint(token_a, &self.admin, PAIR_LIQUIDITY);
        self.mint(token_b, &self.admin, PAIR_LIQUIDITY);
        self.amm_router.add_liquidity(
            &self.admin,
            &token_a.address,
            &token_b.address,
            &PAIR_LIQUIDITY,
            &PAIR_LIQUIDITY,
        );
    }

    pub(crate) fn mint(&self, token: &SorobanTokenClient, to: &Address, amount: u128) {
        get_token_admin_client(&self.env, &token.address).mint(to, &(amount as i128));
    }

    // Wrapped tokens only come out of the yield protocol, backed by a real deposit.
    pub(crate) fn mint_wrapped(&self, reserve: &SorobanTokenClient, to: &Address, amount: u128) {
        self.mint(reserve, to, amount);
        self.lending_pool
            .deposit(to, &reserve.address, &amount, to);
    }

    pub(crate) fn path(&self, tokens: &[&SorobanTokenClient]) -> Vec<Address> {
        let mut path = Vec::new(&self.env);
        for token in tokens {
            path.push_back(token.address.clone());
        }
        path
    }

    pub(crate) fn all_tokens(&self) -> [&SorobanTokenClient<'a>; 7] {
        [
            &self.usd,
            &self.wrapped_usd,
            &self.native,
            &self.wrapped_native,
            &self.token_a,
            &self.token_b,
            &self.token_c,
        ]
    }

    pub(crate) fn assert_no_residual(&self) {
        for token in self.all_tokens() {
            assert_eq!(token.balance(&self.contract.address), 0);
        }
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub(crate) fn create_contract<'a>(
    e: &Env,
    amm_router: &Address,
    lending_pool: &Address,
    native_asset: &Address,
    native_sentinel: &Address,
) -> YieldRouterClient<'a> {
    YieldRouterClient::new(
        e,
        &e.register(
            YieldRouter,
            (amm_router, lending_pool, native_asset, native_sentinel),
        ),
    )
}
