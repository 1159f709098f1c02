use crate::errors::MockLendingPoolError;
use crate::storage::{
    get_admin, get_reserve, get_wrapped_token, registry_key, set_admin, set_native_asset,
    set_native_sentinel, set_reserve, set_wrapped_token,
};
use lending_pool_interface::{LendingPoolError, LendingPoolInterface};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

// Minimal yield protocol: wrapped tokens are Stellar asset contracts administered by
// this pool, so it can mint on deposit and burn on withdraw. No interest accrues.
#[contract]
pub struct MockLendingPool;

#[contractimpl]
impl MockLendingPool {
    pub fn __constructor(e: Env, admin: Address, native_asset: Address, native_sentinel: Address) {
        set_admin(&e, &admin);
        set_native_asset(&e, &native_asset);
        set_native_sentinel(&e, &native_sentinel);
    }

    // Register `wrapped` as the yield token of `reserve`. The pool must be the wrapped
    // token's admin.
    pub fn list_reserve(
        e: Env,
        admin: Address,
        reserve: Address,
        wrapped: Address,
    ) -> Result<(), LendingPoolError> {
        admin.require_auth();
        if admin != get_admin(&e) {
            panic_with_error!(&e, MockLendingPoolError::Unauthorized);
        }

        let key = registry_key(&e, &reserve);
        if get_wrapped_token(&e, &key).is_some() {
            return Err(LendingPoolError::AlreadyListed);
        }
        set_wrapped_token(&e, &key, &wrapped);
        set_reserve(&e, &wrapped, &reserve);
        Ok(())
    }

    pub fn reserve_for_wrapped(e: Env, wrapped: Address) -> Option<Address> {
        get_reserve(&e, &wrapped)
    }
}

#[contractimpl]
impl LendingPoolInterface for MockLendingPool {
    fn wrapped_token_for(e: Env, reserve: Address) -> Option<Address> {
        get_wrapped_token(&e, &reserve)
    }

    fn deposit(
        e: Env,
        from: Address,
        reserve: Address,
        amount: u128,
        on_behalf_of: Address,
    ) -> Result<(), LendingPoolError> {
        from.require_auth();

        let wrapped = match get_wrapped_token(&e, &registry_key(&e, &reserve)) {
            Some(v) => v,
            None => return Err(LendingPoolError::ReserveNotListed),
        };
        TokenClient::new(&e, &reserve).transfer(
            &from,
            &e.current_contract_address(),
            &(amount as i128),
        );
        StellarAssetClient::new(&e, &wrapped).mint(&on_behalf_of, &(amount as i128));
        Ok(())
    }

    fn withdraw(
        e: Env,
        from: Address,
        wrapped_token: Address,
        amount: u128,
    ) -> Result<u128, LendingPoolError> {
        from.require_auth();

        let reserve = match get_reserve(&e, &wrapped_token) {
            Some(v) => v,
            None => return Err(LendingPoolError::ReserveNotListed),
        };
        TokenClient::new(&e, &wrapped_token).burn(&from, &(amount as i128));
        TokenClient::new(&e, &reserve).transfer(
            &e.current_contract_address(),
            &from,
            &(amount as i128),
        );
        Ok(amount)
    }
}
