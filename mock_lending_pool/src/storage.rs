use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
    NativeAsset,
    NativeSentinel,
    WrappedToken(Address), // registry key (reserve or native sentinel) -> wrapped token
    Reserve(Address),      // wrapped token -> underlying token contract
}

generate_instance_storage_getter_and_setter!(admin, DataKey::Admin, Address);
generate_instance_storage_getter_and_setter!(native_asset, DataKey::NativeAsset, Address);
generate_instance_storage_getter_and_setter!(native_sentinel, DataKey::NativeSentinel, Address);

// The registry keeps the native asset under the sentinel, every other reserve under itself.
pub(crate) fn registry_key(e: &Env, reserve: &Address) -> Address {
    if reserve == &get_native_asset(e) {
        get_native_sentinel(e)
    } else {
        reserve.clone()
    }
}

pub(crate) fn get_wrapped_token(e: &Env, key: &Address) -> Option<Address> {
    let key = DataKey::WrappedToken(key.clone());
    let result = e.storage().persistent().get(&key);
    if result.is_some() {
        bump_persistent(e, &key);
    }
    result
}

pub(crate) fn set_wrapped_token(e: &Env, key: &Address, wrapped: &Address) {
    let key = DataKey::WrappedToken(key.clone());
    e.storage().persistent().set(&key, wrapped);
    bump_persistent(e, &key);
}

pub(crate) fn get_reserve(e: &Env, wrapped: &Address) -> Option<Address> {
    let key = DataKey::Reserve(wrapped.clone());
    let result = e.storage().persistent().get(&key);
    if result.is_some() {
        bump_persistent(e, &key);
    }
    result
}

pub(crate) fn set_reserve(e: &Env, wrapped: &Address, reserve: &Address) {
    let key = DataKey::Reserve(wrapped.clone());
    e.storage().persistent().set(&key, reserve);
    bump_persistent(e, &key);
}
