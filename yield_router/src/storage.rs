use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    AmmRouter,      // Address of the exchange router swaps are delegated to.
    LendingPool,    // Address of the yield protocol minting wrapped tokens.
    NativeAsset,    // Token contract of the native asset as it appears in paths.
    NativeSentinel, // Alias the yield protocol registry uses for the native asset.
}

generate_instance_storage_getter_and_setter!(amm_router, DataKey::AmmRouter, Address);
generate_instance_storage_getter_and_setter!(lending_pool, DataKey::LendingPool, Address);
generate_instance_storage_getter_and_setter!(native_asset, DataKey::NativeAsset, Address);
generate_instance_storage_getter_and_setter!(native_sentinel, DataKey::NativeSentinel, Address);
