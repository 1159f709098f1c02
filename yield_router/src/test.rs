#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use crate::{SwapPlan, YieldRouterError};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Error, IntoVal, Symbol, Vec};
use utils::test_utils::jump;

#[test]
fn test_getters() {
    let setup = Setup::default();
    assert_eq!(setup.contract.get_amm_router(), setup.amm_router.address);
    assert_eq!(setup.contract.get_lending_pool(), setup.lending_pool.address);
    assert_eq!(setup.contract.get_native_asset(), setup.native.address);
}

#[test]
fn test_compute_swap_plain_path() {
    let setup = Setup::default();
    let path = setup.path(&[
        &setup.usd,
        &setup.token_a,
        &setup.token_b,
        &setup.token_c,
        &setup.native,
    ]);

    assert_eq!(
        setup.contract.compute_swap(&path),
        SwapPlan {
            reserve_in: None,
            deposit_in: false,
            reserve_out: None,
            deposit_out: false,
            next_path: path.clone(),
        }
    );
}

#[test]
fn test_compute_swap_wrapped_both_ends() {
    let setup = Setup::default();
    let path = setup.path(&[
        &setup.wrapped_usd,
        &setup.usd,
        &setup.token_a,
        &setup.token_b,
        &setup.token_c,
        &setup.native,
        &setup.wrapped_native,
    ]);

    let plan = setup.contract.compute_swap(&path);
    assert_eq!(
        plan,
        SwapPlan {
            reserve_in: Some(setup.usd.address.clone()),
            deposit_in: false,
            reserve_out: Some(setup.native.address.clone()),
            deposit_out: true,
            next_path: setup.path(&[
                &setup.usd,
                &setup.token_a,
                &setup.token_b,
                &setup.token_c,
                &setup.native,
            ]),
        }
    );
    // pure function of the registry state
    assert_eq!(setup.contract.compute_swap(&path), plan);
}

#[test]
fn test_compute_swap_single_end() {
    let setup = Setup::default();

    let head = setup.contract.compute_swap(&setup.path(&[
        &setup.wrapped_native,
        &setup.native,
        &setup.token_c,
    ]));
    assert_eq!(head.reserve_in, Some(setup.native.address.clone()));
    assert!(!head.deposit_in);
    assert_eq!(head.reserve_out, None);
    assert!(!head.deposit_out);
    assert_eq!(head.next_path, setup.path(&[&setup.native, &setup.token_c]));

    let tail = setup.contract.compute_swap(&setup.path(&[
        &setup.token_a,
        &setup.usd,
        &setup.wrapped_usd,
    ]));
    assert_eq!(tail.reserve_in, None);
    assert_eq!(tail.reserve_out, Some(setup.usd.address.clone()));
    assert!(tail.deposit_out);
    assert_eq!(tail.next_path, setup.path(&[&setup.token_a, &setup.usd]));
}

#[test]
fn test_compute_swap_wrapped_not_paired_with_underlying() {
    let setup = Setup::default();

    // wrapped token second, underlying first: nothing to redeem at the head
    let path = setup.path(&[&setup.usd, &setup.wrapped_usd, &setup.token_a]);
    let plan = setup.contract.compute_swap(&path);
    assert_eq!(plan.reserve_in, None);
    assert_eq!(plan.reserve_out, None);
    assert_eq!(plan.next_path, path);

    // wrapped token next to some other listed reserve
    let path = setup.path(&[&setup.wrapped_native, &setup.usd, &setup.token_a]);
    let plan = setup.contract.compute_swap(&path);
    assert_eq!(plan.reserve_in, None);
    assert_eq!(plan.next_path, path);
}

#[test]
fn test_compute_swap_native_needs_sentinel() {
    let setup = Setup::default();

    // registry lists the native asset only under its sentinel
    assert_eq!(
        setup.lending_pool.wrapped_token_for(&setup.native.address),
        None
    );
    assert_eq!(
        setup.lending_pool.wrapped_token_for(&setup.native_sentinel),
        Some(setup.wrapped_native.address.clone())
    );

    let plan = setup.contract.compute_swap(&setup.path(&[
        &setup.token_c,
        &setup.native,
        &setup.wrapped_native,
    ]));
    assert_eq!(plan.reserve_out, Some(setup.native.address.clone()));
    assert_eq!(plan.next_path, setup.path(&[&setup.token_c, &setup.native]));
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_compute_swap_single_token() {
    let setup = Setup::default();
    setup.contract.compute_swap(&setup.path(&[&setup.usd]));
}

#[test]
fn test_get_amounts_out() {
    let setup = Setup::default();
    let path = setup.path(&[
        &setup.wrapped_usd,
        &setup.usd,
        &setup.token_a,
        &setup.token_b,
        &setup.token_c,
        &setup.native,
        &setup.wrapped_native,
    ]);
    let inner_path = setup.contract.compute_swap(&path).next_path;

    let inner = setup.amm_router.get_amounts_out(&1_0000000, &inner_path);
    let amounts = setup.contract.get_amounts_out(&1_0000000, &path);
    assert_eq!(amounts.len(), path.len());
    assert_eq!(amounts.get_unchecked(0), 1_0000000);
    assert_eq!(amounts.slice(1..6), inner);
    assert_eq!(amounts.get_unchecked(6), inner.last_unchecked());

    // no wrapped ends: identical to the exchange router
    assert_eq!(
        setup.contract.get_amounts_out(&1_0000000, &inner_path),
        inner
    );
}

#[test]
fn test_get_amounts_in() {
    let setup = Setup::default();
    let path = setup.path(&[
        &setup.wrapped_native,
        &setup.native,
        &setup.token_c,
        &setup.token_b,
    ]);

    let inner = setup
        .amm_router
        .get_amounts_in(&5_0000000, &setup.path(&[&setup.native, &setup.token_c, &setup.token_b]));
    let amounts = setup.contract.get_amounts_in(&5_0000000, &path);
    assert_eq!(amounts.len(), 4);
    assert_eq!(amounts.get_unchecked(0), inner.get_unchecked(0));
    assert_eq!(amounts.slice(1..), inner);
    assert_eq!(amounts.get_unchecked(3), 5_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_get_amounts_out_nothing_to_swap() {
    let setup = Setup::default();
    setup
        .contract
        .get_amounts_out(&1_0000000, &setup.path(&[&setup.wrapped_usd, &setup.usd]));
}

#[test]
fn test_swap_exact_in_wrapped_both_ends() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let to = Address::generate(e);
    setup.mint_wrapped(&setup.usd, &user, 1_0000000);
    setup.assert_no_residual();

    let path = setup.path(&[
        &setup.wrapped_usd,
        &setup.usd,
        &setup.token_a,
        &setup.token_b,
        &setup.token_c,
        &setup.native,
        &setup.wrapped_native,
    ]);
    let quote = setup.contract.get_amounts_out(&1_0000000, &path);
    let amounts = setup.contract.swap_exact_tokens_for_tokens(
        &user,
        &1_0000000,
        &quote.last_unchecked(),
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(amounts, quote);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.contract.address.clone(),
                (Symbol::new(e, "swap"), user.clone(), to.clone()).into_val(e),
                (path.clone(), amounts.clone()).into_val(e),
            ),
        ]
    );

    assert_eq!(setup.wrapped_usd.balance(&user), 0);
    assert_eq!(
        setup.wrapped_native.balance(&to),
        amounts.last_unchecked() as i128
    );
    assert_eq!(setup.native.balance(&to), 0);
    setup.assert_no_residual();
}

#[test]
fn test_swap_exact_in_all_boundary_combinations() {
    let setup = Setup::default();
    let e = &setup.env;

    let paths: [(Vec<Address>, &soroban_sdk::token::TokenClient, bool); 4] = [
        (
            setup.path(&[&setup.usd, &setup.token_a, &setup.token_b]),
            &setup.token_b,
            false,
        ),
        (
            setup.path(&[&setup.wrapped_usd, &setup.usd, &setup.token_a]),
            &setup.token_a,
            true,
        ),
        (
            setup.path(&[&setup.token_b, &setup.token_c, &setup.native, &setup.wrapped_native]),
            &setup.wrapped_native,
            false,
        ),
        (
            setup.path(&[&setup.wrapped_native, &setup.native, &setup.token_c, &setup.token_b]),
            &setup.token_b,
            true,
        ),
    ];

    for (path, token_out, wrapped_in) in paths.iter() {
        let user = Address::generate(e);
        let token_in = path.first_unchecked();
        if *wrapped_in {
            let reserve = soroban_sdk::token::TokenClient::new(e, &path.get_unchecked(1));
            setup.mint_wrapped(&reserve, &user, 1_0000000);
        } else {
            setup.mint(
                &soroban_sdk::token::TokenClient::new(e, &token_in),
                &user,
                1_0000000,
            );
        }

        let amounts =
            setup
                .contract
                .swap_exact_tokens_for_tokens(&user, &1_0000000, &0, path, &user, &u64::MAX);
        assert_eq!(amounts.len(), path.len());
        assert_eq!(amounts.first_unchecked(), 1_0000000);
        assert_eq!(
            soroban_sdk::token::TokenClient::new(e, &token_in).balance(&user),
            0
        );
        assert_eq!(token_out.balance(&user), amounts.last_unchecked() as i128);
        setup.assert_no_residual();
    }
}

#[test]
fn test_swap_exact_out_wrapped_both_ends() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint_wrapped(&setup.usd, &user, 2_0000000);

    let path = setup.path(&[
        &setup.wrapped_usd,
        &setup.usd,
        &setup.token_a,
        &setup.token_b,
        &setup.token_c,
        &setup.native,
        &setup.wrapped_native,
    ]);
    let quote = setup.contract.get_amounts_in(&1_0000000, &path);
    let amounts = setup.contract.swap_tokens_for_exact_tokens(
        &user,
        &1_0000000,
        &2_0000000,
        &path,
        &user,
        &u64::MAX,
    );
    assert_eq!(amounts, quote);
    assert_eq!(amounts.len(), 7);
    assert_eq!(amounts.last_unchecked(), 1_0000000);

    assert_eq!(setup.wrapped_native.balance(&user), 1_0000000);
    assert_eq!(
        setup.wrapped_usd.balance(&user),
        2_0000000 - amounts.first_unchecked() as i128
    );
    assert_eq!(setup.usd.balance(&user), 0);
    setup.assert_no_residual();
}

#[test]
fn test_swap_exact_out_plain_path() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.usd, &user, 2_0000000);

    let path = setup.path(&[&setup.usd, &setup.token_a, &setup.token_b]);
    let amounts = setup.contract.swap_tokens_for_exact_tokens(
        &user,
        &1_0000000,
        &2_0000000,
        &path,
        &user,
        &u64::MAX,
    );
    assert_eq!(setup.token_b.balance(&user), 1_0000000);
    assert_eq!(
        setup.usd.balance(&user),
        2_0000000 - amounts.first_unchecked() as i128
    );
    setup.assert_no_residual();
}

#[test]
#[should_panic(expected = "Error(Contract, #2103)")]
fn test_swap_exact_out_in_max_exceeded() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint_wrapped(&setup.usd, &user, 2_0000000);

    setup.contract.swap_tokens_for_exact_tokens(
        &user,
        &1_0000000,
        &1_0000000,
        &setup.path(&[&setup.wrapped_usd, &setup.usd, &setup.token_a]),
        &user,
        &u64::MAX,
    );
}

#[test]
fn test_swap_exact_in_out_min_not_met() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint_wrapped(&setup.usd, &user, 1_0000000);

    let path = setup.path(&[&setup.wrapped_usd, &setup.usd, &setup.token_a]);
    let quote = setup.contract.get_amounts_out(&1_0000000, &path);
    assert_eq!(
        setup
            .contract
            .try_swap_exact_tokens_for_tokens(
                &user,
                &1_0000000,
                &(quote.last_unchecked() + 1),
                &path,
                &user,
                &u64::MAX,
            )
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::SlippageExceeded as u32))
    );
    // custody and redemption rolled back
    assert_eq!(setup.wrapped_usd.balance(&user), 1_0000000);
    assert_eq!(setup.usd.balance(&setup.lending_pool.address), 1_0000000);
    setup.assert_no_residual();
}

#[test]
fn test_swap_expired() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.usd, &user, 1_0000000);
    jump(e, 1000);

    let path = setup.path(&[&setup.usd, &setup.token_a, &setup.token_b]);
    assert_eq!(
        setup
            .contract
            .try_swap_exact_tokens_for_tokens(&user, &1_0000000, &0, &path, &user, &999)
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::Expired as u32))
    );
    assert_eq!(
        setup
            .contract
            .try_swap_tokens_for_exact_tokens(&user, &1000, &1_0000000, &path, &user, &999)
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::Expired as u32))
    );
    assert_eq!(setup.usd.balance(&user), 1_0000000);
    setup.assert_no_residual();
}

#[test]
fn test_swap_invalid_inner_path() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint_wrapped(&setup.usd, &user, 1_0000000);

    // redeeming alone leaves nothing for the exchange router
    assert_eq!(
        setup
            .contract
            .try_swap_exact_tokens_for_tokens(
                &user,
                &1_0000000,
                &0,
                &setup.path(&[&setup.wrapped_usd, &setup.usd]),
                &user,
                &u64::MAX,
            )
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::InvalidPath as u32))
    );
    assert_eq!(setup.wrapped_usd.balance(&user), 1_0000000);

    // exchange router has no such pair
    setup.mint(&setup.token_a, &user, 1_0000000);
    assert_eq!(
        setup
            .contract
            .try_swap_exact_tokens_for_tokens(
                &user,
                &1_0000000,
                &0,
                &setup.path(&[&setup.token_a, &setup.native]),
                &user,
                &u64::MAX,
            )
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::InvalidPath as u32))
    );
    assert_eq!(setup.token_a.balance(&user), 1_0000000);
    setup.assert_no_residual();
}

#[test]
fn test_deposit_withdraw() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.usd, &user, 5_0000000);
    setup.mint(&setup.native, &user, 3_0000000);

    setup.contract.deposit(&user, &setup.usd.address, &5_0000000);
    assert_eq!(setup.usd.balance(&user), 0);
    assert_eq!(setup.wrapped_usd.balance(&user), 5_0000000);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.contract.address.clone(),
                (Symbol::new(e, "deposit"), user.clone()).into_val(e),
                (setup.usd.address.clone(), 5_0000000_u128).into_val(e),
            ),
        ]
    );

    setup.contract.withdraw(&user, &setup.usd.address, &2_0000000);
    assert_eq!(setup.usd.balance(&user), 2_0000000);
    assert_eq!(setup.wrapped_usd.balance(&user), 3_0000000);

    // native asset goes through the registry sentinel
    setup.contract.deposit(&user, &setup.native.address, &3_0000000);
    assert_eq!(setup.wrapped_native.balance(&user), 3_0000000);
    setup.contract.withdraw(&user, &setup.native.address, &3_0000000);
    assert_eq!(setup.native.balance(&user), 3_0000000);
    assert_eq!(setup.wrapped_native.balance(&user), 0);

    setup.assert_no_residual();
}

#[test]
fn test_deposit_withdraw_unknown_reserve() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.token_a, &user, 1_0000000);

    assert_eq!(
        setup
            .contract
            .try_deposit(&user, &setup.token_a.address, &1_0000000)
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::UnknownReserve as u32))
    );
    assert_eq!(
        setup
            .contract
            .try_withdraw(&user, &setup.token_a.address, &1_0000000)
            .unwrap_err(),
        Ok(Error::from_contract_error(YieldRouterError::UnknownReserve as u32))
    );
    assert_eq!(setup.token_a.balance(&user), 1_0000000);
}

#[test]
fn test_round_trip() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.usd, &user, 1_0000000);

    setup.contract.deposit(&user, &setup.usd.address, &1_0000000);
    setup.assert_no_residual();

    let there = setup.contract.swap_exact_tokens_for_tokens(
        &user,
        &1_0000000,
        &0,
        &setup.path(&[&setup.wrapped_usd, &setup.usd, &setup.token_a]),
        &user,
        &u64::MAX,
    );
    setup.assert_no_residual();

    let back_path = setup.path(&[&setup.token_a, &setup.usd, &setup.wrapped_usd]);
    let quote = setup
        .contract
        .get_amounts_out(&there.last_unchecked(), &back_path);
    let back = setup.contract.swap_exact_tokens_for_tokens(
        &user,
        &there.last_unchecked(),
        &quote.last_unchecked(),
        &back_path,
        &user,
        &u64::MAX,
    );
    assert_eq!(back, quote);
    setup.assert_no_residual();

    let wrapped = back.last_unchecked();
    setup.contract.withdraw(&user, &setup.usd.address, &wrapped);
    setup.assert_no_residual();

    assert_eq!(setup.usd.balance(&user), wrapped as i128);
    assert_eq!(setup.wrapped_usd.balance(&user), 0);
    assert_eq!(setup.token_a.balance(&user), 0);
    // two hops of 0.3% fee plus price impact
    assert!(wrapped < 1_0000000);
    assert!(wrapped > 1_0000000 * 98 / 100);
}
