#![allow(clippy::unwrap_used)]

use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction},
    vec, Address, IntoVal, String, Symbol,
};
use token_sale::SaleError;
use token_sale_tests::utils::constants::*;
use token_sale_tests::utils::{SaleFixture, SaleParams};

#[test]
fn test_buy_is_authorized_by_investor() {
    let f = SaleFixture::deploy(SaleParams::default()).with_vesting();
    let investor = f.investor(SALE_PRICE);

    f.sale.buy(&investor, &SALE_PRICE);

    let auths = f.env.auths();
    assert_eq!(auths.len(), 1);
    let (address, invocation) = &auths[0];
    assert_eq!(address, &investor);
    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            f.sale.address.clone(),
            Symbol::new(&f.env, "buy"),
            (investor.clone(), SALE_PRICE).into_val(&f.env),
        ))
    );
}

#[test]
fn test_buy_without_investor_signature_fails() {
    let f = SaleFixture::deploy(SaleParams::default()).with_vesting();
    let investor = f.investor(SALE_PRICE);

    f.env.set_auths(&[]);
    assert!(f.sale.try_buy(&investor, &SALE_PRICE).is_err());

    f.env.mock_all_auths();
    assert_eq!(f.sale.total_amount_invested(), 0);
    assert_eq!(f.payment.balance(&investor), SALE_PRICE);
}

#[test]
fn test_admin_calls_are_authorized_by_admin() {
    let f = SaleFixture::deploy(SaleParams::default());

    f.sale.set_vesting_info(
        &f.admin,
        &f.lockup.address,
        &CLIFF,
        &VEST_PERIOD,
        &VEST_LENGTH,
    );

    let auths = f.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, f.admin);
}

#[test]
fn test_admin_calls_need_admin_signature() {
    let f = SaleFixture::deploy(SaleParams::private());
    let user = Address::generate(&f.env);

    f.env.set_auths(&[]);
    assert!(f
        .sale
        .try_pause_sale(&f.admin, &String::from_str(&f.env, "no signature"))
        .is_err());
    assert!(f
        .sale
        .try_batch_white_list_add(&f.admin, &vec![&f.env, user.clone()])
        .is_err());

    f.env.mock_all_auths();
    assert!(!f.sale.is_paused());
    assert!(!f.sale.is_white_listed(&user));
}

#[test]
fn test_signed_non_admin_is_rejected() {
    let f = SaleFixture::deploy(SaleParams::private()).with_vesting();
    let impostor = f.investor(SOFT_CAP);

    assert_eq!(
        f.sale
            .try_set_soft_cap_refund_address(&impostor, &impostor),
        Err(Ok(SaleError::Unauthorized))
    );
    assert_eq!(
        f.sale.try_extend_end_time(&impostor, &(SALE_START + SALE_DURATION * 2)),
        Err(Ok(SaleError::Unauthorized))
    );

    f.close();
    assert_eq!(
        f.sale.try_withdraw_all(&impostor, &impostor),
        Err(Ok(SaleError::Unauthorized))
    );
}

#[test]
fn test_refund_needs_no_signature() {
    let f = SaleFixture::deploy(SaleParams::default()).with_vesting();
    let investor = f.investor(SALE_PRICE);
    let plan_id = f.sale.buy(&investor, &SALE_PRICE);
    f.close();

    f.env.set_auths(&[]);
    assert_eq!(f.sale.refund(&investor, &plan_id), SALE_PRICE);
    assert_eq!(f.payment.balance(&investor), SALE_PRICE);
}
