//! Investment accounting. Writes here are unconditional: the caller has
//! already checked caps and sale timing.

use crate::errors::SaleError;
use crate::storage::*;
use crate::types::{Investment, SaleState};
use soroban_sdk::{Address, Env};

/// Sold-token units bought with `payment` at `price` payment units per whole
/// sold token. Truncates; sub-unit dust stays with the sale.
pub fn purchased_amount(payment: i128, decimals: u32, price: i128) -> Result<i128, SaleError> {
    if price <= 0 {
        return Err(SaleError::InvalidSaleConfig);
    }
    let unit = 10i128.checked_pow(decimals).ok_or(SaleError::Overflow)?;
    payment
        .checked_mul(unit)
        .and_then(|scaled| scaled.checked_div(price))
        .ok_or(SaleError::Overflow)
}

/// Sold tokens the contract must hold to cover a sale that reaches its hard cap.
pub fn required_allocation(hard_cap: i128, decimals: u32, price: i128) -> Result<i128, SaleError> {
    purchased_amount(hard_cap, decimals, price)
}

pub fn record_purchase(
    env: &Env,
    state: &mut SaleState,
    investor: &Address,
    amount: i128,
    tokens: i128,
    lockup_plan_id: u64,
    now: u64,
) -> Result<u64, SaleError> {
    let plan_id = state.next_plan_id;

    state.next_plan_id = plan_id.checked_add(1).ok_or(SaleError::Overflow)?;
    state.total_invested = state
        .total_invested
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    state.tokens_sold = state
        .tokens_sold
        .checked_add(tokens)
        .ok_or(SaleError::Overflow)?;

    let invested = get_user_invested(env, investor)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;

    set_investment(
        env,
        investor,
        plan_id,
        &Investment {
            amount,
            tokens,
            lockup_plan_id,
            purchased_at: now,
        },
    );
    set_user_invested(env, investor, invested);

    let mut plans = get_user_plans(env, investor);
    plans.push_back(plan_id);
    set_user_plans(env, investor, &plans);

    set_state(env, state);
    Ok(plan_id)
}

/// Zeroes a plan and returns the record as it was before clearing.
/// `total_invested` is left untouched; the refund is tracked in `total_refunded`.
pub fn clear_plan(
    env: &Env,
    state: &mut SaleState,
    investor: &Address,
    plan_id: u64,
) -> Result<Investment, SaleError> {
    let mut investment = match get_investment(env, investor, plan_id) {
        Some(inv) if inv.amount > 0 => inv,
        _ => return Err(SaleError::NothingToRefund),
    };
    let refunded = investment.clone();

    state.total_refunded = state
        .total_refunded
        .checked_add(refunded.amount)
        .ok_or(SaleError::Overflow)?;
    let invested = get_user_invested(env, investor)
        .checked_sub(refunded.amount)
        .ok_or(SaleError::Overflow)?;

    investment.amount = 0;
    set_investment(env, investor, plan_id, &investment);
    set_user_invested(env, investor, invested);
    set_state(env, state);

    Ok(refunded)
}
