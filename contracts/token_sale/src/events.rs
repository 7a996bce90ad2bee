use crate::types::{SaleConfig, VestingInfo};
use soroban_sdk::{symbol_short, Address, Env, String, Vec};

pub fn sale_initialized(env: &Env, admin: &Address, config: &SaleConfig) {
    env.events().publish(
        (symbol_short!("init"), admin.clone()),
        (
            config.sold_token.clone(),
            config.payment_token.clone(),
            config.hard_cap,
            config.soft_cap,
            config.sale_price,
        ),
    );
}

pub fn vesting_info_set(env: &Env, info: &VestingInfo) {
    env.events().publish(
        (symbol_short!("vest_set"),),
        (info.lockup_plans.clone(), info.cliff, info.period, info.length),
    );
}

pub fn refund_address_set(env: &Env, address: &Address) {
    env.events()
        .publish((symbol_short!("refaddr"),), address.clone());
}

pub fn whitelist_added(env: &Env, addresses: &Vec<Address>) {
    env.events()
        .publish((symbol_short!("wl_add"),), addresses.clone());
}

pub fn whitelist_removed(env: &Env, addresses: &Vec<Address>) {
    env.events()
        .publish((symbol_short!("wl_rem"),), addresses.clone());
}

pub fn end_time_extended(env: &Env, old_end: u64, new_end: u64) {
    env.events()
        .publish((symbol_short!("extend"),), (old_end, new_end));
}

pub fn sale_paused(env: &Env, reason: &String) {
    env.events()
        .publish((symbol_short!("paused"),), reason.clone());
}

pub fn sale_unpaused(env: &Env) {
    env.events().publish((symbol_short!("unpaused"),), ());
}

pub fn tokens_purchased(env: &Env, investor: &Address, plan_id: u64, amount: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("buy"), investor.clone(), plan_id),
        (amount, tokens),
    );
}

pub fn proceeds_withdrawn(env: &Env, to: &Address, payment: i128, unsold: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), to.clone()), (payment, unsold));
}

pub fn investment_refunded(env: &Env, investor: &Address, plan_id: u64, amount: i128, plan_owner: &Address) {
    env.events().publish(
        (symbol_short!("refund"), investor.clone(), plan_id),
        (amount, plan_owner.clone()),
    );
}
