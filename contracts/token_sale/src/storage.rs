use crate::errors::SaleError;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_admin(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Result<SaleState, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_vesting_info(env: &Env) -> Option<VestingInfo> {
    env.storage().instance().get(&DataKey::VestingInfo)
}

pub fn has_vesting_info(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::VestingInfo)
}

pub fn set_vesting_info(env: &Env, info: &VestingInfo) {
    env.storage().instance().set(&DataKey::VestingInfo, info);
}

pub fn is_whitelisted(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(user.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, user: &Address, listed: bool) {
    let key = DataKey::Whitelisted(user.clone());
    if listed {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn get_investment(env: &Env, user: &Address, plan_id: u64) -> Option<Investment> {
    env.storage()
        .persistent()
        .get(&DataKey::Investment(user.clone(), plan_id))
}

pub fn set_investment(env: &Env, user: &Address, plan_id: u64, investment: &Investment) {
    env.storage()
        .persistent()
        .set(&DataKey::Investment(user.clone(), plan_id), investment);
}

pub fn get_user_invested(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::UserInvested(user.clone()))
        .unwrap_or(0)
}

pub fn set_user_invested(env: &Env, user: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::UserInvested(user.clone()), &amount);
}

pub fn get_user_plans(env: &Env, user: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::UserPlans(user.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_user_plans(env: &Env, user: &Address, plans: &Vec<u64>) {
    env.storage()
        .persistent()
        .set(&DataKey::UserPlans(user.clone()), plans);
}
