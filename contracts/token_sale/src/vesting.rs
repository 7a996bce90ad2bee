use crate::types::VestingInfo;
use soroban_sdk::{contractclient, token, Address, Env};

/// Interface of the external lockup-plan provider. The provider escrows the
/// sold tokens and releases them to the plan owner on its own schedule.
#[contractclient(name = "LockupPlansClient")]
pub trait LockupPlans {
    /// Create a plan for `recipient` over `amount` tokens already transferred
    /// to the provider by `funder`. Returns the provider's plan id.
    fn create_plan(
        env: Env,
        funder: Address,
        recipient: Address,
        token: Address,
        amount: i128,
        start: u64,
        cliff: u64,
        period: u64,
        length: u64,
    ) -> u64;

    /// Hand a plan (and its future unlocks) to `new_owner`. Only the funder
    /// that created the plan may do this.
    fn transfer_plan(env: Env, funder: Address, plan_id: u64, new_owner: Address);
}

/// Moves `amount` sold tokens into the provider and opens a plan for
/// `beneficiary` starting now.
pub fn grant_vesting_plan(
    env: &Env,
    vesting: &VestingInfo,
    sold_token: &Address,
    beneficiary: &Address,
    amount: i128,
    now: u64,
) -> u64 {
    let sale = env.current_contract_address();

    token::Client::new(env, sold_token).transfer(&sale, &vesting.lockup_plans, &amount);

    LockupPlansClient::new(env, &vesting.lockup_plans).create_plan(
        &sale,
        beneficiary,
        sold_token,
        &amount,
        &now,
        &vesting.cliff,
        &vesting.period,
        &vesting.length,
    )
}

pub fn reclaim_vesting_plan(env: &Env, vesting: &VestingInfo, lockup_plan_id: u64, new_owner: &Address) {
    LockupPlansClient::new(env, &vesting.lockup_plans).transfer_plan(
        &env.current_contract_address(),
        &lockup_plan_id,
        new_owner,
    );
}
