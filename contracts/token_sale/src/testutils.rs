//! In-memory lockup-plan provider for tests. Records plans and ownership; no
//! release schedule is computed.

use crate::vesting::LockupPlans;
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

const PLAN_COUNT: Symbol = symbol_short!("p_count");

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MockPlan {
    pub funder: Address,
    pub owner: Address,
    pub token: Address,
    pub amount: i128,
    pub start: u64,
    pub cliff: u64,
    pub period: u64,
    pub length: u64,
}

#[contracttype]
enum MockKey {
    Plan(u64),
}

#[contract]
pub struct MockLockupPlans;

#[contractimpl]
impl LockupPlans for MockLockupPlans {
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
    ) -> u64 {
        funder.require_auth();
        if amount <= 0 {
            panic!("Invalid plan amount");
        }

        let id = env.storage().instance().get(&PLAN_COUNT).unwrap_or(0u64) + 1;
        let plan = MockPlan {
            funder,
            owner: recipient,
            token,
            amount,
            start,
            cliff,
            period,
            length,
        };
        env.storage().persistent().set(&MockKey::Plan(id), &plan);
        env.storage().instance().set(&PLAN_COUNT, &id);
        id
    }

    fn transfer_plan(env: Env, funder: Address, plan_id: u64, new_owner: Address) {
        funder.require_auth();
        let mut plan: MockPlan = env
            .storage()
            .persistent()
            .get(&MockKey::Plan(plan_id))
            .unwrap_or_else(|| panic!("Plan not found"));
        if plan.funder != funder {
            panic!("Not plan funder");
        }
        plan.owner = new_owner;
        env.storage().persistent().set(&MockKey::Plan(plan_id), &plan);
    }
}

#[contractimpl]
impl MockLockupPlans {
    pub fn plan(env: Env, plan_id: u64) -> Option<MockPlan> {
        env.storage().persistent().get(&MockKey::Plan(plan_id))
    }

    pub fn plan_count(env: Env) -> u64 {
        env.storage().instance().get(&PLAN_COUNT).unwrap_or(0)
    }
}
