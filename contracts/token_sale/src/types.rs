use soroban_sdk::{contracttype, Address, Env};

/// Sale parameters fixed at initialization. Only `end_time` has a mutator.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub sold_token: Address,    // Token distributed through vesting plans
    pub payment_token: Address, // Token investors pay with
    pub start_time: u64,
    pub end_time: u64,
    pub is_private_sale: bool,
    pub hard_cap: i128,   // In payment token units
    pub soft_cap: i128,   // In payment token units
    pub sale_price: i128, // Payment units per whole sold token
}

/// Lockup schedule applied to every purchase. Written once, as a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingInfo {
    pub lockup_plans: Address,
    pub cliff: u64,  // Seconds before the first unlock
    pub period: u64, // Seconds between unlocks
    pub length: u64, // Total vesting length in seconds
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub paused: bool,
    pub total_invested: i128,
    pub total_refunded: i128,
    pub tokens_sold: i128,
    pub withdrawn: bool,
    pub refund_address: Address,
    pub next_plan_id: u64,
}

/// One purchase event. `amount` is zeroed on refund; the record is kept.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Investment {
    pub amount: i128,
    pub tokens: i128,
    pub lockup_plan_id: u64,
    pub purchased_at: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    State,
    VestingInfo,
    Whitelisted(Address),
    Investment(Address, u64),
    UserInvested(Address),
    UserPlans(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
