//! Time and access guards. Everything here takes the current time as an
//! argument so the sale window can be evaluated without touching the ledger.

use crate::errors::SaleError;
use crate::storage::get_admin;
use crate::types::{SaleConfig, SaleState};
use soroban_sdk::{Address, Env};

pub fn has_started(config: &SaleConfig, now: u64) -> bool {
    now >= config.start_time
}

pub fn has_ended(config: &SaleConfig, now: u64) -> bool {
    now >= config.end_time
}

/// Open means unpaused and inside `[start_time, end_time)`.
pub fn is_open(config: &SaleConfig, state: &SaleState, now: u64) -> bool {
    !state.paused && has_started(config, now) && !has_ended(config, now)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if *caller != get_admin(env)? {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}
