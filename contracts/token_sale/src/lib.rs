#![no_std]
#![allow(clippy::too_many_arguments)]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod events;
mod ledger;
mod policy;
mod storage;
mod types;
mod vesting;
mod whitelist;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::SaleError;
pub use ledger::{purchased_amount, required_allocation};
pub use types::{Investment, SaleConfig, SaleState, VestingInfo};
pub use vesting::{LockupPlans, LockupPlansClient};
