/// Testing utilities for the token sale contract
/// Deploys the sale together with its collaborators and funds it

pub mod sale_fixtures;

pub use sale_fixtures::*;

/// Common test constants
pub mod constants {
    pub const SALE_START: u64 = 1_700_000_000;
    pub const SALE_DURATION: u64 = 3_600; // one hour
    pub const SOFT_CAP: i128 = 10_000 * 1_000_000; // 10k stablecoin, 6 decimals
    pub const HARD_CAP: i128 = 1_000_000 * 1_000_000; // 1M stablecoin
    pub const SALE_PRICE: i128 = 220_000; // 0.22 stablecoin per token
    pub const TOKEN_UNIT: i128 = 10_000_000; // Stellar assets use 7 decimals

    pub const CLIFF: u64 = 600;
    pub const VEST_PERIOD: u64 = 600;
    pub const VEST_LENGTH: u64 = 3_600;
}
