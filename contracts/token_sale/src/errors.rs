use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,

    // Configuration
    ZeroAddress = 10,
    WrongVestingData = 11,
    VestingInfoAlreadySet = 12,
    VestingInfoNotSet = 13,
    InvalidSaleConfig = 14,

    // Timing
    SaleNotStarted = 20,
    SaleHasEnded = 21,
    SaleHasNotEnded = 22,
    EndDateMustBeInFuture = 23,

    // State conflicts
    SaleIsPaused = 30,
    SaleIsActiveAlready = 31,
    AlreadyWithdrawn = 32,
    IsPublicSale = 33,

    // Economics
    ZeroInputToken = 40,
    HardcapReached = 41,
    SoftcapNotReached = 42,
    SoftcapReached = 43,
    NothingToRefund = 44,
    Overflow = 45,
}
