use soroban_sdk::contracterror;

/// Every way a sale entry point can fail. A returned error rolls back the whole invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not a registered owner.
    Unauthorized = 3,
    /// Purchaser is not on the whitelist.
    NotWhitelisted = 4,
    /// Ledger time is outside `[start_time, end_time]`.
    OutOfWindow = 5,
    /// Contribution is below the configured floor.
    BelowMinimum = 6,
    /// Contribution would push `raised` past `hard_cap`.
    CapExceeded = 7,
    AlreadyFinalized = 8,
    NotRevocable = 9,
    AlreadyRevoked = 10,
    /// Bucket has less remaining capacity than requested.
    InsufficientBucketBalance = 11,
    /// Nothing has vested yet (before the cliff).
    NotYetVested = 12,
    /// Cumulative contribution is below the smallest tier threshold.
    NoTier = 13,
    /// Beneficiary already holds a schedule that is not fully settled.
    AlreadyAllocated = 14,
    NothingToAllocate = 15,
    ScheduleNotFound = 16,
    UnknownBucket = 17,
    /// Unearmarked sale-token balance cannot cover the transfer.
    InsufficientBalance = 18,
    /// Removing this owner would leave the registry empty.
    LastOwner = 19,
    InvalidConfig = 20,
    InvalidAmount = 21,
    InvalidSchedule = 22,
    Overflow = 23,
}
