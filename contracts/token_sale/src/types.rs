//! Data carried in contract storage and returned from entry points.

use soroban_sdk::{contracttype, Address};

/// Parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Asset handed out through vesting schedules and buckets.
    pub token: Address,
    /// Asset contributors pay with.
    pub payment_token: Address,
    /// Receives contributions and revoked remainders.
    pub wallet: Address,
    /// Sale-token units per unit of contributed value.
    pub rate: i128,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub min_contribution: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Lower bounds of the five contribution tiers, strictly ascending.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierThresholds {
    pub smallest: i128,
    pub smaller: i128,
    pub medium: i128,
    pub bigger: i128,
    pub biggest: i128,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Tier {
    Smallest,
    Smaller,
    Medium,
    Bigger,
    Biggest,
}

/// Timing applied to a schedule created for a given tier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierPolicy {
    pub start_delay: u64,
    pub cliff: u64,
    pub duration: u64,
}

/// A recorded contribution. Never mutated after `buy_tokens` stores it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    pub id: u64,
    pub purchaser: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub amount: i128,
    pub timestamp: u64,
}

/// Purchases of one beneficiary not yet converted into a schedule.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PendingAllocation {
    pub value: i128,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub beneficiary: Address,
    pub allocated: i128,
    pub start: u64,
    pub cliff: u64,
    pub duration: u64,
    pub revocable: bool,
    pub released: i128,
    pub revoked: bool,
    /// Ledger time of revocation; meaningful only when `revoked`.
    pub revoked_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketConfig {
    pub id: u32,
    pub capacity: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    pub id: u32,
    pub capacity: i128,
    pub distributed: i128,
}

impl Bucket {
    pub fn remaining(&self) -> i128 {
        self.capacity - self.distributed
    }
}
