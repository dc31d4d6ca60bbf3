//! Turns pending purchases into vesting schedules.

use soroban_sdk::{log, token, Address, Env};

use crate::access::require_owner;
use crate::error::SaleError;
use crate::types::{SaleConfig, Tier, VestingSchedule};
use crate::{events, storage, tiers};

/// Sale-token balance of the contract not yet earmarked for any schedule.
pub fn free_balance(env: &Env, config: &SaleConfig) -> i128 {
    let balance = token::Client::new(env, &config.token).balance(&env.current_contract_address());
    balance - storage::locked(env)
}

/// Fails when `beneficiary` still has tokens owed under an existing schedule.
fn ensure_no_active_schedule(env: &Env, beneficiary: &Address) -> Result<(), SaleError> {
    match storage::schedule(env, beneficiary) {
        Some(existing) if !existing.is_settled()? => Err(SaleError::AlreadyAllocated),
        _ => Ok(()),
    }
}

/// Stores `schedule`, earmarks its tokens and announces it.
fn open_schedule(
    env: &Env,
    config: &SaleConfig,
    schedule: &VestingSchedule,
    tier: Option<Tier>,
) -> Result<(), SaleError> {
    ensure_no_active_schedule(env, &schedule.beneficiary)?;
    if schedule.allocated > free_balance(env, config) {
        return Err(SaleError::InsufficientBalance);
    }
    let locked = storage::locked(env)
        .checked_add(schedule.allocated)
        .ok_or(SaleError::Overflow)?;
    storage::set_schedule(env, schedule);
    storage::set_locked(env, locked);
    log!(env, "vesting schedule created", schedule.beneficiary.clone(), schedule.allocated);
    events::vesting_created(env, schedule, tier);
    Ok(())
}

fn allocate_one(
    env: &Env,
    config: &SaleConfig,
    contributor: &Address,
) -> Result<VestingSchedule, SaleError> {
    let pending = storage::pending(env, contributor).ok_or(SaleError::NothingToAllocate)?;
    let tier = tiers::classify(&storage::thresholds(env)?, pending.value)?;
    let policy = tier.policy();

    let schedule = VestingSchedule {
        beneficiary: contributor.clone(),
        allocated: pending.amount,
        start: env.ledger().timestamp().saturating_add(policy.start_delay),
        cliff: policy.cliff,
        duration: policy.duration,
        revocable: true,
        released: 0,
        revoked: false,
        revoked_at: 0,
    };
    open_schedule(env, config, &schedule, Some(tier))?;
    storage::clear_pending(env, contributor);
    Ok(schedule)
}

pub fn allocate_for_contributor(
    env: &Env,
    caller: &Address,
    contributor: &Address,
) -> Result<VestingSchedule, SaleError> {
    require_owner(env, caller)?;
    let config = storage::config(env)?;
    allocate_one(env, &config, contributor)
}

/// Allocates every pending contributor in first-purchase order and returns
/// how many schedules were created.
///
/// Contributors who still hold an unsettled schedule, or whose pending value
/// maps to no tier, are skipped and stay pending. Any other failure aborts the
/// whole batch.
pub fn allocate_all(env: &Env, caller: &Address) -> Result<u32, SaleError> {
    require_owner(env, caller)?;
    let config = storage::config(env)?;
    let contributors = storage::pending_list(env);
    let mut created = 0u32;
    for contributor in contributors.iter() {
        match allocate_one(env, &config, &contributor) {
            Ok(_) => created += 1,
            Err(SaleError::AlreadyAllocated) | Err(SaleError::NoTier) => {
                log!(env, "allocation deferred", contributor.clone());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(created)
}

/// Direct grant outside the purchase flow, funded from the contract's free balance.
pub fn create_vesting(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
    amount: i128,
    start: u64,
    cliff: u64,
    duration: u64,
    revocable: bool,
) -> Result<VestingSchedule, SaleError> {
    require_owner(env, caller)?;
    let config = storage::config(env)?;
    if amount <= 0 {
        return Err(SaleError::InvalidAmount);
    }
    if duration == 0 || cliff > duration {
        return Err(SaleError::InvalidSchedule);
    }

    let schedule = VestingSchedule {
        beneficiary: beneficiary.clone(),
        allocated: amount,
        start,
        cliff,
        duration,
        revocable,
        released: 0,
        revoked: false,
        revoked_at: 0,
    };
    open_schedule(env, &config, &schedule, None)?;
    Ok(schedule)
}
