//! Sale setup, contributions and the raise lifecycle.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::access::require_owner;
use crate::error::SaleError;
use crate::types::{Bucket, BucketConfig, PendingAllocation, Purchase, SaleConfig, TierThresholds};
use crate::{events, storage, tiers};

pub fn initialize(
    env: &Env,
    owner: &Address,
    config: &SaleConfig,
    thresholds: &TierThresholds,
    buckets: &Vec<BucketConfig>,
) -> Result<(), SaleError> {
    if storage::is_initialized(env) {
        return Err(SaleError::AlreadyInitialized);
    }
    owner.require_auth();
    validate_config(config)?;
    // Every accepted purchase must map to a tier.
    if !tiers::is_ascending(thresholds) || config.min_contribution < thresholds.smallest {
        return Err(SaleError::InvalidConfig);
    }

    let mut ids: Vec<u32> = Vec::new(env);
    for b in buckets.iter() {
        if b.capacity <= 0 || ids.contains(b.id) {
            return Err(SaleError::InvalidConfig);
        }
        ids.push_back(b.id);
    }

    storage::set_config(env, config);
    storage::set_thresholds(env, thresholds);
    storage::set_raised(env, 0);
    storage::set_locked(env, 0);
    for b in buckets.iter() {
        storage::set_bucket(
            env,
            &Bucket {
                id: b.id,
                capacity: b.capacity,
                distributed: 0,
            },
        );
    }
    storage::set_bucket_ids(env, &ids);
    storage::insert_owner(env, owner);

    log!(env, "sale initialized", owner.clone(), config.hard_cap);
    events::owner_added(env, owner);
    Ok(())
}

fn validate_config(config: &SaleConfig) -> Result<(), SaleError> {
    let valid = config.rate > 0
        && config.hard_cap > 0
        && config.soft_cap >= 0
        && config.soft_cap <= config.hard_cap
        && config.min_contribution >= 0
        && config.start_time < config.end_time;
    if valid {
        Ok(())
    } else {
        Err(SaleError::InvalidConfig)
    }
}

/// Records a contribution of `value` from `purchaser` credited to `beneficiary`.
///
/// Checks run in a fixed order: sale window, finalization, whitelist, minimum, cap.
/// Bookkeeping is committed before the payment is forwarded to the wallet.
pub fn buy_tokens(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    value: i128,
) -> Result<Purchase, SaleError> {
    purchaser.require_auth();
    let config = storage::config(env)?;
    let now = env.ledger().timestamp();

    if now < config.start_time || now > config.end_time {
        return Err(SaleError::OutOfWindow);
    }
    if storage::is_finalized(env) {
        return Err(SaleError::AlreadyFinalized);
    }
    if !storage::is_whitelisted(env, purchaser) {
        return Err(SaleError::NotWhitelisted);
    }
    if value <= 0 || value < config.min_contribution {
        return Err(SaleError::BelowMinimum);
    }
    let raised = storage::raised(env)
        .checked_add(value)
        .ok_or(SaleError::Overflow)?;
    if raised > config.hard_cap {
        return Err(SaleError::CapExceeded);
    }
    let amount = value.checked_mul(config.rate).ok_or(SaleError::Overflow)?;

    let purchase = Purchase {
        id: storage::purchase_count(env),
        purchaser: purchaser.clone(),
        beneficiary: beneficiary.clone(),
        value,
        amount,
        timestamp: now,
    };

    let pending = match storage::pending(env, beneficiary) {
        Some(p) => PendingAllocation {
            value: p.value.checked_add(value).ok_or(SaleError::Overflow)?,
            amount: p.amount.checked_add(amount).ok_or(SaleError::Overflow)?,
        },
        None => {
            storage::push_pending_list(env, beneficiary);
            PendingAllocation { value, amount }
        }
    };

    storage::set_raised(env, raised);
    storage::set_pending(env, beneficiary, &pending);
    storage::push_purchase(env, &purchase);
    log!(env, "purchase recorded", beneficiary.clone(), value, amount);
    events::purchase(env, &purchase);

    token::Client::new(env, &config.payment_token).transfer(purchaser, &config.wallet, &value);
    Ok(purchase)
}

/// Closes the sale for good. There is no way back to the open state.
pub fn finalize(env: &Env, caller: &Address) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    if storage::is_finalized(env) {
        return Err(SaleError::AlreadyFinalized);
    }
    storage::set_finalized(env);
    let raised = storage::raised(env);
    log!(env, "sale finalized", raised);
    events::finalized(env, raised);
    Ok(())
}

pub fn goal_reached(env: &Env) -> Result<bool, SaleError> {
    Ok(storage::raised(env) >= storage::config(env)?.soft_cap)
}

pub fn has_closed(env: &Env) -> Result<bool, SaleError> {
    let config = storage::config(env)?;
    Ok(storage::is_finalized(env) || env.ledger().timestamp() > config.end_time)
}
