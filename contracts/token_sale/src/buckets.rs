//! Owner-directed payouts from fixed-capacity pools.

use soroban_sdk::{log, token, Address, Env};

use crate::access::require_owner;
use crate::allocation::free_balance;
use crate::error::SaleError;
use crate::types::Bucket;
use crate::{events, storage};

pub fn get(env: &Env, id: u32) -> Result<Bucket, SaleError> {
    storage::bucket(env, id).ok_or(SaleError::UnknownBucket)
}

pub fn send_funds(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
    bucket_id: u32,
    amount: i128,
) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    let config = storage::config(env)?;
    if amount <= 0 {
        return Err(SaleError::InvalidAmount);
    }
    let mut bucket = get(env, bucket_id)?;
    if amount > bucket.remaining() {
        return Err(SaleError::InsufficientBucketBalance);
    }
    if amount > free_balance(env, &config) {
        return Err(SaleError::InsufficientBalance);
    }

    bucket.distributed += amount;
    storage::set_bucket(env, &bucket);
    log!(env, "bucket payout", bucket_id, beneficiary.clone(), amount);
    events::funds_sent(env, bucket_id, beneficiary, amount);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        beneficiary,
        &amount,
    );
    Ok(())
}

/// True when every configured bucket is within capacity.
pub fn all_within_capacity(env: &Env) -> bool {
    storage::bucket_ids(env).iter().all(|id| match storage::bucket(env, id) {
        Some(b) => b.distributed >= 0 && b.distributed <= b.capacity,
        None => false,
    })
}
