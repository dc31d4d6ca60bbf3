//! Typed accessors over contract storage.
//!
//! Singletons live in instance storage; anything keyed by address or id lives in
//! persistent storage under a `(Symbol, key)` tuple. Every persistent read or
//! write that finds an entry, and every config access, extends its TTL.

use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

use crate::error::SaleError;
use crate::types::{Bucket, PendingAllocation, Purchase, SaleConfig, TierThresholds, VestingSchedule};

// Instance keys
const CONFIG: Symbol = symbol_short!("CONFIG");
const THRESHOLDS: Symbol = symbol_short!("TIERS");
const RAISED: Symbol = symbol_short!("RAISED");
const FINALIZED: Symbol = symbol_short!("FINAL");
const OWNER_COUNT: Symbol = symbol_short!("OWN_CNT");
const PURCHASE_COUNT: Symbol = symbol_short!("BUY_CNT");
const PENDING_LIST: Symbol = symbol_short!("PEND_LIST");
const BUCKET_IDS: Symbol = symbol_short!("BKT_IDS");
const LOCKED: Symbol = symbol_short!("LOCKED");

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

// Persistent key prefixes
const OWNER: Symbol = symbol_short!("OWNER");
const WHITELIST: Symbol = symbol_short!("WL");
const PENDING: Symbol = symbol_short!("PENDING");
const SCHEDULE: Symbol = symbol_short!("VEST");
const PURCHASE: Symbol = symbol_short!("BUY");
const BUCKET: Symbol = symbol_short!("BUCKET");

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

fn read<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
    value
}

fn write<K, V>(env: &Env, key: &K, value: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn config(env: &Env) -> Result<SaleConfig, SaleError> {
    let config = env
        .storage()
        .instance()
        .get(&CONFIG)
        .ok_or(SaleError::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&CONFIG, config);
    bump_instance(env);
}

pub fn thresholds(env: &Env) -> Result<TierThresholds, SaleError> {
    env.storage()
        .instance()
        .get(&THRESHOLDS)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_thresholds(env: &Env, thresholds: &TierThresholds) {
    env.storage().instance().set(&THRESHOLDS, thresholds);
}

pub fn raised(env: &Env) -> i128 {
    env.storage().instance().get(&RAISED).unwrap_or(0)
}

pub fn set_raised(env: &Env, raised: i128) {
    env.storage().instance().set(&RAISED, &raised);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage().instance().get(&FINALIZED).unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&FINALIZED, &true);
}

pub fn locked(env: &Env) -> i128 {
    env.storage().instance().get(&LOCKED).unwrap_or(0)
}

pub fn set_locked(env: &Env, locked: i128) {
    env.storage().instance().set(&LOCKED, &locked);
}

// ---------------------------------------------------------------------------
// Owners and whitelist
// ---------------------------------------------------------------------------

pub fn is_owner(env: &Env, addr: &Address) -> bool {
    read(env, &(OWNER, addr.clone())).unwrap_or(false)
}

pub fn owner_count(env: &Env) -> u32 {
    env.storage().instance().get(&OWNER_COUNT).unwrap_or(0)
}

pub fn insert_owner(env: &Env, addr: &Address) {
    write(env, &(OWNER, addr.clone()), &true);
    env.storage()
        .instance()
        .set(&OWNER_COUNT, &(owner_count(env) + 1));
}

pub fn remove_owner(env: &Env, addr: &Address) {
    env.storage().persistent().remove(&(OWNER, addr.clone()));
    env.storage()
        .instance()
        .set(&OWNER_COUNT, &owner_count(env).saturating_sub(1));
}

pub fn is_whitelisted(env: &Env, addr: &Address) -> bool {
    read(env, &(WHITELIST, addr.clone())).unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, addr: &Address, listed: bool) {
    let key = (WHITELIST, addr.clone());
    if listed {
        write(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ---------------------------------------------------------------------------
// Purchases and pending allocations
// ---------------------------------------------------------------------------

pub fn purchase_count(env: &Env) -> u64 {
    env.storage().instance().get(&PURCHASE_COUNT).unwrap_or(0)
}

/// Stores `purchase` under its id and bumps the counter past it.
pub fn push_purchase(env: &Env, purchase: &Purchase) {
    write(env, &(PURCHASE, purchase.id), purchase);
    env.storage()
        .instance()
        .set(&PURCHASE_COUNT, &(purchase.id + 1));
}

pub fn purchase(env: &Env, id: u64) -> Option<Purchase> {
    read(env, &(PURCHASE, id))
}

pub fn pending(env: &Env, beneficiary: &Address) -> Option<PendingAllocation> {
    read(env, &(PENDING, beneficiary.clone()))
}

pub fn set_pending(env: &Env, beneficiary: &Address, pending: &PendingAllocation) {
    write(env, &(PENDING, beneficiary.clone()), pending);
}

pub fn clear_pending(env: &Env, beneficiary: &Address) {
    env.storage()
        .persistent()
        .remove(&(PENDING, beneficiary.clone()));
    let mut list = pending_list(env);
    if let Some(idx) = list.first_index_of(beneficiary.clone()) {
        list.remove(idx);
        env.storage().instance().set(&PENDING_LIST, &list);
    }
}

/// Beneficiaries with unallocated purchases, in order of first purchase.
pub fn pending_list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&PENDING_LIST)
        .unwrap_or(Vec::new(env))
}

pub fn push_pending_list(env: &Env, beneficiary: &Address) {
    let mut list = pending_list(env);
    list.push_back(beneficiary.clone());
    env.storage().instance().set(&PENDING_LIST, &list);
}

// ---------------------------------------------------------------------------
// Vesting schedules
// ---------------------------------------------------------------------------

pub fn schedule(env: &Env, beneficiary: &Address) -> Option<VestingSchedule> {
    read(env, &(SCHEDULE, beneficiary.clone()))
}

pub fn set_schedule(env: &Env, schedule: &VestingSchedule) {
    write(env, &(SCHEDULE, schedule.beneficiary.clone()), schedule);
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

pub fn bucket_ids(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&BUCKET_IDS)
        .unwrap_or(Vec::new(env))
}

pub fn set_bucket_ids(env: &Env, ids: &Vec<u32>) {
    env.storage().instance().set(&BUCKET_IDS, ids);
}

pub fn bucket(env: &Env, id: u32) -> Option<Bucket> {
    read(env, &(BUCKET, id))
}

pub fn set_bucket(env: &Env, bucket: &Bucket) {
    write(env, &(BUCKET, bucket.id), bucket);
}
