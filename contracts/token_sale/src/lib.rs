//! # Token sale with tiered vesting
//!
//! A single Soroban contract that takes contributions in a payment token,
//! enforces the raise window, the hard cap and a whitelist, and turns each
//! contributor's purchases into a linear vesting schedule whose cliff and
//! duration depend on how much they put in. Owners can revoke schedules,
//! pay out of fixed-capacity buckets and finalize the sale.
//!
//! | Phase        | Entry points                                                    |
//! |--------------|-----------------------------------------------------------------|
//! | Setup        | `initialize`                                                    |
//! | Access       | `add_owner`, `delete_owner`, `add_address_to_whitelist`, ...     |
//! | Contribution | `buy_tokens`, `finalize`                                        |
//! | Allocation   | `allocate_tokens`, `allocate_tokens_for_contributor`, `create_vesting` |
//! | Vesting      | `release_vested_tokens`, `revoke`                               |
//! | Distribution | `send_funds`, `transfer_token_admin`                            |
//!
//! Entry points only authenticate, delegate and return; the rules live in the
//! modules below.

#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

mod access;
mod allocation;
mod buckets;
mod contribution;
mod error;
mod events;
mod storage;
mod tiers;
mod types;
mod vesting;


pub use error::SaleError;
pub use tiers::{PERIOD_1Y, PERIOD_9M};
pub use types::{
    Bucket, BucketConfig, PendingAllocation, Purchase, SaleConfig, Tier, TierPolicy,
    TierThresholds, VestingSchedule,
};

#[contract]
pub struct TokenSale;

#[contractimpl]
impl TokenSale {
    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Configure the sale and register `owner` as its first owner. Callable once.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: SaleConfig,
        thresholds: TierThresholds,
        buckets: Vec<BucketConfig>,
    ) -> Result<(), SaleError> {
        contribution::initialize(&env, &owner, &config, &thresholds, &buckets)
    }

    // -----------------------------------------------------------------------
    // Owners and whitelist
    // -----------------------------------------------------------------------

    pub fn add_owner(env: Env, caller: Address, owner: Address) -> Result<(), SaleError> {
        access::add_owner(&env, &caller, &owner)
    }

    /// Remove `owner`. The last remaining owner cannot be removed.
    pub fn delete_owner(env: Env, caller: Address, owner: Address) -> Result<(), SaleError> {
        access::delete_owner(&env, &caller, &owner)
    }

    pub fn is_owner(env: Env, addr: Address) -> bool {
        storage::is_owner(&env, &addr)
    }

    pub fn owner_count(env: Env) -> u32 {
        storage::owner_count(&env)
    }

    pub fn add_address_to_whitelist(
        env: Env,
        caller: Address,
        addr: Address,
    ) -> Result<(), SaleError> {
        access::add_to_whitelist(&env, &caller, &addr)
    }

    pub fn add_addresses_to_whitelist(
        env: Env,
        caller: Address,
        addrs: Vec<Address>,
    ) -> Result<(), SaleError> {
        access::add_many_to_whitelist(&env, &caller, &addrs)
    }

    /// Only gates future purchases; recorded purchases and schedules stay.
    pub fn remove_address_from_whitelist(
        env: Env,
        caller: Address,
        addr: Address,
    ) -> Result<(), SaleError> {
        access::remove_from_whitelist(&env, &caller, &addr)
    }

    pub fn is_whitelisted(env: Env, addr: Address) -> bool {
        storage::is_whitelisted(&env, &addr)
    }

    // -----------------------------------------------------------------------
    // Contributions
    // -----------------------------------------------------------------------

    /// Pay `value` of the payment token to the wallet and credit
    /// `value * rate` sale tokens to `beneficiary`'s pending allocation.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<Purchase, SaleError> {
        contribution::buy_tokens(&env, &purchaser, &beneficiary, value)
    }

    pub fn finalize(env: Env, caller: Address) -> Result<(), SaleError> {
        contribution::finalize(&env, &caller)
    }

    // -----------------------------------------------------------------------
    // Allocation
    // -----------------------------------------------------------------------

    /// Create schedules for every contributor with pending purchases.
    /// Contributors still holding an unsettled schedule stay pending.
    /// Returns how many were created.
    pub fn allocate_tokens(env: Env, caller: Address) -> Result<u32, SaleError> {
        allocation::allocate_all(&env, &caller)
    }

    pub fn allocate_tokens_for_contributor(
        env: Env,
        caller: Address,
        contributor: Address,
    ) -> Result<VestingSchedule, SaleError> {
        allocation::allocate_for_contributor(&env, &caller, &contributor)
    }

    /// Grant a schedule directly, bypassing the purchase flow.
    pub fn create_vesting(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
        start: u64,
        cliff: u64,
        duration: u64,
        revocable: bool,
    ) -> Result<VestingSchedule, SaleError> {
        allocation::create_vesting(
            &env,
            &caller,
            &beneficiary,
            amount,
            start,
            cliff,
            duration,
            revocable,
        )
    }

    // -----------------------------------------------------------------------
    // Vesting
    // -----------------------------------------------------------------------

    /// Anyone may trigger a release; tokens always go to `beneficiary`.
    pub fn release_vested_tokens(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        vesting::release(&env, &beneficiary)
    }

    /// Returns the unvested amount sent back to the wallet.
    pub fn revoke(env: Env, caller: Address, beneficiary: Address) -> Result<i128, SaleError> {
        vesting::revoke(&env, &caller, &beneficiary)
    }

    // -----------------------------------------------------------------------
    // Distribution
    // -----------------------------------------------------------------------

    pub fn send_funds(
        env: Env,
        caller: Address,
        beneficiary: Address,
        bucket_id: u32,
        amount: i128,
    ) -> Result<(), SaleError> {
        buckets::send_funds(&env, &caller, &beneficiary, bucket_id, amount)
    }

    /// Hand admin rights over the sale token to `new_admin`.
    /// The contract must currently be the token's admin.
    pub fn transfer_token_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), SaleError> {
        access::require_owner(&env, &caller)?;
        let config = storage::config(&env)?;
        log!(&env, "token admin transferred", new_admin.clone());
        events::token_admin_transferred(&env, &new_admin);
        token::StellarAssetClient::new(&env, &config.token).set_admin(&new_admin);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn config(env: Env) -> Result<SaleConfig, SaleError> {
        storage::config(&env)
    }

    pub fn thresholds(env: Env) -> Result<TierThresholds, SaleError> {
        storage::thresholds(&env)
    }

    pub fn raised(env: Env) -> i128 {
        storage::raised(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        storage::is_finalized(&env)
    }

    /// Whether `raised` has reached the soft cap.
    pub fn goal_reached(env: Env) -> Result<bool, SaleError> {
        contribution::goal_reached(&env)
    }

    pub fn has_closed(env: Env) -> Result<bool, SaleError> {
        contribution::has_closed(&env)
    }

    pub fn purchase(env: Env, id: u64) -> Option<Purchase> {
        storage::purchase(&env, id)
    }

    pub fn purchase_count(env: Env) -> u64 {
        storage::purchase_count(&env)
    }

    pub fn pending_allocation(env: Env, beneficiary: Address) -> PendingAllocation {
        storage::pending(&env, &beneficiary).unwrap_or_default()
    }

    pub fn pending_contributors(env: Env) -> Vec<Address> {
        storage::pending_list(&env)
    }

    pub fn classify(env: Env, value: i128) -> Result<Tier, SaleError> {
        tiers::classify(&storage::thresholds(&env)?, value)
    }

    pub fn vesting(env: Env, beneficiary: Address) -> Option<VestingSchedule> {
        storage::schedule(&env, &beneficiary)
    }

    pub fn vested_amount(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        vesting::vested_amount(&env, &beneficiary)
    }

    pub fn releasable_amount(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        vesting::releasable_amount(&env, &beneficiary)
    }

    pub fn bucket(env: Env, id: u32) -> Result<Bucket, SaleError> {
        buckets::get(&env, id)
    }

    /// Sale tokens earmarked for schedules and not yet released.
    pub fn locked(env: Env) -> i128 {
        storage::locked(&env)
    }

    /// `raised <= hard_cap`, earmarked tokens are covered by the balance,
    /// and no bucket is over capacity.
    pub fn check_invariant(env: Env) -> Result<bool, SaleError> {
        let config = storage::config(&env)?;
        let cap_ok = storage::raised(&env) <= config.hard_cap;
        let custody_ok = allocation::free_balance(&env, &config) >= 0;
        Ok(cap_ok && custody_ok && buckets::all_within_capacity(&env))
    }
}
