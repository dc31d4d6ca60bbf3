//! Owner registry and contributor whitelist.

use soroban_sdk::{log, Address, Env, Vec};

use crate::error::SaleError;
use crate::{events, storage};

/// Authenticates `caller` and checks it is a registered owner.
/// Every administrative entry point calls this before touching state.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if !storage::is_initialized(env) {
        return Err(SaleError::NotInitialized);
    }
    if !storage::is_owner(env, caller) {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

pub fn add_owner(env: &Env, caller: &Address, owner: &Address) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    if storage::is_owner(env, owner) {
        return Ok(());
    }
    storage::insert_owner(env, owner);
    log!(env, "owner added", owner.clone());
    events::owner_added(env, owner);
    Ok(())
}

pub fn delete_owner(env: &Env, caller: &Address, owner: &Address) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    if !storage::is_owner(env, owner) {
        return Ok(());
    }
    if storage::owner_count(env) <= 1 {
        return Err(SaleError::LastOwner);
    }
    storage::remove_owner(env, owner);
    log!(env, "owner deleted", owner.clone());
    events::owner_deleted(env, owner);
    Ok(())
}

pub fn add_to_whitelist(env: &Env, caller: &Address, addr: &Address) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    list(env, addr);
    Ok(())
}

pub fn add_many_to_whitelist(
    env: &Env,
    caller: &Address,
    addrs: &Vec<Address>,
) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    for addr in addrs.iter() {
        list(env, &addr);
    }
    Ok(())
}

pub fn remove_from_whitelist(
    env: &Env,
    caller: &Address,
    addr: &Address,
) -> Result<(), SaleError> {
    require_owner(env, caller)?;
    if storage::is_whitelisted(env, addr) {
        storage::set_whitelisted(env, addr, false);
        events::unwhitelisted(env, addr);
    }
    Ok(())
}

fn list(env: &Env, addr: &Address) {
    if !storage::is_whitelisted(env, addr) {
        storage::set_whitelisted(env, addr, true);
        events::whitelisted(env, addr);
    }
}
