use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{Purchase, Tier, VestingSchedule};

pub const PURCHASE: Symbol = symbol_short!("purchase");
pub const VESTING_CREATED: Symbol = symbol_short!("vest_new");
pub const RELEASED: Symbol = symbol_short!("released");
pub const REVOKED: Symbol = symbol_short!("revoked");
pub const FUNDS_SENT: Symbol = symbol_short!("funds");
pub const FINALIZED: Symbol = symbol_short!("finalized");
pub const OWNER_ADDED: Symbol = symbol_short!("own_add");
pub const OWNER_DELETED: Symbol = symbol_short!("own_del");
pub const WHITELISTED: Symbol = symbol_short!("wl_add");
pub const UNWHITELISTED: Symbol = symbol_short!("wl_rem");
pub const TOKEN_ADMIN: Symbol = symbol_short!("tok_admin");

pub fn purchase(env: &Env, purchase: &Purchase) {
    env.events().publish(
        (PURCHASE, purchase.purchaser.clone(), purchase.beneficiary.clone()),
        (purchase.value, purchase.amount, purchase.id),
    );
}

pub fn vesting_created(env: &Env, schedule: &VestingSchedule, tier: Option<Tier>) {
    env.events().publish(
        (VESTING_CREATED, schedule.beneficiary.clone()),
        (
            tier,
            schedule.allocated,
            schedule.start,
            schedule.cliff,
            schedule.duration,
        ),
    );
}

pub fn released(env: &Env, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((RELEASED, beneficiary.clone()), amount);
}

pub fn revoked(env: &Env, beneficiary: &Address, refund: i128, vested: i128) {
    env.events()
        .publish((REVOKED, beneficiary.clone()), (refund, vested));
}

pub fn funds_sent(env: &Env, bucket_id: u32, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((FUNDS_SENT, bucket_id, beneficiary.clone()), amount);
}

pub fn finalized(env: &Env, raised: i128) {
    env.events().publish((FINALIZED,), raised);
}

pub fn owner_added(env: &Env, owner: &Address) {
    env.events().publish((OWNER_ADDED, owner.clone()), ());
}

pub fn owner_deleted(env: &Env, owner: &Address) {
    env.events().publish((OWNER_DELETED, owner.clone()), ());
}

pub fn whitelisted(env: &Env, addr: &Address) {
    env.events().publish((WHITELISTED, addr.clone()), ());
}

pub fn unwhitelisted(env: &Env, addr: &Address) {
    env.events().publish((UNWHITELISTED, addr.clone()), ());
}

pub fn token_admin_transferred(env: &Env, new_admin: &Address) {
    env.events().publish((TOKEN_ADMIN, new_admin.clone()), ());
}
