//! Linear vesting with a cliff, release and revocation.
//!
//! Schedules are addressed by beneficiary and held in the sale contract's own
//! custody. Tokens backing a schedule are earmarked in the `locked` counter
//! until released or clawed back.

use soroban_sdk::{log, token, Address, Env};

use crate::access::require_owner;
use crate::error::SaleError;
use crate::types::VestingSchedule;
use crate::{events, storage};

/// Amount vested at `now` for a schedule starting at `start`.
///
/// Zero before `start + cliff`, everything from `start + duration` on, and
/// `allocated * elapsed / duration` (truncated) in between.
pub fn compute_vested(
    allocated: i128,
    start: u64,
    cliff: u64,
    duration: u64,
    now: u64,
) -> Result<i128, SaleError> {
    if now < start.saturating_add(cliff) {
        return Ok(0);
    }
    if now >= start.saturating_add(duration) {
        return Ok(allocated);
    }
    if now <= start {
        return Ok(0);
    }
    let elapsed = (now - start) as i128;
    let duration = duration as i128;
    // allocated * elapsed / duration, split so the product stays below allocated.
    let whole = (allocated / duration)
        .checked_mul(elapsed)
        .ok_or(SaleError::Overflow)?;
    let part = (allocated % duration)
        .checked_mul(elapsed)
        .ok_or(SaleError::Overflow)?
        / duration;
    whole.checked_add(part).ok_or(SaleError::Overflow)
}

impl VestingSchedule {
    /// Vested amount at `now`, pinned to the revocation time once revoked.
    pub fn vested_at(&self, now: u64) -> Result<i128, SaleError> {
        let at = if self.revoked { self.revoked_at } else { now };
        compute_vested(self.allocated, self.start, self.cliff, self.duration, at)
    }

    /// What the beneficiary will have received once fully released.
    pub fn entitlement(&self) -> Result<i128, SaleError> {
        if self.revoked {
            self.vested_at(self.revoked_at)
        } else {
            Ok(self.allocated)
        }
    }

    pub fn is_settled(&self) -> Result<bool, SaleError> {
        Ok(self.released >= self.entitlement()?)
    }
}

pub fn load(env: &Env, beneficiary: &Address) -> Result<VestingSchedule, SaleError> {
    storage::schedule(env, beneficiary).ok_or(SaleError::ScheduleNotFound)
}

pub fn vested_amount(env: &Env, beneficiary: &Address) -> Result<i128, SaleError> {
    load(env, beneficiary)?.vested_at(env.ledger().timestamp())
}

pub fn releasable_amount(env: &Env, beneficiary: &Address) -> Result<i128, SaleError> {
    let schedule = load(env, beneficiary)?;
    let vested = schedule.vested_at(env.ledger().timestamp())?;
    Ok(vested - schedule.released)
}

/// Sends the vested-but-unreleased portion to the beneficiary.
/// Returns the amount transferred; zero when nothing new has vested since the last release.
pub fn release(env: &Env, beneficiary: &Address) -> Result<i128, SaleError> {
    let config = storage::config(env)?;
    let mut schedule = load(env, beneficiary)?;
    let vested = schedule.vested_at(env.ledger().timestamp())?;
    if vested == 0 {
        return Err(SaleError::NotYetVested);
    }
    let delta = vested - schedule.released;
    if delta <= 0 {
        return Ok(0);
    }

    schedule.released = vested;
    storage::set_schedule(env, &schedule);
    storage::set_locked(env, storage::locked(env) - delta);
    log!(env, "vested tokens released", beneficiary.clone(), delta);
    events::released(env, beneficiary, delta);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        beneficiary,
        &delta,
    );
    Ok(delta)
}

/// Freezes the schedule at its current vested amount and sends the rest to the wallet.
/// The vested remainder stays claimable through `release`.
pub fn revoke(env: &Env, caller: &Address, beneficiary: &Address) -> Result<i128, SaleError> {
    require_owner(env, caller)?;
    let config = storage::config(env)?;
    let mut schedule = load(env, beneficiary)?;
    if !schedule.revocable {
        return Err(SaleError::NotRevocable);
    }
    if schedule.revoked {
        return Err(SaleError::AlreadyRevoked);
    }

    let now = env.ledger().timestamp();
    let vested = schedule.vested_at(now)?;
    let refund = schedule.allocated - vested;

    schedule.revoked = true;
    schedule.revoked_at = now;
    storage::set_schedule(env, &schedule);
    storage::set_locked(env, storage::locked(env) - refund);
    log!(env, "schedule revoked", beneficiary.clone(), refund);
    events::revoked(env, beneficiary, refund, vested);

    if refund > 0 {
        token::Client::new(env, &config.token).transfer(
            &env.current_contract_address(),
            &config.wallet,
            &refund,
        );
    }
    Ok(refund)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOCATED: i128 = 1_000;
    const START: u64 = 1_000_000;
    const DURATION: u64 = 3_000;

    #[test]
    fn zero_before_cliff() {
        assert_eq!(compute_vested(ALLOCATED, START, 500, DURATION, START + 499), Ok(0));
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, START - 1), Ok(0));
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, START), Ok(0));
    }

    #[test]
    fn linear_from_start_once_cliff_passes() {
        // The cliff gates release but the vested amount counts from `start`.
        assert_eq!(compute_vested(ALLOCATED, START, 1_500, DURATION, START + 1_500), Ok(500));
    }

    #[test]
    fn thirds_truncate() {
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, START + DURATION / 3), Ok(333));
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, START + 2 * DURATION / 3), Ok(666));
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, START + DURATION), Ok(ALLOCATED));
    }

    #[test]
    fn full_after_duration() {
        assert_eq!(compute_vested(ALLOCATED, START, 0, DURATION, u64::MAX), Ok(ALLOCATED));
    }

    #[test]
    fn zero_duration_vests_at_start() {
        assert_eq!(compute_vested(ALLOCATED, START, 0, 0, START), Ok(ALLOCATED));
        assert_eq!(compute_vested(ALLOCATED, START, 0, 0, START - 1), Ok(0));
    }

    #[test]
    fn non_decreasing_over_time() {
        let mut last = 0;
        for t in (START..START + DURATION + 100).step_by(37) {
            let v = compute_vested(ALLOCATED, START, 200, DURATION, t).unwrap();
            assert!(v >= last);
            assert!(v <= ALLOCATED);
            last = v;
        }
    }

    #[test]
    fn large_allocations_vest_midway() {
        let year = crate::PERIOD_1Y;
        let big = 10i128.pow(31);
        assert_eq!(compute_vested(big, START, 0, 2 * year, START + year), Ok(big / 2));
        assert_eq!(compute_vested(i128::MAX, 0, 0, 10, 5), Ok(i128::MAX / 2));
    }

    #[test]
    fn split_matches_plain_formula() {
        for (allocated, elapsed) in [(1_000i128, 1u64), (7, 2_999), (2_999, 1_500), (1, 1)] {
            let plain = allocated * elapsed as i128 / DURATION as i128;
            assert_eq!(
                compute_vested(allocated, START, 0, DURATION, START + elapsed),
                Ok(plain)
            );
        }
    }
}
