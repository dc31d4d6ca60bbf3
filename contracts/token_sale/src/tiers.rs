//! Maps a beneficiary's cumulative contribution to a vesting tier.

use crate::error::SaleError;
use crate::types::{Tier, TierPolicy, TierThresholds};

/// Nine months in seconds.
pub const PERIOD_9M: u64 = 23_667_695;
/// One tropical year in seconds.
pub const PERIOD_1Y: u64 = 31_556_926;

/// Highest tier whose threshold does not exceed `value`. Lower bounds are inclusive.
pub fn classify(thresholds: &TierThresholds, value: i128) -> Result<Tier, SaleError> {
    let tier = if value >= thresholds.biggest {
        Tier::Biggest
    } else if value >= thresholds.bigger {
        Tier::Bigger
    } else if value >= thresholds.medium {
        Tier::Medium
    } else if value >= thresholds.smaller {
        Tier::Smaller
    } else if value >= thresholds.smallest {
        Tier::Smallest
    } else {
        return Err(SaleError::NoTier);
    };
    Ok(tier)
}

pub fn is_ascending(thresholds: &TierThresholds) -> bool {
    thresholds.smallest > 0
        && thresholds.smallest < thresholds.smaller
        && thresholds.smaller < thresholds.medium
        && thresholds.medium < thresholds.bigger
        && thresholds.bigger < thresholds.biggest
}

impl Tier {
    pub fn policy(&self) -> TierPolicy {
        match self {
            Tier::Smallest | Tier::Smaller | Tier::Medium => TierPolicy {
                start_delay: 0,
                cliff: PERIOD_9M,
                duration: PERIOD_1Y,
            },
            Tier::Bigger | Tier::Biggest => TierPolicy {
                start_delay: 0,
                cliff: PERIOD_1Y,
                duration: 2 * PERIOD_1Y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> TierThresholds {
        TierThresholds {
            smallest: 1_000,
            smaller: 100_000,
            medium: 1_000_000,
            bigger: 1_000_000_000,
            biggest: 1_000_000_000_000,
        }
    }

    #[test]
    fn below_smallest_has_no_tier() {
        assert_eq!(classify(&thresholds(), 999), Err(SaleError::NoTier));
        assert_eq!(classify(&thresholds(), 0), Err(SaleError::NoTier));
    }

    #[test]
    fn lower_bound_is_inclusive() {
        let t = thresholds();
        assert_eq!(classify(&t, t.smallest), Ok(Tier::Smallest));
        assert_eq!(classify(&t, t.smaller), Ok(Tier::Smaller));
        assert_eq!(classify(&t, t.medium), Ok(Tier::Medium));
        assert_eq!(classify(&t, t.bigger), Ok(Tier::Bigger));
        assert_eq!(classify(&t, t.biggest), Ok(Tier::Biggest));
    }

    #[test]
    fn just_below_a_threshold_stays_in_lower_tier() {
        let t = thresholds();
        assert_eq!(classify(&t, t.smaller - 1), Ok(Tier::Smallest));
        assert_eq!(classify(&t, t.medium - 1), Ok(Tier::Smaller));
        assert_eq!(classify(&t, t.biggest - 1), Ok(Tier::Bigger));
        assert_eq!(classify(&t, i128::MAX), Ok(Tier::Biggest));
    }

    #[test]
    fn ascending_check() {
        assert!(is_ascending(&thresholds()));

        let mut flat = thresholds();
        flat.medium = flat.smaller;
        assert!(!is_ascending(&flat));

        let mut zero = thresholds();
        zero.smallest = 0;
        assert!(!is_ascending(&zero));
    }

    #[test]
    fn large_tiers_have_the_year_cliff() {
        assert_eq!(Tier::Medium.policy().cliff, PERIOD_9M);
        assert_eq!(Tier::Bigger.policy().cliff, PERIOD_1Y);
        assert_eq!(Tier::Biggest.policy().duration, 2 * PERIOD_1Y);
        for tier in [Tier::Smallest, Tier::Smaller, Tier::Medium, Tier::Bigger, Tier::Biggest] {
            let p = tier.policy();
            assert!(p.cliff <= p.duration);
        }
    }
}
