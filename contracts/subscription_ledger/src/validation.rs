use crate::error::Error;
use crate::phase::Phase;
use crate::pricing::calculate_payout_per_token;
use crate::storage::{Pricing, Schedule, LOCK_DURATION};

pub struct Validator;

impl Validator {
    /// Build the schedule, deriving unlock time from the fixed lock duration
    pub fn validate_schedule(start_time: u64, subscription_end: u64) -> Result<Schedule, Error> {
        let unlock_time = start_time
            .checked_add(LOCK_DURATION)
            .ok_or(Error::InvalidTimestamp)?;

        if subscription_end < start_time || subscription_end > unlock_time {
            return Err(Error::InvalidTimestamp);
        }

        Ok(Schedule {
            start_time,
            subscription_end,
            unlock_time,
        })
    }

    pub fn validate_pricing(cost_per_token: i128, sale_per_unit: i128) -> Result<Pricing, Error> {
        if cost_per_token <= 0 || sale_per_unit <= 0 {
            return Err(Error::InvalidPrice);
        }

        if cost_per_token > sale_per_unit {
            return Err(Error::InvalidPrice);
        }

        let payout_per_token = calculate_payout_per_token(cost_per_token, sale_per_unit)
            .ok_or(Error::InvalidPrice)?;

        Ok(Pricing {
            cost_per_token,
            sale_per_unit,
            payout_per_token,
        })
    }

    pub fn require_positive(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    pub fn require_subscription(phase: Phase) -> Result<(), Error> {
        match phase {
            Phase::PreSale => Err(Error::TooEarly),
            Phase::Subscription => Ok(()),
            Phase::Locked | Phase::Unlocked => Err(Error::SubscriptionClosed),
        }
    }

    pub fn require_unlocked(phase: Phase) -> Result<(), Error> {
        match phase {
            Phase::Unlocked => Ok(()),
            Phase::PreSale | Phase::Subscription | Phase::Locked => Err(Error::TransfersLocked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_derives_unlock() {
        let schedule = Validator::validate_schedule(1_000, 4_600).unwrap();
        assert_eq!(schedule.unlock_time, 1_000 + LOCK_DURATION);
    }

    #[test]
    fn test_schedule_rejects_inverted_window() {
        assert_eq!(
            Validator::validate_schedule(1_000, 999),
            Err(Error::InvalidTimestamp)
        );
    }

    #[test]
    fn test_schedule_rejects_window_past_unlock() {
        assert_eq!(
            Validator::validate_schedule(1_000, 1_001 + LOCK_DURATION),
            Err(Error::InvalidTimestamp)
        );
        assert_eq!(
            Validator::validate_schedule(u64::MAX, u64::MAX),
            Err(Error::InvalidTimestamp)
        );
    }

    #[test]
    fn test_pricing_rejects_bad_prices() {
        assert_eq!(Validator::validate_pricing(0, 10), Err(Error::InvalidPrice));
        assert_eq!(Validator::validate_pricing(10, -1), Err(Error::InvalidPrice));
        assert_eq!(Validator::validate_pricing(11, 10), Err(Error::InvalidPrice));
    }

    #[test]
    fn test_phase_requirements() {
        assert_eq!(
            Validator::require_subscription(Phase::PreSale),
            Err(Error::TooEarly)
        );
        assert_eq!(
            Validator::require_subscription(Phase::Locked),
            Err(Error::SubscriptionClosed)
        );
        assert_eq!(
            Validator::require_unlocked(Phase::Subscription),
            Err(Error::TransfersLocked)
        );
        assert_eq!(Validator::require_unlocked(Phase::Unlocked), Ok(()));
    }
}
