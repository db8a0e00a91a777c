use crate::storage::Schedule;
use soroban_sdk::contracttype;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Before the subscription window, nothing is allowed
    PreSale = 0,
    /// Buying is allowed
    Subscription = 1,
    /// Units exist but cannot move or be redeemed
    Locked = 2,
    /// Transfers and redemptions allowed, terminal
    Unlocked = 3,
}

/// Derive the lifecycle phase at `now`
///
/// Timeline:
/// - [0, start_time)                    → PreSale
/// - [start_time, subscription_end)     → Subscription
/// - [subscription_end, unlock_time)    → Locked
/// - [unlock_time, ∞)                   → Unlocked
///
/// Must be evaluated against the current ledger timestamp on every call.
pub fn phase_at(schedule: &Schedule, now: u64) -> Phase {
    if now < schedule.start_time {
        Phase::PreSale
    } else if now < schedule.subscription_end {
        Phase::Subscription
    } else if now < schedule.unlock_time {
        Phase::Locked
    } else {
        Phase::Unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LOCK_DURATION;

    fn schedule() -> Schedule {
        Schedule {
            start_time: 1_000,
            subscription_end: 4_600,
            unlock_time: 1_000 + LOCK_DURATION,
        }
    }

    #[test]
    fn test_presale_before_start() {
        assert_eq!(phase_at(&schedule(), 0), Phase::PreSale);
        assert_eq!(phase_at(&schedule(), 999), Phase::PreSale);
    }

    #[test]
    fn test_subscription_window_is_half_open() {
        let s = schedule();
        assert_eq!(phase_at(&s, s.start_time), Phase::Subscription);
        assert_eq!(phase_at(&s, s.subscription_end - 1), Phase::Subscription);
        assert_eq!(phase_at(&s, s.subscription_end), Phase::Locked);
    }

    #[test]
    fn test_unlock_boundary() {
        let s = schedule();
        assert_eq!(phase_at(&s, s.unlock_time - 1), Phase::Locked);
        assert_eq!(phase_at(&s, s.unlock_time), Phase::Unlocked);
        assert_eq!(phase_at(&s, u64::MAX), Phase::Unlocked);
    }

    #[test]
    fn test_empty_subscription_window() {
        let s = Schedule {
            start_time: 1_000,
            subscription_end: 1_000,
            unlock_time: 1_000 + LOCK_DURATION,
        };
        assert_eq!(phase_at(&s, 999), Phase::PreSale);
        assert_eq!(phase_at(&s, 1_000), Phase::Locked);
    }
}
