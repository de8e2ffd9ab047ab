use crate::dto::common::MarketStatus;
use serde::{Deserialize, Serialize};

/// Seconds before the round closes during which no new bets are offered.
pub const DEFAULT_CUTOFF_SECONDS: f64 = 3.0;

/// Parsed live state of one outcome. Built from a raw feed record by
/// [`crate::dto::OutcomeStatus::state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeState {
    pub status: MarketStatus,
    pub back_price: Option<f64>,
    pub lay_price: Option<f64>,
}

impl OutcomeState {
    pub fn open() -> Self {
        Self {
            status: MarketStatus::Open,
            back_price: None,
            lay_price: None,
        }
    }

    pub fn with_prices(mut self, back: Option<f64>, lay: Option<f64>) -> Self {
        self.back_price = back;
        self.lay_price = lay;
        self
    }

    /// At least one side publishes a usable price.
    pub fn has_prices(&self) -> bool {
        let usable = |p: Option<f64>| p.is_some_and(|p| p.is_finite() && p > 0.0);
        usable(self.back_price) || usable(self.lay_price)
    }
}

/// Decides whether an outcome is closed to new bets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockPolicy {
    pub cutoff_seconds: f64,
    /// Lock open outcomes that publish neither a back nor a lay price.
    pub require_prices: bool,
}

impl Default for LockPolicy {
    fn default() -> Self {
        Self {
            cutoff_seconds: DEFAULT_CUTOFF_SECONDS,
            require_prices: false,
        }
    }
}

impl LockPolicy {
    pub fn new(cutoff_seconds: f64, require_prices: bool) -> Self {
        Self {
            cutoff_seconds,
            require_prices,
        }
    }

    /// `true` when betting on the outcome must be refused. Missing state, any
    /// non-open status, an unusable countdown, or a countdown inside the cutoff
    /// window all lock.
    pub fn is_locked(&self, state: Option<&OutcomeState>, remaining_seconds: f64) -> bool {
        let Some(state) = state else {
            return true;
        };
        if !state.status.is_open() {
            return true;
        }
        if !remaining_seconds.is_finite() || remaining_seconds <= self.cutoff_seconds {
            return true;
        }
        self.require_prices && !state.has_prices()
    }
}

/// Evaluates with the default policy.
pub fn is_locked(state: Option<&OutcomeState>, remaining_seconds: f64) -> bool {
    LockPolicy::default().is_locked(state, remaining_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: MarketStatus) -> OutcomeState {
        OutcomeState {
            status,
            back_price: None,
            lay_price: None,
        }
    }

    #[test]
    fn test_absent_state_locks() {
        assert!(is_locked(None, 10.0));
    }

    #[test]
    fn test_non_open_statuses_lock() {
        for status in [
            MarketStatus::Suspended,
            MarketStatus::Closed,
            MarketStatus::Inactive,
        ] {
            assert!(is_locked(Some(&with_status(status)), 30.0), "{status:?}");
        }
    }

    #[test]
    fn test_countdown_cutoff() {
        let open = OutcomeState::open();
        assert!(is_locked(Some(&open), 3.0));
        assert!(is_locked(Some(&open), 0.0));
        assert!(is_locked(Some(&open), -5.0));
        assert!(!is_locked(Some(&open), 3.5));
        assert!(!is_locked(Some(&open), 4.0));
    }

    #[test]
    fn test_unusable_countdown_locks() {
        let open = OutcomeState::open();
        assert!(is_locked(Some(&open), f64::NAN));
        assert!(is_locked(Some(&open), f64::NEG_INFINITY));
        assert!(is_locked(Some(&open), f64::INFINITY));
    }

    #[test]
    fn test_require_prices() {
        let policy = LockPolicy::new(DEFAULT_CUTOFF_SECONDS, true);
        let open = OutcomeState::open();

        assert!(policy.is_locked(Some(&open), 10.0));
        assert!(policy.is_locked(Some(&open.with_prices(Some(0.0), Some(0.0))), 10.0));
        assert!(!policy.is_locked(Some(&open.with_prices(Some(1.98), None)), 10.0));
        assert!(!policy.is_locked(Some(&open.with_prices(None, Some(2.02))), 10.0));

        // Without the requirement, missing prices do not lock.
        assert!(!LockPolicy::default().is_locked(Some(&open), 10.0));
    }

    #[test]
    fn test_custom_cutoff() {
        let policy = LockPolicy::new(10.0, false);
        assert!(policy.is_locked(Some(&OutcomeState::open()), 8.0));
        assert!(!policy.is_locked(Some(&OutcomeState::open()), 11.0));
    }
}
