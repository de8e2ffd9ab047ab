use super::common::{SettlementStatus, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One placed wager as recorded by the platform.
///
/// Records are read-only input: nothing in this crate mutates a bet once it has
/// been deserialized. Numeric fields are read leniently, see [`super::lenient`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub match_id: String,
    pub outcome_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_id: Option<String>,
    pub category: Side,
    #[serde(with = "super::lenient", default = "super::lenient::default_number")]
    pub stake: f64,
    #[serde(with = "super::lenient", default = "super::lenient::default_number")]
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Settlement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[serde(with = "super::lenient::flag", default)]
    pub settled: bool,
    pub status: SettlementStatus,
    #[serde(with = "super::lenient", default = "super::lenient::default_number")]
    pub profit_loss: f64,
}

impl Bet {
    pub fn new(
        match_id: impl Into<String>,
        outcome_name: impl Into<String>,
        category: Side,
        stake: f64,
        rate: f64,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            outcome_name: outcome_name.into(),
            outcome_id: None,
            category,
            stake,
            rate,
            settlement: None,
        }
    }

    pub fn back(
        match_id: impl Into<String>,
        outcome_name: impl Into<String>,
        stake: f64,
        rate: f64,
    ) -> Self {
        Self::new(match_id, outcome_name, Side::Back, stake, rate)
    }

    pub fn lay(
        match_id: impl Into<String>,
        outcome_name: impl Into<String>,
        stake: f64,
        rate: f64,
    ) -> Self {
        Self::new(match_id, outcome_name, Side::Lay, stake, rate)
    }

    pub fn with_outcome_id(mut self, outcome_id: impl Into<String>) -> Self {
        self.outcome_id = Some(outcome_id.into());
        self
    }

    pub fn with_settlement(mut self, settlement: Settlement) -> Self {
        self.settlement = Some(settlement);
        self
    }

    /// The realized settlement, if upstream has finalized this bet.
    pub fn settled(&self) -> Option<&Settlement> {
        self.settlement.as_ref().filter(|s| s.settled)
    }

    /// Stake and rate are both usable numbers greater than zero.
    pub fn is_priced(&self) -> bool {
        self.stake.is_finite() && self.rate.is_finite() && self.stake > 0.0 && self.rate > 0.0
    }
}

impl Settlement {
    pub fn new(status: SettlementStatus, profit_loss: f64) -> Self {
        Self {
            settled: true,
            status,
            profit_loss,
        }
    }

    /// Realized amount with the sign implied by `status`. Unusable amounts count as zero.
    pub fn realized(&self) -> f64 {
        if self.profit_loss.is_finite() {
            self.status.signed(self.profit_loss)
        } else {
            0.0
        }
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bet({:?} {} @ {:.2} x{:.2})",
            self.category, self.outcome_name, self.rate, self.stake
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bet_deserialization() {
        let bet: Bet = serde_json::from_value(json!({
            "matchId": "r-1001",
            "outcomeName": "Dragon",
            "category": "back",
            "stake": 100,
            "rate": "1.98"
        }))
        .unwrap();

        assert_eq!(bet.match_id, "r-1001");
        assert_eq!(bet.outcome_name, "Dragon");
        assert_eq!(bet.category, Side::Back);
        assert_eq!(bet.stake, 100.0);
        assert_eq!(bet.rate, 1.98);
        assert!(bet.outcome_id.is_none());
        assert!(bet.settlement.is_none());
        assert!(bet.is_priced());
    }

    #[test]
    fn test_malformed_numbers_are_not_priced() {
        let bet: Bet = serde_json::from_value(json!({
            "matchId": "r-1001",
            "outcomeName": "Tiger",
            "category": "lay",
            "stake": "n/a"
        }))
        .unwrap();

        assert!(bet.stake.is_nan());
        assert!(bet.rate.is_nan());
        assert!(!bet.is_priced());
    }

    #[test]
    fn test_settlement_only_counts_when_settled() {
        let bet: Bet = serde_json::from_value(json!({
            "matchId": "r-1001",
            "outcomeName": "Tiger",
            "category": "back",
            "stake": 10,
            "rate": 2,
            "settlement": { "settled": 0, "status": "lost", "profitLoss": -10 }
        }))
        .unwrap();

        assert!(bet.settlement.is_some());
        assert!(bet.settled().is_none());

        let settled = bet.with_settlement(Settlement::new(SettlementStatus::Lost, 10.0));
        assert_eq!(settled.settled().map(|s| s.realized()), Some(-10.0));
    }

    #[test]
    fn test_bet_display() {
        let bet = Bet::back("r-1", "Dragon", 100.0, 2.0);
        assert_eq!(bet.to_string(), "Bet(Back Dragon @ 2.00 x100.00)");
    }
}
