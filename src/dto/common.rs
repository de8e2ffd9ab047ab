use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "BACK", alias = "Back")]
    Back,
    #[serde(alias = "LAY", alias = "Lay")]
    Lay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    #[serde(alias = "WON", alias = "Won")]
    Won,
    #[serde(alias = "LOST", alias = "Lost")]
    Lost,
    #[serde(alias = "PROFIT", alias = "Profit")]
    Profit,
}

impl SettlementStatus {
    /// Applies the status sign to a realized amount: losses are never positive,
    /// wins and profits are never negative.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            SettlementStatus::Lost => -amount.abs(),
            SettlementStatus::Won | SettlementStatus::Profit => amount.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketStatus {
    Open,
    Suspended,
    Closed,
    Inactive,
}

impl MarketStatus {
    /// Interprets a raw feed status. Feeds send words in any case, or `0`/`1`
    /// either as numbers or as strings.
    pub fn from_feed(value: &Value) -> Option<MarketStatus> {
        match value {
            Value::String(s) => Self::from_word(s),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 1.0 => Some(MarketStatus::Open),
                Some(v) if v == 0.0 => Some(MarketStatus::Suspended),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn from_word(word: &str) -> Option<MarketStatus> {
        match word.trim().to_ascii_uppercase().as_str() {
            "OPEN" | "1" => Some(MarketStatus::Open),
            "SUSPENDED" | "0" => Some(MarketStatus::Suspended),
            "CLOSED" => Some(MarketStatus::Closed),
            "INACTIVE" => Some(MarketStatus::Inactive),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MarketStatus::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_status_from_words() {
        assert_eq!(MarketStatus::from_feed(&json!("OPEN")), Some(MarketStatus::Open));
        assert_eq!(MarketStatus::from_feed(&json!("open")), Some(MarketStatus::Open));
        assert_eq!(
            MarketStatus::from_feed(&json!(" Suspended ")),
            Some(MarketStatus::Suspended)
        );
        assert_eq!(MarketStatus::from_feed(&json!("closed")), Some(MarketStatus::Closed));
        assert_eq!(
            MarketStatus::from_feed(&json!("INACTIVE")),
            Some(MarketStatus::Inactive)
        );
    }

    #[test]
    fn test_market_status_from_numerics() {
        assert_eq!(MarketStatus::from_feed(&json!(0)), Some(MarketStatus::Suspended));
        assert_eq!(MarketStatus::from_feed(&json!("0")), Some(MarketStatus::Suspended));
        assert_eq!(MarketStatus::from_feed(&json!(1)), Some(MarketStatus::Open));
        assert_eq!(MarketStatus::from_feed(&json!("1")), Some(MarketStatus::Open));
        assert_eq!(MarketStatus::from_feed(&json!(2)), None);
    }

    #[test]
    fn test_market_status_unknown() {
        assert_eq!(MarketStatus::from_feed(&json!("BALL_RUNNING")), None);
        assert_eq!(MarketStatus::from_feed(&json!(null)), None);
        assert_eq!(MarketStatus::from_feed(&json!(true)), None);
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_value(Side::Back).unwrap(), json!("back"));
        let lay: Side = serde_json::from_value(json!("LAY")).unwrap();
        assert_eq!(lay, Side::Lay);
    }

    #[test]
    fn test_settlement_sign() {
        assert_eq!(SettlementStatus::Lost.signed(50.0), -50.0);
        assert_eq!(SettlementStatus::Lost.signed(-50.0), -50.0);
        assert_eq!(SettlementStatus::Won.signed(-20.0), 20.0);
        assert_eq!(SettlementStatus::Profit.signed(20.0), 20.0);
    }
}
