use super::common::MarketStatus;
use crate::lock::OutcomeState;
use crate::outcome::{normalize, Outcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Live quote for one outcome, exactly as the odds feed sends it.
///
/// Status vocabularies differ between game families, so `status` and `suspended`
/// stay raw here and are interpreted once by [`OutcomeStatus::state`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "nation", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, alias = "gstatus", skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, alias = "suspend", skip_serializing_if = "Option::is_none")]
    pub suspended: Option<Value>,
    #[serde(default, with = "super::lenient::option", skip_serializing_if = "Option::is_none")]
    pub back: Option<f64>,
    #[serde(default, with = "super::lenient::option", skip_serializing_if = "Option::is_none")]
    pub lay: Option<f64>,
    #[serde(default, with = "super::lenient::option", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, with = "super::lenient::option", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl OutcomeStatus {
    pub fn new(label: impl Into<String>, status: Value) -> Self {
        Self {
            label: Some(label.into()),
            status: Some(status),
            ..Default::default()
        }
    }

    /// Parses the raw record. Returns `None` when the status is missing or not part
    /// of any known vocabulary. A suspend flag that reads suspended, or that cannot
    /// be read at all, forces `Suspended` regardless of the textual status.
    pub fn state(&self) -> Option<OutcomeState> {
        let status = self.status.as_ref().and_then(MarketStatus::from_feed)?;
        let flagged = self
            .suspended
            .as_ref()
            .map(|flag| super::lenient::flag_from_value(flag).unwrap_or(true))
            .unwrap_or(false);

        Some(OutcomeState {
            status: if flagged { MarketStatus::Suspended } else { status },
            back_price: self.back,
            lay_price: self.lay,
        })
    }
}

/// Every quote published for one round.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OddsSnapshot {
    pub match_id: String,
    #[serde(default)]
    pub outcomes: Vec<OutcomeStatus>,
}

impl OddsSnapshot {
    pub fn new(match_id: impl Into<String>, outcomes: Vec<OutcomeStatus>) -> Self {
        Self {
            match_id: match_id.into(),
            outcomes,
        }
    }

    /// Finds the quote for an outcome, by id when both sides carry one, else by label.
    pub fn find(&self, outcome: &Outcome) -> Option<&OutcomeStatus> {
        if let Some(id) = outcome.id.as_deref() {
            if let Some(quote) = self
                .outcomes
                .iter()
                .find(|q| q.id.as_deref().map(str::trim) == Some(id.trim()))
            {
                return Some(quote);
            }
        }

        let label = normalize(&outcome.label);
        self.outcomes
            .iter()
            .find(|q| q.label.as_deref().map(normalize).as_deref() == Some(label.as_str()))
    }
}
