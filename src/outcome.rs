use crate::dto::bet::Bet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that may separate an outcome label from trailing decoration in a
/// legacy bet name, e.g. `"Dragon (R12)"` or `"Dragon - 1.98"`.
const PREFIX_SEPARATORS: &[char] = &['(', '[', '-', ':', '|', '@', ',', '#'];

/// One canonical outcome of a market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Outcome {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
        }
    }

    pub fn with_id(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: Some(id.into()),
        }
    }
}

impl From<&str> for Outcome {
    fn from(label: &str) -> Self {
        Outcome::new(label)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} [{}]", self.label, id),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Lowercases and collapses whitespace runs so labels compare by content only.
pub fn normalize(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// How a bet was tied to an outcome. Later variants are stronger evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Prefix,
    Exact,
    Id,
}

/// Decides which outcome of a group a bet was placed on.
pub trait OutcomeMatcher {
    fn match_kind(&self, bet: &Bet, outcome: &Outcome) -> Option<MatchKind>;

    /// Index of the outcome the bet belongs to, if any. The strongest match wins;
    /// among equal kinds the longest label wins, then the earliest outcome.
    fn resolve(&self, bet: &Bet, outcomes: &[Outcome]) -> Option<usize> {
        let mut best: Option<(usize, MatchKind, usize)> = None;
        for (index, outcome) in outcomes.iter().enumerate() {
            let Some(kind) = self.match_kind(bet, outcome) else {
                continue;
            };
            let len = normalize(&outcome.label).len();
            let better = match best {
                None => true,
                Some((_, best_kind, best_len)) => (kind, len) > (best_kind, best_len),
            };
            if better {
                best = Some((index, kind, len));
            }
        }
        best.map(|(index, ..)| index)
    }
}

/// Default matcher: stable ids when both sides have one, otherwise normalized labels.
#[derive(Debug, Clone, Copy)]
pub struct LabelMatcher {
    pub allow_prefix: bool,
}

impl Default for LabelMatcher {
    fn default() -> Self {
        Self { allow_prefix: true }
    }
}

impl LabelMatcher {
    pub fn exact_only() -> Self {
        Self {
            allow_prefix: false,
        }
    }
}

impl OutcomeMatcher for LabelMatcher {
    fn match_kind(&self, bet: &Bet, outcome: &Outcome) -> Option<MatchKind> {
        if let (Some(bet_id), Some(outcome_id)) =
            (bet.outcome_id.as_deref(), outcome.id.as_deref())
        {
            return (bet_id.trim() == outcome_id.trim()).then_some(MatchKind::Id);
        }

        let label = normalize(&outcome.label);
        if label.is_empty() {
            return None;
        }
        let name = normalize(&bet.outcome_name);

        if name == label {
            Some(MatchKind::Exact)
        } else if self.allow_prefix && is_delimited_prefix(&name, &label) {
            Some(MatchKind::Prefix)
        } else {
            None
        }
    }
}

// Both arguments are already normalized.
fn is_delimited_prefix(name: &str, label: &str) -> bool {
    match name.strip_prefix(label) {
        Some(rest) => rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| PREFIX_SEPARATORS.contains(&c)),
        None => false,
    }
}
