use crate::dto::bet::Bet;
use crate::dto::odds::OddsSnapshot;
use crate::games::GameDefinition;
use crate::lock::LockPolicy;
use crate::outcome::{LabelMatcher, OutcomeMatcher};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything known about one round at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub match_id: String,
    pub remaining_seconds: f64,
    #[serde(default)]
    pub odds: OddsSnapshot,
    #[serde(default)]
    pub bets: Vec<Bet>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of(value: f64) -> Tone {
        if value > 0.0 {
            Tone::Positive
        } else if value < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeView {
    pub group: String,
    pub label: String,
    pub locked: bool,
    pub profit_loss: f64,
    /// `profit_loss` rounded to whole units.
    pub display: i64,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub game: String,
    pub match_id: String,
    pub remaining_seconds: f64,
    pub outcomes: Vec<OutcomeView>,
}

impl BoardView {
    pub fn outcome(&self, group: &str, label: &str) -> Option<&OutcomeView> {
        self.outcomes
            .iter()
            .find(|o| o.group == group && o.label == label)
    }

    pub fn pretty_print(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n  {} | Round {} | {:.0}s left\n",
            self.game, self.match_id, self.remaining_seconds
        ));
        let mut current_group: Option<&str> = None;
        for view in &self.outcomes {
            if current_group != Some(view.group.as_str()) {
                output.push_str(&format!("  [{}]\n", view.group));
                current_group = Some(view.group.as_str());
            }
            output.push_str(&format!(
                "    {:<24} {:>10} {}\n",
                view.label,
                view.display,
                if view.locked { "LOCKED" } else { "open" }
            ));
        }
        output
    }
}

/// Rounds for display: whole units, halves away from zero, unusable values as 0.
pub fn display_units(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Renders a game screen: one lock decision and one profit/loss figure per outcome.
#[derive(Debug, Clone, Default)]
pub struct OddsBoard<M = LabelMatcher> {
    policy: LockPolicy,
    matcher: M,
}

impl OddsBoard<LabelMatcher> {
    pub fn new(policy: LockPolicy) -> Self {
        Self {
            policy,
            matcher: LabelMatcher::default(),
        }
    }
}

impl<M: OutcomeMatcher> OddsBoard<M> {
    pub fn with_matcher(policy: LockPolicy, matcher: M) -> Self {
        Self { policy, matcher }
    }

    pub fn render(&self, game: &GameDefinition, round: &RoundSnapshot) -> BoardView {
        let bets: Vec<Bet> = round
            .bets
            .iter()
            .filter(|b| b.match_id == round.match_id)
            .cloned()
            .collect();
        debug!(
            "Rendering {} round {}: {} of {} bet(s) belong to this round",
            game.name,
            round.match_id,
            bets.len(),
            round.bets.len()
        );

        let odds_current = round.odds.match_id == round.match_id;
        if !odds_current {
            warn!(
                "Odds snapshot is for round {} but board shows round {}, locking all outcomes",
                round.odds.match_id, round.match_id
            );
        }

        let mut outcomes = Vec::new();
        for group in &game.groups {
            let book = group.exposure(&bets, &self.matcher);
            for outcome in &group.outcomes {
                let profit_loss = book.get(&outcome.label).unwrap_or(0.0);
                let state = if odds_current {
                    round.odds.find(outcome).and_then(|q| q.state())
                } else {
                    None
                };
                outcomes.push(OutcomeView {
                    group: group.name.clone(),
                    label: outcome.label.clone(),
                    locked: self.policy.is_locked(state.as_ref(), round.remaining_seconds),
                    profit_loss,
                    display: display_units(profit_loss),
                    tone: Tone::of(profit_loss),
                });
            }
        }

        BoardView {
            game: game.name.clone(),
            match_id: round.match_id.clone(),
            remaining_seconds: round.remaining_seconds,
            outcomes,
        }
    }
}
