use crate::dto::bet::Bet;
use crate::ledger::{compute_exposure, Book};
use crate::outcome::{normalize, Outcome, OutcomeMatcher};
use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::slice;

/// How the outcomes of a group relate to each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    /// Mutually exclusive: every bet cross-credits its siblings.
    #[default]
    Book,
    /// Independent: each outcome only shows its own bets.
    Singleton,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketGroup {
    pub name: String,
    #[serde(default)]
    pub mode: GroupMode,
    pub outcomes: Vec<Outcome>,
}

impl MarketGroup {
    pub fn new(name: impl Into<String>, mode: GroupMode, labels: &[&str]) -> Self {
        Self {
            name: name.into(),
            mode,
            outcomes: labels.iter().map(|l| Outcome::new(*l)).collect(),
        }
    }

    pub fn book(name: impl Into<String>, labels: &[&str]) -> Self {
        Self::new(name, GroupMode::Book, labels)
    }

    pub fn singleton(name: impl Into<String>, labels: &[&str]) -> Self {
        Self::new(name, GroupMode::Singleton, labels)
    }

    /// Profit/loss per outcome of this group.
    pub fn exposure<M>(&self, bets: &[Bet], matcher: &M) -> Book
    where
        M: OutcomeMatcher + ?Sized,
    {
        match self.mode {
            GroupMode::Book => compute_exposure(&self.outcomes, bets, matcher),
            GroupMode::Singleton => {
                // Each bet is tied to one outcome of the whole group before the
                // per-outcome books are built.
                let mut routed: Vec<Vec<Bet>> = vec![Vec::new(); self.outcomes.len()];
                for bet in bets {
                    if let Some(index) = matcher.resolve(bet, &self.outcomes) {
                        routed[index].push(bet.clone());
                    }
                }
                Book::concat(
                    self.outcomes
                        .iter()
                        .zip(&routed)
                        .map(|(o, own)| compute_exposure(slice::from_ref(o), own, matcher)),
                )
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "market group without a name");
        ensure!(
            !self.outcomes.is_empty(),
            "market group '{}' has no outcomes",
            self.name
        );

        let mut seen = HashSet::new();
        for outcome in &self.outcomes {
            let label = normalize(&outcome.label);
            ensure!(
                !label.is_empty(),
                "market group '{}' has an outcome without a label",
                self.name
            );
            if !seen.insert(label) {
                bail!(
                    "market group '{}' lists '{}' more than once",
                    self.name,
                    outcome.label
                );
            }
        }

        if self.mode == GroupMode::Book {
            ensure!(
                self.outcomes.len() >= 2,
                "market group '{}' needs at least two outcomes to be a book",
                self.name
            );
        }
        Ok(())
    }
}

/// One game screen: a set of independent market groups shown together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDefinition {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub groups: Vec<MarketGroup>,
}

impl GameDefinition {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        groups: Vec<MarketGroup>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            groups,
        }
    }

    pub fn group(&self, name: &str) -> Option<&MarketGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "game without a name");
        ensure!(!self.groups.is_empty(), "game '{}' has no market groups", self.name);

        let mut names = HashSet::new();
        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                bail!("game '{}' defines group '{}' twice", self.name, group.name);
            }
            group
                .validate()
                .map_err(|e| e.context(format!("invalid game '{}'", self.name)))?;
        }
        Ok(())
    }
}

pub fn builtin_games() -> Vec<GameDefinition> {
    vec![
        GameDefinition::new(
            "dragon-tiger",
            "20-20 Dragon Tiger",
            vec![
                MarketGroup::book("winner", &["Dragon", "Tiger"]),
                MarketGroup::singleton("tie", &["Tie", "Pair"]),
                MarketGroup::book("dragon-odd-even", &["Dragon Odd", "Dragon Even"]),
                MarketGroup::book("tiger-odd-even", &["Tiger Odd", "Tiger Even"]),
                MarketGroup::book("dragon-colour", &["Dragon Red", "Dragon Black"]),
                MarketGroup::book("tiger-colour", &["Tiger Red", "Tiger Black"]),
            ],
        ),
        GameDefinition::new(
            "teen-patti",
            "Teen Patti 20-20",
            vec![
                MarketGroup::book("winner", &["Player A", "Player B"]),
                MarketGroup::singleton("under-21", &["Player A Under 21", "Player B Under 21"]),
                MarketGroup::singleton("pair-plus", &["Player A Pair Plus", "Player B Pair Plus"]),
            ],
        ),
        GameDefinition::new(
            "lucky7",
            "Lucky 7",
            vec![
                MarketGroup::book("high-low", &["Low Card", "High Card"]),
                MarketGroup::book("odd-even", &["Odd", "Even"]),
                MarketGroup::book("colour", &["Red", "Black"]),
                MarketGroup::singleton(
                    "cards",
                    &[
                        "Card A", "Card 2", "Card 3", "Card 4", "Card 5", "Card 6", "Card 7",
                        "Card 8", "Card 9", "Card 10", "Card J", "Card Q", "Card K",
                    ],
                ),
            ],
        ),
        GameDefinition::new(
            "card32",
            "32 Cards",
            vec![
                MarketGroup::book("winner", &["Player 8", "Player 9", "Player 10", "Player 11"]),
                MarketGroup::singleton("totals", &["8 & 9 Total", "10 & 11 Total"]),
            ],
        ),
        GameDefinition::new(
            "race-20",
            "Race 20",
            vec![MarketGroup::book(
                "winner",
                &["K Spade", "K Heart", "K Club", "K Diamond"],
            )],
        ),
        GameDefinition::new(
            "baccarat",
            "Baccarat",
            vec![
                MarketGroup::book("winner", &["Player", "Banker"]),
                MarketGroup::singleton("side", &["Tie", "Player Pair", "Banker Pair"]),
            ],
        ),
        GameDefinition::new(
            "andar-bahar",
            "Andar Bahar",
            vec![MarketGroup::book("winner", &["Andar", "Bahar"])],
        ),
        GameDefinition::new(
            "single-digit",
            "Single Digit",
            vec![MarketGroup::singleton(
                "numbers",
                &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
            )],
        ),
    ]
}
