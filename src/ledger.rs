//! Outcome exposure ledger.
//!
//! For a group of mutually exclusive outcomes and the bets of one match, the
//! ledger answers "if this outcome wins, what is the net profit or loss across
//! every bet placed so far". A back bet credits its own outcome with
//! `stake * (rate - 1)` and debits every sibling outcome by `stake`; a lay bet is
//! the exact mirror. Settled bets contribute their realized amount to their own
//! outcome only.
//!
//! Groups that should not cross-credit (independent number or card bets) are
//! evaluated by passing one-outcome slices; no separate algorithm exists for them.

use crate::dto::bet::Bet;
use crate::dto::common::Side;
use crate::outcome::{normalize, Outcome, OutcomeMatcher};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    pub label: String,
    pub profit_loss: f64,
}

/// Signed profit/loss per outcome, in the order the outcomes were given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Book {
    entries: Vec<BookEntry>,
}

impl Book {
    /// A book with every outcome at zero. Repeated labels are kept once.
    pub fn zeroed(outcomes: &[Outcome]) -> Self {
        let mut entries: Vec<BookEntry> = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if !entries.iter().any(|e| e.label == outcome.label) {
                entries.push(BookEntry {
                    label: outcome.label.clone(),
                    profit_loss: 0.0,
                });
            }
        }
        Self { entries }
    }

    /// Joins independently computed books, keeping the first entry of a repeated label.
    pub fn concat(books: impl IntoIterator<Item = Book>) -> Self {
        let mut joined = Book::default();
        for book in books {
            for entry in book.entries {
                if !joined.entries.iter().any(|e| e.label == entry.label) {
                    joined.entries.push(entry);
                }
            }
        }
        joined
    }

    /// Looks up an outcome by label; falls back to a normalized comparison.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .or_else(|| {
                let wanted = normalize(label);
                self.entries.iter().find(|e| normalize(&e.label) == wanted)
            })
            .map(|e| e.profit_loss)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all outcomes. Zero for a two-outcome book holding a single bet.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.profit_loss).sum()
    }

    fn apply(&mut self, target: usize, contribution: Contribution) {
        match contribution {
            Contribution::Nothing => {}
            Contribution::Settled(amount) => self.entries[target].profit_loss += amount,
            Contribution::Open { own, others } => {
                for (index, entry) in self.entries.iter_mut().enumerate() {
                    if index == target {
                        entry.profit_loss += own;
                    } else {
                        entry.profit_loss += others;
                    }
                }
            }
        }
    }
}

/// What a single bet adds to a book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// Unusable stake or rate.
    Nothing,
    /// Realized amount, applied to the bet's own outcome only.
    Settled(f64),
    /// `own` goes to the bet's outcome, `others` to each sibling.
    Open { own: f64, others: f64 },
}

impl Contribution {
    pub fn of(bet: &Bet) -> Self {
        if let Some(settlement) = bet.settled() {
            return Contribution::Settled(settlement.realized());
        }
        if !bet.is_priced() {
            return Contribution::Nothing;
        }

        let win = bet.stake * (bet.rate - 1.0);
        match bet.category {
            Side::Back => Contribution::Open {
                own: win,
                others: -bet.stake,
            },
            Side::Lay => Contribution::Open {
                own: -win,
                others: bet.stake,
            },
        }
    }
}

/// Computes the book for one outcome group.
///
/// `bets` may hold every bet of the match: bets the matcher cannot tie to one of
/// `outcomes` are ignored. The result always contains exactly `outcomes`.
pub fn compute_exposure<M>(outcomes: &[Outcome], bets: &[Bet], matcher: &M) -> Book
where
    M: OutcomeMatcher + ?Sized,
{
    let mut book = Book::zeroed(outcomes);
    if book.is_empty() {
        return book;
    }

    // Resolve against the deduplicated outcome list so indexes line up with the book.
    let group: Vec<Outcome> = book
        .entries
        .iter()
        .map(|e| {
            outcomes
                .iter()
                .find(|o| o.label == e.label)
                .cloned()
                .unwrap_or_else(|| Outcome::new(e.label.clone()))
        })
        .collect();

    let mut matched = 0usize;
    for bet in bets {
        let Some(target) = matcher.resolve(bet, &group) else {
            continue;
        };
        matched += 1;
        let contribution = Contribution::of(bet);
        trace!(
            "Applying {} to '{}': {:?}",
            bet,
            group[target].label,
            contribution
        );
        book.apply(target, contribution);
    }

    debug!(
        "Exposure over {} outcome(s): {} matched, {} ignored",
        group.len(),
        matched,
        bets.len() - matched
    );
    book
}
