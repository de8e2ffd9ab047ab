//! # oddsboard-rs
//!
//! Exposure ledger and market lock evaluation for casino-style odds boards
//! (dragon-tiger, teen patti, baccarat, race games and similar).
//!
//! ## Quick Start
//!
//! ```
//! use oddsboard_rs::{compute_exposure, Bet, LabelMatcher, Outcome};
//!
//! let outcomes = vec![Outcome::new("Dragon"), Outcome::new("Tiger")];
//! let bets = vec![
//!     Bet::back("round-1", "Dragon", 100.0, 2.0),
//!     Bet::back("round-1", "Tiger", 50.0, 3.0),
//! ];
//!
//! let book = compute_exposure(&outcomes, &bets, &LabelMatcher::default());
//! assert_eq!(book.get("Dragon"), Some(50.0));
//! assert_eq!(book.get("Tiger"), Some(0.0));
//! ```
//!
//! ## Lock decisions
//!
//! ```
//! use oddsboard_rs::{is_locked, OutcomeStatus};
//! use serde_json::json;
//!
//! let quote = OutcomeStatus::new("Dragon", json!("OPEN"));
//! assert!(!is_locked(quote.state().as_ref(), 10.0));
//! assert!(is_locked(quote.state().as_ref(), 2.0));
//! assert!(is_locked(None, 10.0));
//! ```
//!
//! ## Features
//!
//! - **Exposure Ledger**: per-outcome profit/loss with back/lay semantics and zero-sum fan-out
//! - **Outcome Matching**: stable ids first, normalized labels as a fallback for legacy records
//! - **Lock Evaluation**: fail-closed status parsing plus a fixed near-close cutoff
//! - **Game Catalog**: per-game outcome groups expressed as data, overridable from `config.toml`
//! - **Board Rendering**: lock flag and rounded profit/loss per outcome (binary included)
//!
//! ## Configuration
//!
//! ```toml
//! [lock]
//! cutoff_seconds = 3
//! require_prices = false
//!
//! [[games]]
//! name = "dragon-tiger"
//! title = "Dragon Tiger"
//!
//! [[games.groups]]
//! name = "winner"
//! mode = "book"
//! outcomes = [{ label = "Dragon", id = "dt-d" }, { label = "Tiger", id = "dt-t" }]
//! ```

pub mod board;
pub mod config;
pub mod dto;
pub mod games;
pub mod ledger;
pub mod lock;
pub mod outcome;

// Re-export commonly used types at the crate root
pub use board::{BoardView, OddsBoard, OutcomeView, RoundSnapshot, Tone};
pub use config::Config;
pub use dto::*;
pub use games::{builtin_games, GameDefinition, GroupMode, MarketGroup};
pub use ledger::{compute_exposure, Book, BookEntry, Contribution};
pub use lock::{is_locked, LockPolicy, OutcomeState};
pub use outcome::{LabelMatcher, MatchKind, Outcome, OutcomeMatcher};
