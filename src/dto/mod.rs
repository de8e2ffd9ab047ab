pub mod bet;
pub mod common;
pub mod lenient;
pub mod odds;

// Re-export commonly used types for convenience
pub use bet::{Bet, Settlement};
pub use common::*;
pub use odds::{OddsSnapshot, OutcomeStatus};
