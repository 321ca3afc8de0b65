//! Game driver
//!
//! Everything outside the inference core: configuration, the turn history
//! and the loop that plays a strategy against a secret.

mod board;
mod config;
mod driver;

pub use board::{Board, TurnRecord};
pub use config::GameConfig;
pub use driver::{Game, GameOutcome, GameReport, GameState};
