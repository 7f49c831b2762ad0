//! Interactive fiction engine for Academy Adventure.
//!
//! Turns lines of player input into state changes on an [`aa_core::World`]
//! and returns the narration to show. Nothing here reads stdin or writes
//! stdout; the binary owns the terminal.

/// Session configuration.
pub mod config;
/// Error types for recoverable player actions.
pub mod error;
/// Command parsing and verb suggestions.
pub mod parser;
/// Player state and player-facing operations.
pub mod player;
/// The interpreter loop state machine.
pub mod session;

pub use config::GameConfig;
pub use error::{ActionError, ActionResult};
pub use parser::{Command, Direction, parse_command};
pub use player::Player;
pub use session::{FAREWELL, GameSession, Mode};
