//! Command parsing and verb suggestions.

mod command;
mod suggest;

pub use command::{COMMANDS_HELP, Command, Direction, VERBS, parse_command};
pub use suggest::suggest_verb;
