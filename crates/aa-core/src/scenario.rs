//! The named roles the scripted puzzles need.
//!
//! A scenario is plain data: which entity is the locked computer, which item
//! is forbidden, which fixtures reveal what. The fiction engine reads it every
//! turn. An empty scenario means a world with no scripted behaviour at all,
//! which is what most tests build.

use serde::{Deserialize, Serialize};

/// Every scripted role of a world. All parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// `move` only works while this item is carried.
    pub move_gate_item: Option<String>,
    /// Fixtures that reveal items once approached.
    pub reveal_fixtures: Vec<RevealFixture>,
    /// Reveals that follow a fired event.
    pub unlock_rules: Vec<UnlockRule>,
    /// What happens when every plate has been loaded.
    pub plate_completion: Option<PlateCompletion>,
    /// Narration when a plate is grabbed out of order.
    pub plate_failure: String,
    /// An item that loses the game as soon as it is carried.
    pub forbidden_item: Option<ForbiddenItem>,
    /// The password-locked entity.
    pub password: Option<PasswordLock>,
    /// The terminal that wins the game.
    pub terminal: Option<TerminalLock>,
}

/// Approaching `entity` reveals `reveal_items` and rewrites the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealFixture {
    /// The fixture entity.
    pub entity: String,
    /// Items made visible.
    pub reveal_items: Vec<String>,
    /// The fixture's description afterwards.
    pub description: String,
}

/// Once `event` has fired, `reveal_item` becomes visible and `entity` is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRule {
    /// The gating event key.
    pub event: String,
    /// Item made visible.
    pub reveal_item: String,
    /// Entity whose description changes.
    pub entity: String,
    /// Its new description.
    pub description: String,
}

/// Fired once every plate interaction has fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateCompletion {
    /// The completion event key.
    pub event: String,
    /// Entities made visible.
    pub reveal_entities: Vec<String>,
    /// Entity whose description changes.
    pub advisor: String,
    /// Its new description.
    pub advisor_description: String,
}

/// Carrying `item` fires `event` and loses the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenItem {
    /// The forbidden item.
    pub item: String,
    /// The loss event key.
    pub event: String,
}

/// An entity that asks for a password when approached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordLock {
    /// The locked entity.
    pub entity: String,
    /// The password. Stored lowercased, since input is lowercased.
    pub secret: String,
    /// Wrong guesses allowed, including the last one.
    pub attempts: u32,
    /// Event fired on the right password.
    pub event: String,
    /// The entity's prompt while locked. `{attempts}` is replaced by the count left.
    pub locked_description: String,
    /// The entity's description once unlocked.
    pub unlocked_description: String,
    /// Entity whose description changes on unlock.
    pub advisor: String,
    /// Its new description.
    pub advisor_description: String,
    /// Entities made visible on unlock.
    pub reveal_entities: Vec<String>,
    /// Narration when the last attempt is wasted.
    pub lockout: String,
}

impl PasswordLock {
    /// The locked prompt with the remaining attempts filled in.
    pub fn prompt(&self, attempts_left: u32) -> String {
        self.locked_description
            .replace("{attempts}", &attempts_left.to_string())
    }
}

/// An entity that accepts two shell commands in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLock {
    /// The terminal entity.
    pub entity: String,
    /// The command that must come first. Stored lowercased.
    pub first_command: String,
    /// Narration after the first command.
    pub first_output: String,
    /// The command that wins the game. Stored lowercased.
    pub second_command: String,
    /// Narration after the second command.
    pub win: String,
}
