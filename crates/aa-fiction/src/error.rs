//! Error types for the fiction engine.
//!
//! Every variant is a recoverable mistake by the player. The `Display` text is
//! exactly the narration line shown for it, so the session can print
//! `err.to_string()` and carry on.

use thiserror::Error;

/// Result type for player actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Ways a player action can fail without changing any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No exit in that direction.
    #[error("You can't go that way!")]
    NoExit(String),

    /// Item absent or hidden.
    #[error("You can't take {0}")]
    CannotTake(String),

    /// Item does not fit in the remaining capacity.
    #[error("Weight limit reached! Please drop an item before taking more.")]
    TooHeavy(String),

    /// Item is not in the inventory.
    #[error("You don't have {0}")]
    NotCarrying(String),

    /// Plates may not be put down once taken.
    #[error("You can't leave those lying around! The plates belong in the dishwasher.")]
    PlateDrop(String),

    /// Entity absent or hidden.
    #[error("You can't approach {0}")]
    CannotApproach(String),

    /// `leave` while not approaching anything.
    #[error("You are not approaching anything. Type 'exit' if you want to quit the game.")]
    NotApproaching,

    /// `use` while not approaching anything.
    #[error("You need to approach someone or something before using an item.")]
    NothingApproached,

    /// `use` aimed at something other than the approached entity.
    #[error("{0} not found")]
    TargetNotFound(String),

    /// No interaction binds the item to the entity.
    #[error("You can't use {item} on {target}")]
    CannotUse {
        /// The item name.
        item: String,
        /// The entity name.
        target: String,
    },

    /// `move` without the gate item.
    #[error("Doors are shut for you if you don't have a {0}.")]
    DoorsShut(String),
}
