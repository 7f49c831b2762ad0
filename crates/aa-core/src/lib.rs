//! Core types for Academy Adventure: rooms, items, entities, and the world model.
//!
//! This crate defines the data the game runs on. It knows nothing about
//! command parsing or the terminal: a [`World`] is built once, either
//! programmatically or from a JSON [`WorldDef`], and then mutated in place by
//! the fiction engine.

/// The JSON world definition and its validation into a [`World`].
pub mod definition;
/// The shared description capability.
pub mod describe;
/// Non-player characters and interactive fixtures.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// One-shot narrative events and the interactions that fire them.
pub mod event;
/// Portable objects the player can carry.
pub mod item;
/// Rooms and their exits.
pub mod room;
/// World-specific roles for the scripted puzzles.
pub mod scenario;
/// The central world model that owns rooms, events, and puzzle progress.
pub mod world;

/// Re-export the world definition.
pub use definition::WorldDef;
/// Re-export the description capability.
pub use describe::{Describable, update_description};
/// Re-export entity types.
pub use entity::Entity;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export event types.
pub use event::{Event, Interaction};
/// Re-export item types.
pub use item::Item;
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export scenario types.
pub use scenario::Scenario;
/// Re-export world model types.
pub use world::{Ending, Progress, World};
