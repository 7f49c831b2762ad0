/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while building a world.
///
/// All of these are problems with the world definition. Once a [`World`]
/// has been built, play never produces a `WorldError`.
///
/// [`World`]: crate::World
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A room, item, entity, or event with the same name already exists.
    #[error("{kind} already exists: \"{name}\"")]
    DuplicateName {
        /// What kind of object clashed ("room", "item", ...).
        kind: &'static str,
        /// The clashing name.
        name: String,
    },

    /// An exit, interaction, or scenario rule names something that does not exist.
    #[error("invalid reference: {kind} \"{name}\" not found")]
    InvalidReference {
        /// What kind of object was expected.
        kind: &'static str,
        /// The unresolved name.
        name: String,
    },

    /// Two interactions bind the same item to the same entity.
    #[error("duplicate interaction: \"{item}\" on \"{entity}\"")]
    DuplicateInteraction {
        /// The item name.
        item: String,
        /// The entity name.
        entity: String,
    },

    /// The world has no rooms to start in.
    #[error("world has no rooms")]
    Empty,

    /// The JSON definition could not be parsed.
    #[error("invalid world definition: {0}")]
    Parse(#[from] serde_json::Error),
}
