use serde::{Deserialize, Serialize};

/// A one-shot piece of narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique key, e.g. `get-your-lanyard`.
    pub key: String,
    /// Text shown when the event fires.
    pub outcome: String,
    /// Set once the event has fired. Never reset.
    #[serde(default)]
    pub triggered: bool,
}

impl Event {
    /// Create an event that has not fired yet.
    pub fn new(key: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            outcome: outcome.into(),
            triggered: false,
        }
    }
}

/// Using `item` while approaching `entity` fires `event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Name of the item being used.
    pub item: String,
    /// Name of the entity it is used on.
    pub entity: String,
    /// Key of the event to fire.
    pub event: String,
}

impl Interaction {
    /// Bind an item/entity pair to an event key.
    pub fn new(
        item: impl Into<String>,
        entity: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            entity: entity.into(),
            event: event.into(),
        }
    }

    /// Whether this interaction applies to the given pair.
    pub fn matches(&self, item: &str, entity: &str) -> bool {
        self.item == item && self.entity == entity
    }
}
