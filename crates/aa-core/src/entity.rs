use serde::{Deserialize, Serialize};

use crate::describe::Describable;

/// A character or fixture the player can approach. Entities never move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique name, also the word the player types.
    pub name: String,
    /// What the entity says or shows when approached.
    pub description: String,
    /// Hidden entities cannot be approached or listed.
    #[serde(default)]
    pub hidden: bool,
}

impl Entity {
    /// Create a visible entity.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hidden: false,
        }
    }

    /// Mark the entity as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl Describable for Entity {
    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}
