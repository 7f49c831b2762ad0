use serde::{Deserialize, Serialize};

use crate::describe::Describable;

/// A portable object. Lives either in one room or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name, also the word the player types.
    pub name: String,
    /// Text shown in room and inventory listings.
    pub description: String,
    /// Capacity the item uses up while carried.
    #[serde(default)]
    pub weight: u32,
    /// Hidden items exist but cannot be seen or taken.
    #[serde(default)]
    pub hidden: bool,
}

impl Item {
    /// Create a visible item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
            hidden: false,
        }
    }

    /// Mark the item as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl Describable for Item {
    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}
