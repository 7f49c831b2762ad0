use std::collections::BTreeMap;
use std::fmt;

use crate::describe::Describable;
use crate::entity::Entity;
use crate::item::Item;

/// Index of a room inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A place in the world.
///
/// The item and entity maps record *where* things are. Items are moved in and
/// out of them by value, so an item can never sit in two containers at once.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Text shown by `look`.
    pub description: String,
    /// Direction label to destination. Exits are one-way.
    pub exits: BTreeMap<String, RoomId>,
    /// Items lying in the room, keyed by name.
    pub items: BTreeMap<String, Item>,
    /// Entities present in the room, keyed by name.
    pub entities: BTreeMap<String, Entity>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: BTreeMap::new(),
            entities: BTreeMap::new(),
        }
    }

    /// Place an item in the room.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.name.clone(), item);
        self
    }

    /// Place an entity in the room.
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// The destination of an exit, if the room has one in that direction.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// A visible item by name.
    pub fn visible_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name).filter(|item| !item.hidden)
    }

    /// A visible entity by name.
    pub fn visible_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name).filter(|entity| !entity.hidden)
    }

    /// All visible items, sorted by name.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().filter(|item| !item.hidden)
    }

    /// All visible entities, sorted by name.
    pub fn visible_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(|entity| !entity.hidden)
    }
}

impl Describable for Room {
    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}
