use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{WorldError, WorldResult};
use crate::event::{Event, Interaction};
use crate::item::Item;
use crate::room::Room;
use crate::scenario::Scenario;
use crate::world::{DEFAULT_CAPACITY, World};

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

/// A complete world as it is written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDef {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Text shown once at startup.
    #[serde(default)]
    pub intro: String,
    /// Name of the starting room. Defaults to the first room.
    #[serde(default)]
    pub start: Option<String>,
    /// Player carry capacity.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Every room with its contents.
    pub rooms: Vec<RoomDef>,
    /// Every event.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Item-on-entity rules.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    /// Plates in the order they must be taken.
    #[serde(default)]
    pub plate_order: Vec<String>,
    /// Scripted roles.
    #[serde(default)]
    pub scenario: Scenario,
}

/// A room as written on disk. Exits refer to rooms by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    /// Unique room name.
    pub name: String,
    /// Text shown by `look`.
    pub description: String,
    /// Direction label to destination room name.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Items initially in the room.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Entities in the room.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl WorldDef {
    /// Parse a definition from JSON without validating it.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the definition and build the world.
    ///
    /// Rooms go in first so exits, interactions, and scenario rules can all
    /// be checked against what actually exists.
    pub fn build(self) -> WorldResult<World> {
        if self.rooms.is_empty() {
            return Err(WorldError::Empty);
        }

        let mut world = World::new();
        world.title = self.title;
        world.intro = self.intro;
        world.set_capacity(self.capacity);

        let mut exits = Vec::new();
        for def in self.rooms {
            let mut room = Room::new(def.name, def.description);
            for item in def.items {
                if room.items.contains_key(&item.name) {
                    return Err(WorldError::DuplicateName {
                        kind: "item",
                        name: item.name,
                    });
                }
                room.items.insert(item.name.clone(), item);
            }
            for entity in def.entities {
                if room.entities.contains_key(&entity.name) {
                    return Err(WorldError::DuplicateName {
                        kind: "entity",
                        name: entity.name,
                    });
                }
                room.entities.insert(entity.name.clone(), entity);
            }
            let id = world.add_room(room)?;
            exits.push((id, def.exits));
        }

        for (from, room_exits) in exits {
            for (direction, target) in room_exits {
                let to = world
                    .find_room(&target)
                    .ok_or(WorldError::InvalidReference {
                        kind: "room",
                        name: target,
                    })?;
                world.connect(from, direction, to)?;
            }
        }

        if let Some(start) = self.start {
            let id = world
                .find_room(&start)
                .ok_or(WorldError::InvalidReference {
                    kind: "room",
                    name: start,
                })?;
            world.set_start(id)?;
        }

        for event in self.events {
            world.add_event(event)?;
        }
        for interaction in self.interactions {
            world.add_interaction(interaction)?;
        }
        world.set_plate_order(self.plate_order)?;
        world.set_scenario(self.scenario)?;

        tracing::debug!(
            rooms = world.rooms().count(),
            interactions = world.interactions().len(),
            "world built"
        );
        Ok(world)
    }
}
