use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{WorldError, WorldResult};
use crate::event::{Event, Interaction};
use crate::item::Item;
use crate::room::{Room, RoomId};
use crate::scenario::Scenario;

/// Carry capacity used when a world does not set one.
pub const DEFAULT_CAPACITY: u32 = 20;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The player finished the terminal sequence.
    Won,
    /// A losing condition was hit.
    Lost,
    /// The player typed `exit`.
    Quit,
}

/// World-level puzzle progress.
///
/// Both fields only move forward: the plate cursor is never decremented and
/// the first recorded ending sticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    plate_index: usize,
    ending: Option<Ending>,
}

impl Progress {
    /// How many plates have been claimed in order.
    pub fn plate_index(&self) -> usize {
        self.plate_index
    }

    /// The ending, once the game is over.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Record an ending. Later calls do not overwrite the first one.
    pub fn end(&mut self, ending: Ending) {
        if self.ending.is_none() {
            tracing::info!(?ending, "game over");
            self.ending = Some(ending);
        }
    }
}

/// The central world model. Owns rooms, events, interactions, and progress.
#[derive(Debug, Clone)]
pub struct World {
    /// Display title.
    pub title: String,
    /// Text shown once at startup.
    pub intro: String,
    /// Puzzle progress.
    pub progress: Progress,
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    start: Option<RoomId>,
    capacity: u32,
    events: BTreeMap<String, Event>,
    interactions: Vec<Interaction>,
    plate_order: Vec<String>,
    scenario: Scenario,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            progress: Progress::default(),
            rooms: Vec::new(),
            by_name: HashMap::new(),
            start: None,
            capacity: DEFAULT_CAPACITY,
            events: BTreeMap::new(),
            interactions: Vec::new(),
            plate_order: Vec::new(),
            scenario: Scenario::default(),
        }
    }

    /// Parse and validate a JSON world definition.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        crate::definition::WorldDef::from_json(json)?.build()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room. Returns its ID.
    ///
    /// Room names must be unique, and so must every item and entity name
    /// across the whole world.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        if self.by_name.contains_key(&room.name) {
            return Err(WorldError::DuplicateName {
                kind: "room",
                name: room.name,
            });
        }
        if let Some(name) = room.items.keys().find(|name| self.has_item(name)) {
            return Err(WorldError::DuplicateName {
                kind: "item",
                name: name.clone(),
            });
        }
        if let Some(name) = room.entities.keys().find(|name| self.entity(name).is_some()) {
            return Err(WorldError::DuplicateName {
                kind: "entity",
                name: name.clone(),
            });
        }

        let id = RoomId(self.rooms.len());
        self.by_name.insert(room.name.clone(), id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Add a one-way exit.
    pub fn connect(
        &mut self,
        from: RoomId,
        direction: impl Into<String>,
        to: RoomId,
    ) -> WorldResult<()> {
        if to.0 >= self.rooms.len() {
            return Err(WorldError::InvalidReference {
                kind: "room",
                name: to.to_string(),
            });
        }
        let room = self
            .rooms
            .get_mut(from.0)
            .ok_or_else(|| WorldError::InvalidReference {
                kind: "room",
                name: from.to_string(),
            })?;
        room.exits.insert(direction.into(), to);
        Ok(())
    }

    /// Get a room by ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not issued by this world.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Get a mutable room by ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not issued by this world.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Find a room by name.
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Where the player starts: the configured room, or the first one added.
    pub fn start_room(&self) -> WorldResult<RoomId> {
        match self.start {
            Some(id) => Ok(id),
            None if self.rooms.is_empty() => Err(WorldError::Empty),
            None => Ok(RoomId(0)),
        }
    }

    /// Set the starting room.
    pub fn set_start(&mut self, id: RoomId) -> WorldResult<()> {
        if id.0 >= self.rooms.len() {
            return Err(WorldError::InvalidReference {
                kind: "room",
                name: id.to_string(),
            });
        }
        self.start = Some(id);
        Ok(())
    }

    /// Total carry capacity for the player.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Set the carry capacity.
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    // -----------------------------------------------------------------------
    // Items and entities
    // -----------------------------------------------------------------------

    /// Whether an item with this name lies in any room.
    pub fn has_item(&self, name: &str) -> bool {
        self.rooms.iter().any(|room| room.items.contains_key(name))
    }

    /// Find an item lying in any room.
    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.rooms
            .iter_mut()
            .find_map(|room| room.items.get_mut(name))
    }

    /// Find an entity in any room.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.rooms.iter().find_map(|room| room.entities.get(name))
    }

    /// Find a mutable entity in any room.
    pub fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.rooms
            .iter_mut()
            .find_map(|room| room.entities.get_mut(name))
    }

    /// Make an entity visible. Returns false if no such entity exists.
    pub fn reveal_entity(&mut self, name: &str) -> bool {
        match self.entity_mut(name) {
            Some(entity) => {
                if entity.hidden {
                    tracing::debug!(entity = name, "entity revealed");
                }
                entity.hidden = false;
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Events and interactions
    // -----------------------------------------------------------------------

    /// Register an event.
    pub fn add_event(&mut self, event: Event) -> WorldResult<()> {
        if self.events.contains_key(&event.key) {
            return Err(WorldError::DuplicateName {
                kind: "event",
                name: event.key,
            });
        }
        self.events.insert(event.key.clone(), event);
        Ok(())
    }

    /// Get an event by key.
    pub fn event(&self, key: &str) -> Option<&Event> {
        self.events.get(key)
    }

    /// Whether an event has fired.
    pub fn is_triggered(&self, key: &str) -> bool {
        self.events.get(key).is_some_and(|event| event.triggered)
    }

    /// Fire an event: mark it triggered and return its outcome text.
    pub fn fire_event(&mut self, key: &str) -> Option<String> {
        let event = self.events.get_mut(key)?;
        event.triggered = true;
        tracing::debug!(event = key, "event fired");
        Some(event.outcome.clone())
    }

    /// Register an interaction.
    ///
    /// The item, entity, and event must exist, and the item/entity pair must
    /// not already be bound.
    pub fn add_interaction(&mut self, interaction: Interaction) -> WorldResult<()> {
        if !self.has_item(&interaction.item) {
            return Err(WorldError::InvalidReference {
                kind: "item",
                name: interaction.item,
            });
        }
        if self.entity(&interaction.entity).is_none() {
            return Err(WorldError::InvalidReference {
                kind: "entity",
                name: interaction.entity,
            });
        }
        if !self.events.contains_key(&interaction.event) {
            return Err(WorldError::InvalidReference {
                kind: "event",
                name: interaction.event,
            });
        }
        if self
            .interactions
            .iter()
            .any(|existing| existing.matches(&interaction.item, &interaction.entity))
        {
            return Err(WorldError::DuplicateInteraction {
                item: interaction.item,
                entity: interaction.entity,
            });
        }
        self.interactions.push(interaction);
        Ok(())
    }

    /// All interactions in declaration order.
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// The interaction for this pair whose event has not fired yet.
    pub fn pending_interaction(&self, item: &str, entity: &str) -> Option<&Interaction> {
        self.interactions
            .iter()
            .find(|i| i.matches(item, entity))
            .filter(|i| !self.is_triggered(&i.event))
    }

    // -----------------------------------------------------------------------
    // Plate puzzle
    // -----------------------------------------------------------------------

    /// Set the order in which plates must be taken.
    pub fn set_plate_order(&mut self, order: Vec<String>) -> WorldResult<()> {
        if let Some(name) = order.iter().find(|name| !self.has_item(name)) {
            return Err(WorldError::InvalidReference {
                kind: "item",
                name: name.clone(),
            });
        }
        self.plate_order = order;
        Ok(())
    }

    /// The plate sequence.
    pub fn plate_order(&self) -> &[String] {
        &self.plate_order
    }

    /// Whether an item belongs to the plate sequence.
    pub fn is_plate(&self, name: &str) -> bool {
        self.plate_order.iter().any(|plate| plate == name)
    }

    /// The next plate that may be taken.
    pub fn next_plate(&self) -> Option<&str> {
        self.plate_order
            .get(self.progress.plate_index)
            .map(String::as_str)
    }

    /// Advance the plate cursor past the next plate.
    pub fn claim_plate(&mut self) {
        if self.progress.plate_index < self.plate_order.len() {
            self.progress.plate_index += 1;
        }
    }

    /// Whether every plate interaction has fired.
    ///
    /// False when the world has no plate interactions at all.
    pub fn all_plates_loaded(&self) -> bool {
        let mut plates = self
            .interactions
            .iter()
            .filter(|i| self.is_plate(&i.item))
            .peekable();
        plates.peek().is_some() && plates.all(|i| self.is_triggered(&i.event))
    }

    // -----------------------------------------------------------------------
    // Scenario
    // -----------------------------------------------------------------------

    /// The scripted roles of this world.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Set the scripted roles, checking every name they refer to.
    pub fn set_scenario(&mut self, mut scenario: Scenario) -> WorldResult<()> {
        let items = scenario
            .move_gate_item
            .iter()
            .chain(scenario.reveal_fixtures.iter().flat_map(|f| &f.reveal_items))
            .chain(scenario.unlock_rules.iter().map(|r| &r.reveal_item))
            .chain(scenario.forbidden_item.iter().map(|f| &f.item));
        for name in items {
            if !self.has_item(name) {
                return Err(WorldError::InvalidReference {
                    kind: "item",
                    name: name.clone(),
                });
            }
        }

        let entities = scenario
            .reveal_fixtures
            .iter()
            .map(|f| &f.entity)
            .chain(scenario.unlock_rules.iter().map(|r| &r.entity))
            .chain(scenario.plate_completion.iter().flat_map(|p| {
                std::iter::once(&p.advisor).chain(&p.reveal_entities)
            }))
            .chain(scenario.password.iter().flat_map(|p| {
                [&p.entity, &p.advisor].into_iter().chain(&p.reveal_entities)
            }))
            .chain(scenario.terminal.iter().map(|t| &t.entity));
        for name in entities {
            if self.entity(name).is_none() {
                return Err(WorldError::InvalidReference {
                    kind: "entity",
                    name: name.clone(),
                });
            }
        }

        let events = scenario
            .unlock_rules
            .iter()
            .map(|r| &r.event)
            .chain(scenario.plate_completion.iter().map(|p| &p.event))
            .chain(scenario.forbidden_item.iter().map(|f| &f.event))
            .chain(scenario.password.iter().map(|p| &p.event));
        for key in events {
            if !self.events.contains_key(key) {
                return Err(WorldError::InvalidReference {
                    kind: "event",
                    name: key.clone(),
                });
            }
        }

        // Player input is lowercased before it is matched.
        if let Some(lock) = &mut scenario.password {
            lock.secret = lock.secret.trim().to_lowercase();
        }
        if let Some(terminal) = &mut scenario.terminal {
            terminal.first_command = terminal.first_command.trim().to_lowercase();
            terminal.second_command = terminal.second_command.trim().to_lowercase();
        }

        self.scenario = scenario;
        Ok(())
    }
}
