//! Player state management.

use std::collections::BTreeMap;
use std::fmt::Write;

use aa_core::{Ending, Item, RoomId, World};

use crate::error::{ActionError, ActionResult};
use crate::parser::Direction;

/// Narration when a plate is grabbed out of order and the world has none.
const DEFAULT_PLATE_FAILURE: &str = "The plates slip from your grasp and shatter.";

/// The player: where they are, who they are talking to, and what they carry.
///
/// `carried + available` always equals the capacity the player was created
/// with. Every operation that fails leaves the player and the world untouched.
#[derive(Debug, Clone)]
pub struct Player {
    location: RoomId,
    engaged: Option<String>,
    inventory: BTreeMap<String, Item>,
    carried_weight: u32,
    available_weight: u32,
}

impl Player {
    /// Create a player in `location` with an empty inventory.
    pub fn new(location: RoomId, capacity: u32) -> Self {
        Self {
            location,
            engaged: None,
            inventory: BTreeMap::new(),
            carried_weight: 0,
            available_weight: capacity,
        }
    }

    /// The current room.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// The entity currently approached.
    pub fn engaged(&self) -> Option<&str> {
        self.engaged.as_deref()
    }

    /// Items carried, keyed by name.
    pub fn inventory(&self) -> &BTreeMap<String, Item> {
        &self.inventory
    }

    /// Whether an item is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains_key(name)
    }

    /// Total weight carried.
    pub fn carried_weight(&self) -> u32 {
        self.carried_weight
    }

    /// Capacity left.
    pub fn available_weight(&self) -> u32 {
        self.available_weight
    }

    /// Total capacity.
    pub fn capacity(&self) -> u32 {
        self.carried_weight + self.available_weight
    }

    /// Stop approaching whatever is approached.
    pub fn disengage(&mut self) {
        self.engaged = None;
    }

    fn stow(&mut self, item: Item) {
        self.carried_weight += item.weight;
        self.available_weight -= item.weight;
        self.inventory.insert(item.name.clone(), item);
    }

    fn unstow(&mut self, name: &str) -> Option<Item> {
        let item = self.inventory.remove(name)?;
        self.carried_weight -= item.weight;
        self.available_weight += item.weight;
        Some(item)
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Move through an exit of the current room.
    ///
    /// An exit labelled exactly as typed wins; otherwise abbreviations such
    /// as `n` are expanded. Always ends any conversation, even when there is
    /// no exit that way.
    pub fn walk(&mut self, world: &World, direction: &str) -> ActionResult<String> {
        self.disengage();
        let room = world.room(self.location);
        let destination = room
            .exit(direction)
            .or_else(|| room.exit(&Direction::normalize(direction)))
            .ok_or_else(|| ActionError::NoExit(direction.to_string()))?;
        self.location = destination;
        Ok(format!("You are in {}", world.room(destination).name))
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Pick up a visible item from the current room.
    ///
    /// Plates must come off the stack in order. Grabbing any other plate ends
    /// the game and leaves that plate where it is.
    pub fn take(&mut self, world: &mut World, name: &str) -> ActionResult<String> {
        let room = world.room(self.location);
        let weight = room
            .visible_item(name)
            .map(|item| item.weight)
            .ok_or_else(|| ActionError::CannotTake(name.to_string()))?;
        if self.available_weight < weight {
            return Err(ActionError::TooHeavy(name.to_string()));
        }

        if world.is_plate(name) {
            if world.next_plate() != Some(name) {
                tracing::debug!(plate = name, expected = ?world.next_plate(), "plate out of order");
                world.progress.end(Ending::Lost);
                let failure = &world.scenario().plate_failure;
                return Ok(if failure.is_empty() {
                    DEFAULT_PLATE_FAILURE.to_string()
                } else {
                    failure.clone()
                });
            }
            world.claim_plate();
        }

        let room = world.room_mut(self.location);
        let item = room
            .items
            .remove(name)
            .ok_or_else(|| ActionError::CannotTake(name.to_string()))?;
        self.stow(item);
        Ok(format!("{name} has been added to your inventory."))
    }

    /// Put a carried item down in the current room. Plates cannot be dropped.
    pub fn drop(&mut self, world: &mut World, name: &str) -> ActionResult<String> {
        if !self.has_item(name) {
            return Err(ActionError::NotCarrying(name.to_string()));
        }
        if world.is_plate(name) {
            return Err(ActionError::PlateDrop(name.to_string()));
        }
        let item = self
            .unstow(name)
            .ok_or_else(|| ActionError::NotCarrying(name.to_string()))?;
        world
            .room_mut(self.location)
            .items
            .insert(item.name.clone(), item);
        Ok(format!("{name} has been dropped."))
    }

    /// Describe what is carried and how much room is left.
    pub fn show_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return format!(
                "Your inventory is empty.\nAvailable space: {}\n",
                self.available_weight
            );
        }

        let mut output = format!(
            "Available space: {}\nYour inventory contains:\n",
            self.available_weight
        );
        for item in self.inventory.values() {
            let _ = writeln!(
                output,
                "- {}: {} Weight: {}",
                item.name, item.description, item.weight
            );
        }
        output
    }

    // -----------------------------------------------------------------------
    // Conversation
    // -----------------------------------------------------------------------

    /// Start talking to a visible entity in the current room.
    ///
    /// Any previous conversation ends first, so a failed approach leaves the
    /// player approaching nothing.
    pub fn approach(&mut self, world: &World, name: &str) -> ActionResult<String> {
        self.disengage();
        let entity = world
            .room(self.location)
            .visible_entity(name)
            .ok_or_else(|| ActionError::CannotApproach(name.to_string()))?;
        self.engaged = Some(entity.name.clone());
        Ok(entity.description.clone())
    }

    /// End the current conversation and look around.
    pub fn leave(&mut self, world: &World) -> ActionResult<String> {
        if self.engaged.take().is_none() {
            return Err(ActionError::NotApproaching);
        }
        Ok(self.show_room(world))
    }

    /// Use a carried item on the approached entity.
    ///
    /// On a match the bound event fires and the item is consumed.
    pub fn use_item(
        &mut self,
        world: &mut World,
        item: &str,
        target: &str,
    ) -> ActionResult<String> {
        let engaged = self.engaged.as_deref().ok_or(ActionError::NothingApproached)?;
        if engaged != target {
            return Err(ActionError::TargetNotFound(target.to_string()));
        }
        if !self.has_item(item) {
            return Err(ActionError::NotCarrying(item.to_string()));
        }

        let event = world
            .pending_interaction(item, engaged)
            .map(|interaction| interaction.event.clone())
            .ok_or_else(|| ActionError::CannotUse {
                item: item.to_string(),
                target: target.to_string(),
            })?;
        let outcome = world.fire_event(&event).unwrap_or_default();
        self.unstow(item);
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Describe the current room and everything visible in it.
    pub fn show_room(&self, world: &World) -> String {
        let room = world.room(self.location);
        let mut output = format!("You are in {}\n\n{}\n", room.name, room.description);

        let mut entities = room.visible_entities().peekable();
        if entities.peek().is_some() {
            output.push_str("\nYou can approach:\n");
            for entity in entities {
                if self.engaged() == Some(entity.name.as_str()) {
                    let _ = writeln!(output, "- {} (currently approached)", entity.name);
                } else {
                    let _ = writeln!(output, "- {}", entity.name);
                }
            }
        }

        let mut items = room.visible_items().peekable();
        if items.peek().is_some() {
            output.push_str("\nThe room contains:\n");
            for item in items {
                let _ = writeln!(
                    output,
                    "- {}: {} Weight: {}",
                    item.name, item.description, item.weight
                );
            }
        }

        output
    }

    /// List the exits of the current room.
    pub fn show_map(&self, world: &World) -> String {
        let mut output = String::new();
        for (direction, destination) in &world.room(self.location).exits {
            let _ = writeln!(output, "{direction}: {}", world.room(*destination).name);
        }
        output
    }
}
