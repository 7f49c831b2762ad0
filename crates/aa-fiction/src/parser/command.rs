//! Command parsing for player input.

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Parse a direction or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Expand abbreviations; anything that is not a known direction is kept
    /// as typed so worlds can label exits however they like.
    pub fn normalize(s: &str) -> String {
        Self::parse(s).map_or_else(|| s.to_string(), |dir| dir.name().to_string())
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the current room.
    Look,
    /// Take an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Drop an item.
    Drop {
        /// The item name.
        item: String,
    },
    /// Start talking to an entity.
    Approach {
        /// The entity name.
        entity: String,
    },
    /// Use an item on whatever is approached.
    Use {
        /// The item name.
        item: String,
    },
    /// List inventory.
    Inventory,
    /// Stop talking.
    Leave,
    /// List exits.
    Map,
    /// Show the command list.
    Commands,
    /// Move through an exit.
    ///
    /// The direction is optional so the move gate can be checked before
    /// complaining about a missing argument.
    Move {
        /// The exit label as typed.
        direction: Option<String>,
    },
    /// Quit the game.
    Exit,
    /// A known verb missing its argument.
    Incomplete {
        /// What to tell the player.
        hint: &'static str,
    },
    /// Unrecognised verb.
    Unknown {
        /// The verb as typed.
        verb: String,
    },
}

/// Every verb the interpreter understands.
pub const VERBS: &[&str] = &[
    "exit",
    "commands",
    "look",
    "approach",
    "leave",
    "inventory",
    "take",
    "drop",
    "use",
    "move",
    "map",
];

/// Text shown by `commands`.
pub const COMMANDS_HELP: &str = "-exit -> quits the game\n\n\
-commands -> shows the commands\n\n\
-look -> shows the content of the room.\n\n\
-approach <entity> -> to approach an entity\n\n\
-leave -> to leave an entity\n\n\
-inventory -> shows items in the inventory\n\n\
-take <item> -> to take an item into your inventory\n\n\
-drop <item> -> to drop an item from your inventory and move it to the current room\n\n\
-use <item> -> to make use of a certain item when you approach an entity\n\n\
-move <direction> -> to move to a different room\n\n\
-map -> shows the directions you can take\n";

/// Parse a player input string into a command.
///
/// The input is lowercased and split on whitespace. Only the first argument
/// counts; extra words are ignored. Blank input yields `None`.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    let verb = words.next()?;
    let arg = words.next().map(str::to_string);

    let command = match verb {
        "look" => Command::Look,
        "inventory" => Command::Inventory,
        "leave" => Command::Leave,
        "map" => Command::Map,
        "commands" => Command::Commands,
        "exit" => Command::Exit,
        "take" => match arg {
            Some(item) => Command::Take { item },
            None => incomplete("Specify an item to take."),
        },
        "drop" => match arg {
            Some(item) => Command::Drop { item },
            None => incomplete("Specify an item to drop."),
        },
        "approach" => match arg {
            Some(entity) => Command::Approach { entity },
            None => incomplete("Specify an entity to approach."),
        },
        "use" => match arg {
            Some(item) => Command::Use { item },
            None => incomplete("Specify an item to use."),
        },
        "move" => Command::Move { direction: arg },
        _ => Command::Unknown {
            verb: verb.to_string(),
        },
    };
    Some(command)
}

fn incomplete(hint: &'static str) -> Command {
    Command::Incomplete { hint }
}
