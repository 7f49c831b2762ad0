//! Interactive fiction session management.

use aa_core::{Ending, World, WorldResult, update_description};

use crate::config::GameConfig;
use crate::error::{ActionError, ActionResult};
use crate::parser::{COMMANDS_HELP, Command, parse_command, suggest_verb};
use crate::player::Player;

/// Closing line printed whenever the game ends.
pub const FAREWELL: &str = "Thank you for playing!";

/// Where the next line of input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary commands.
    Normal,
    /// Every line is a password guess.
    AwaitingPassword,
    /// Every line is a shell command on the terminal.
    AwaitingTerminal,
}

/// An interactive fiction session.
///
/// Owns the world and the player. Each turn the caller runs
/// [`begin_turn`](Self::begin_turn), stops if the game is over, and otherwise
/// feeds one line to [`process`](Self::process).
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    player: Player,
    mode: Mode,
    password_attempts_left: u32,
    terminal_first_done: bool,
}

impl GameSession {
    /// Create a session with the player in the world's start room.
    pub fn new(mut world: World, config: &GameConfig) -> WorldResult<Self> {
        let start = world.start_room()?;
        let capacity = config.capacity.unwrap_or_else(|| world.capacity());

        let password_attempts_left = config
            .password_attempts
            .or_else(|| world.scenario().password.as_ref().map(|lock| lock.attempts))
            .unwrap_or(1)
            .max(1);
        if let Some(lock) = world.scenario().password.clone() {
            if let Some(entity) = world.entity_mut(&lock.entity) {
                update_description(entity, lock.prompt(password_attempts_left));
            }
        }

        tracing::debug!(%start, capacity, password_attempts_left, "session started");
        Ok(Self {
            world,
            player: Player::new(start, capacity),
            mode: Mode::Normal,
            password_attempts_left,
            terminal_first_done: false,
        })
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Where input currently goes.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Password guesses left before lockout.
    pub fn password_attempts_left(&self) -> u32 {
        self.password_attempts_left
    }

    /// Whether the first terminal command has been entered.
    pub fn terminal_first_done(&self) -> bool {
        self.terminal_first_done
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Ending> {
        self.world.progress.ending()
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.world.progress.is_over()
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "mode change");
            self.mode = mode;
        }
    }

    // -----------------------------------------------------------------------
    // Per-turn checks
    // -----------------------------------------------------------------------

    /// Run the reactive checks that happen before every prompt.
    ///
    /// Returns narration for anything that fired. Running it twice in a row
    /// changes nothing the second time.
    pub fn begin_turn(&mut self) -> Vec<String> {
        if self.is_over() {
            return Vec::new();
        }

        let scenario = self.world.scenario().clone();
        let mut narration = Vec::new();

        if let Some(engaged) = self.player.engaged().map(str::to_string) {
            for fixture in scenario.reveal_fixtures.iter().filter(|f| f.entity == engaged) {
                for name in &fixture.reveal_items {
                    if let Some(item) = self.world.item_mut(name) {
                        item.hidden = false;
                    }
                }
                if let Some(entity) = self.world.entity_mut(&fixture.entity) {
                    update_description(entity, fixture.description.as_str());
                }
            }
        }

        for rule in &scenario.unlock_rules {
            if !self.world.is_triggered(&rule.event) {
                continue;
            }
            if let Some(item) = self.world.item_mut(&rule.reveal_item) {
                item.hidden = false;
            }
            if let Some(entity) = self.world.entity_mut(&rule.entity) {
                update_description(entity, rule.description.as_str());
            }
        }

        if let Some(completion) = &scenario.plate_completion {
            if !self.world.is_triggered(&completion.event) && self.world.all_plates_loaded() {
                narration.extend(self.world.fire_event(&completion.event));
                for name in &completion.reveal_entities {
                    self.world.reveal_entity(name);
                }
                if let Some(advisor) = self.world.entity_mut(&completion.advisor) {
                    update_description(advisor, completion.advisor_description.as_str());
                }
            }
        }

        if let Some(forbidden) = &scenario.forbidden_item {
            if self.player.has_item(&forbidden.item) {
                narration.extend(self.world.fire_event(&forbidden.event));
                self.world.progress.end(Ending::Lost);
            }
        }

        narration
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Process one line of player input and return the narration.
    ///
    /// Blank input and input after the game has ended return an empty string.
    pub fn process(&mut self, input: &str) -> String {
        if self.is_over() {
            return String::new();
        }
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return String::new();
        }
        if input == "exit" {
            self.world.progress.end(Ending::Quit);
            return String::new();
        }

        match self.mode {
            Mode::Normal => match parse_command(&input) {
                Some(command) => self.execute(command),
                None => String::new(),
            },
            Mode::AwaitingPassword => self.enter_password(&input),
            Mode::AwaitingTerminal => self.enter_terminal(&input),
        }
    }

    /// Execute a parsed command in normal mode.
    pub fn execute(&mut self, command: Command) -> String {
        let result = match command {
            Command::Look => Ok(self.player.show_room(&self.world)),
            Command::Take { item } => self.player.take(&mut self.world, &item),
            Command::Drop { item } => self.player.drop(&mut self.world, &item),
            Command::Approach { entity } => self.do_approach(&entity),
            Command::Use { item } => self.do_use(&item),
            Command::Inventory => Ok(self.player.show_inventory()),
            Command::Leave => self.player.leave(&self.world),
            Command::Map => Ok(self.player.show_map(&self.world)),
            Command::Commands => Ok(COMMANDS_HELP.to_string()),
            Command::Move { direction } => self.do_move(direction.as_deref()),
            Command::Exit => {
                self.world.progress.end(Ending::Quit);
                Ok(String::new())
            }
            Command::Incomplete { hint } => Ok(hint.to_string()),
            Command::Unknown { verb } => Ok(unknown_command(&verb)),
        };
        result.unwrap_or_else(|err| err.to_string())
    }

    fn do_move(&mut self, direction: Option<&str>) -> ActionResult<String> {
        if let Some(gate) = &self.world.scenario().move_gate_item {
            if !self.player.has_item(gate) {
                return Err(ActionError::DoorsShut(gate.clone()));
            }
        }
        match direction {
            Some(direction) => self.player.walk(&self.world, direction),
            None => Ok("Specify a direction to move (e.g., north).".to_string()),
        }
    }

    fn do_approach(&mut self, name: &str) -> ActionResult<String> {
        let description = self.player.approach(&self.world, name)?;

        let scenario = self.world.scenario();
        let locked = scenario
            .password
            .as_ref()
            .is_some_and(|lock| lock.entity == name && !self.world.is_triggered(&lock.event));
        let terminal = scenario
            .terminal
            .as_ref()
            .is_some_and(|terminal| terminal.entity == name);

        if locked {
            self.set_mode(Mode::AwaitingPassword);
        } else if terminal {
            self.set_mode(Mode::AwaitingTerminal);
        }
        Ok(description)
    }

    fn do_use(&mut self, item: &str) -> ActionResult<String> {
        let target = self.player.engaged().unwrap_or_default().to_string();
        self.player.use_item(&mut self.world, item, &target)
    }

    /// Back to normal mode, ending the conversation.
    fn stop_entering(&mut self) -> String {
        self.set_mode(Mode::Normal);
        self.player
            .leave(&self.world)
            .unwrap_or_else(|err| err.to_string())
    }

    // -----------------------------------------------------------------------
    // Password entry
    // -----------------------------------------------------------------------

    fn enter_password(&mut self, input: &str) -> String {
        let Some(lock) = self.world.scenario().password.clone() else {
            self.set_mode(Mode::Normal);
            return String::new();
        };

        if input == lock.secret {
            let outcome = self.world.fire_event(&lock.event).unwrap_or_default();
            if let Some(entity) = self.world.entity_mut(&lock.entity) {
                update_description(entity, lock.unlocked_description);
            }
            if let Some(advisor) = self.world.entity_mut(&lock.advisor) {
                update_description(advisor, lock.advisor_description);
            }
            for name in &lock.reveal_entities {
                self.world.reveal_entity(name);
            }
            self.set_mode(Mode::Normal);
            return outcome;
        }

        if input == "leave" {
            return self.stop_entering();
        }

        if self.password_attempts_left <= 1 {
            self.password_attempts_left = 0;
            self.world.progress.end(Ending::Lost);
            return lock.lockout;
        }

        self.password_attempts_left -= 1;
        let left = self.password_attempts_left;
        tracing::debug!(left, "wrong password");
        if let Some(entity) = self.world.entity_mut(&lock.entity) {
            update_description(entity, lock.prompt(left));
        }
        format!(
            "Incorrect password. Try again, or type 'leave' to stop entering the password.\n\n\
             Remaining attempts: {left}\n"
        )
    }

    // -----------------------------------------------------------------------
    // Terminal entry
    // -----------------------------------------------------------------------

    fn enter_terminal(&mut self, input: &str) -> String {
        let Some(terminal) = self.world.scenario().terminal.clone() else {
            self.set_mode(Mode::Normal);
            return String::new();
        };

        if input == "leave" {
            return self.stop_entering();
        }

        if !self.terminal_first_done && input == terminal.first_command {
            self.terminal_first_done = true;
            tracing::debug!("first terminal command entered");
            if let Some(entity) = self.world.entity_mut(&terminal.entity) {
                let description = format!("{}{}\n", entity.description, terminal.first_output);
                update_description(entity, description);
            }
            return terminal.first_output;
        }

        if self.terminal_first_done && input == terminal.second_command {
            self.world.progress.end(Ending::Won);
            return terminal.win;
        }

        format!(
            "The terminal displays:\n\nbash: {input}: command not found\n\n\
             Type 'leave' to stop entering commands on the terminal\n"
        )
    }
}

fn unknown_command(verb: &str) -> String {
    match suggest_verb(verb) {
        Some(suggestion) => format!("Unknown command: {verb} (did you mean '{suggestion}'?)"),
        None => format!("Unknown command: {verb}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_WORLD: &str = r#"{
        "title": "Test Office",
        "start": "hall",
        "rooms": [
            {
                "name": "hall",
                "description": "A quiet hall.",
                "exits": { "south": "lab" },
                "items": [
                    { "name": "tea", "description": "A cup of tea.", "weight": 2, "hidden": true },
                    { "name": "badge", "description": "Your badge.", "weight": 1, "hidden": true },
                    { "name": "stolen-badge", "description": "Not yours.", "weight": 1, "hidden": true }
                ],
                "entities": [
                    { "name": "clerk", "description": "Tea first." },
                    { "name": "kettle", "description": "You brew some tea." },
                    { "name": "bench", "description": "Someone sleeps here." },
                    { "name": "sink", "description": "An empty sink.", "hidden": true }
                ]
            },
            {
                "name": "lab",
                "description": "A busy lab.",
                "exits": { "north": "hall" },
                "items": [
                    { "name": "plate-a", "description": "Top plate.", "weight": 6, "hidden": true },
                    { "name": "plate-b", "description": "Bottom plate.", "weight": 6, "hidden": true }
                ],
                "entities": [
                    { "name": "computer", "description": "Locked." },
                    { "name": "mentor", "description": "Crack the password." },
                    { "name": "shelf", "description": "A pile of plates.", "hidden": true },
                    { "name": "terminal", "description": "A terminal.\n", "hidden": true }
                ]
            }
        ],
        "events": [
            { "key": "badge-given", "outcome": "Here is your badge." },
            { "key": "a-loaded", "outcome": "Plate a loaded." },
            { "key": "b-loaded", "outcome": "Plate b loaded." },
            { "key": "sink-loaded", "outcome": "All plates loaded." },
            { "key": "clerk-grumpy", "outcome": "The clerk is grumpy." },
            { "key": "computer-unlocked", "outcome": "The screen lights up." }
        ],
        "interactions": [
            { "item": "tea", "entity": "clerk", "event": "badge-given" },
            { "item": "plate-a", "entity": "sink", "event": "a-loaded" },
            { "item": "plate-b", "entity": "sink", "event": "b-loaded" }
        ],
        "plate_order": ["plate-a", "plate-b"],
        "scenario": {
            "move_gate_item": "badge",
            "reveal_fixtures": [
                { "entity": "kettle", "reveal_items": ["tea"], "description": "A kettle." },
                { "entity": "bench", "reveal_items": ["stolen-badge"], "description": "Still asleep." },
                { "entity": "shelf", "reveal_items": ["plate-a", "plate-b"], "description": "A shelf." }
            ],
            "unlock_rules": [
                { "event": "badge-given", "reveal_item": "badge", "entity": "clerk", "description": "Anything else?" }
            ],
            "plate_completion": {
                "event": "sink-loaded",
                "reveal_entities": ["terminal"],
                "advisor": "mentor",
                "advisor_description": "Go to the terminal."
            },
            "plate_failure": "Crash.",
            "forbidden_item": { "item": "stolen-badge", "event": "clerk-grumpy" },
            "password": {
                "entity": "computer",
                "secret": "open",
                "attempts": 3,
                "event": "computer-unlocked",
                "locked_description": "Locked. {attempts} left.",
                "unlocked_description": "Unlocked.",
                "advisor": "mentor",
                "advisor_description": "Now the plates.",
                "reveal_entities": ["shelf", "sink"],
                "lockout": "Locked out."
            },
            "terminal": {
                "entity": "terminal",
                "first_command": "cd /secret",
                "first_output": "Now read the key.",
                "second_command": "cat key",
                "win": "You win."
            }
        }
    }"#;

    fn session() -> GameSession {
        session_with(&GameConfig::default())
    }

    fn session_with(config: &GameConfig) -> GameSession {
        let world = World::from_json(TEST_WORLD).unwrap();
        GameSession::new(world, config).unwrap()
    }

    /// Play lines the way the binary does, returning the last reply.
    fn play(session: &mut GameSession, lines: &[&str]) -> String {
        let mut reply = String::new();
        for line in lines {
            session.begin_turn();
            assert!(!session.is_over(), "game ended before {line:?}");
            reply = session.process(line);
        }
        reply
    }

    fn entity_description(session: &GameSession, name: &str) -> String {
        session.world().entity(name).unwrap().description.clone()
    }

    const GET_BADGE: &[&str] = &[
        "approach kettle",
        "take tea",
        "approach clerk",
        "use tea",
        "take badge",
    ];

    const UNLOCK_COMPUTER: &[&str] = &["move south", "approach computer", "open"];

    const LOAD_PLATES: &[&str] = &[
        "approach shelf",
        "take plate-a",
        "take plate-b",
        "move north",
        "approach sink",
        "use plate-a",
        "use plate-b",
    ];

    #[test]
    fn create_session() {
        let session = session();
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.player().available_weight(), 20);
        assert_eq!(session.password_attempts_left(), 3);
        assert_eq!(entity_description(&session, "computer"), "Locked. 3 left.");
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn config_overrides() {
        let config = GameConfig::default()
            .with_capacity(5)
            .with_password_attempts(7);
        let session = session_with(&config);
        assert_eq!(session.player().capacity(), 5);
        assert_eq!(session.password_attempts_left(), 7);
        assert_eq!(entity_description(&session, "computer"), "Locked. 7 left.");
    }

    #[test]
    fn exit_quits() {
        let mut session = session();
        assert_eq!(session.process("  EXIT "), "");
        assert_eq!(session.outcome(), Some(Ending::Quit));
        assert!(session.begin_turn().is_empty());
        assert_eq!(session.process("look"), "");
    }

    #[test]
    fn blank_input_ignored() {
        let mut session = session();
        assert_eq!(session.process("   "), "");
        assert!(!session.is_over());
    }

    #[test]
    fn look_command() {
        let mut session = session();
        let output = session.process("look");
        assert!(output.starts_with("You are in hall\n\nA quiet hall.\n"));
        assert!(output.contains("- clerk\n"));
        assert!(!output.contains("sink"));
    }

    #[test]
    fn commands_help() {
        let mut session = session();
        assert_eq!(session.process("commands"), COMMANDS_HELP);
    }

    #[test]
    fn unknown_command_with_suggestion() {
        let mut session = session();
        assert_eq!(
            session.process("invetory"),
            "Unknown command: invetory (did you mean 'inventory'?)"
        );
        assert_eq!(session.process("dance"), "Unknown command: dance");
    }

    #[test]
    fn missing_argument_hint() {
        let mut session = session();
        assert_eq!(session.process("take"), "Specify an item to take.");
    }

    #[test]
    fn move_needs_gate_item() {
        let mut session = session();
        assert_eq!(
            session.process("move south"),
            "Doors are shut for you if you don't have a badge."
        );
        assert_eq!(
            session.process("move"),
            "Doors are shut for you if you don't have a badge."
        );
        assert_eq!(session.world().room(session.player().location()).name, "hall");
    }

    #[test]
    fn fixture_reveals_items() {
        let mut session = session();
        assert_eq!(session.process("take tea"), "You can't take tea");
        play(&mut session, &["approach kettle"]);
        session.begin_turn();
        assert_eq!(entity_description(&session, "kettle"), "A kettle.");
        assert_eq!(
            session.process("take tea"),
            "tea has been added to your inventory."
        );
    }

    #[test]
    fn giving_tea_unlocks_badge_and_doors() {
        let mut session = session();
        play(&mut session, &GET_BADGE[..4]);
        assert!(session.world().is_triggered("badge-given"));
        assert!(!session.player().has_item("tea"));

        let reply = play(&mut session, &["take badge"]);
        assert_eq!(reply, "badge has been added to your inventory.");
        assert_eq!(entity_description(&session, "clerk"), "Anything else?");

        assert_eq!(
            play(&mut session, &["move"]),
            "Specify a direction to move (e.g., north)."
        );
        assert_eq!(play(&mut session, &["move s"]), "You are in lab");
    }

    #[test]
    fn use_outcome_returned_once() {
        let mut session = session();
        let reply = play(&mut session, &GET_BADGE[..4]);
        assert_eq!(reply, "Here is your badge.");
    }

    #[test]
    fn use_without_approaching() {
        let mut session = session();
        play(&mut session, &["approach kettle", "take tea", "leave"]);
        assert_eq!(
            play(&mut session, &["use tea"]),
            "You need to approach someone or something before using an item."
        );
    }

    #[test]
    fn forbidden_item_loses() {
        let mut session = session();
        play(&mut session, &["approach bench", "take stolen-badge"]);
        let narration = session.begin_turn();
        assert_eq!(narration, vec!["The clerk is grumpy.".to_string()]);
        assert_eq!(session.outcome(), Some(Ending::Lost));
        assert!(session.world().is_triggered("clerk-grumpy"));
    }

    #[test]
    fn password_mode_entered_on_approach() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        let reply = play(&mut session, &UNLOCK_COMPUTER[..2]);
        assert_eq!(reply, "Locked. 3 left.");
        assert_eq!(session.mode(), Mode::AwaitingPassword);
    }

    #[test]
    fn wrong_password_counts_down() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, &UNLOCK_COMPUTER[..2]);

        let reply = play(&mut session, &["look"]);
        assert_eq!(
            reply,
            "Incorrect password. Try again, or type 'leave' to stop entering the password.\n\nRemaining attempts: 2\n"
        );
        assert_eq!(session.password_attempts_left(), 2);
        assert_eq!(entity_description(&session, "computer"), "Locked. 2 left.");
        assert_eq!(session.mode(), Mode::AwaitingPassword);
    }

    #[test]
    fn password_lockout_loses() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, &UNLOCK_COMPUTER[..2]);
        play(&mut session, &["waterfall", "scrum"]);
        let reply = play(&mut session, &["kanban"]);
        assert_eq!(reply, "Locked out.");
        assert_eq!(session.outcome(), Some(Ending::Lost));
        assert!(!session.world().is_triggered("computer-unlocked"));
    }

    #[test]
    fn right_password_unlocks() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        let reply = play(&mut session, UNLOCK_COMPUTER);
        assert_eq!(reply, "The screen lights up.");
        assert_eq!(session.mode(), Mode::Normal);
        assert!(session.world().is_triggered("computer-unlocked"));
        assert_eq!(entity_description(&session, "computer"), "Unlocked.");
        assert_eq!(entity_description(&session, "mentor"), "Now the plates.");
        assert!(!session.world().entity("shelf").unwrap().hidden);
        assert!(!session.world().entity("sink").unwrap().hidden);

        play(&mut session, &["approach computer"]);
        assert_eq!(session.mode(), Mode::Normal);
    }

    #[test]
    fn leave_password_entry() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, &UNLOCK_COMPUTER[..2]);
        let reply = play(&mut session, &["leave"]);
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.player().engaged(), None);
        assert!(reply.starts_with("You are in lab"));
        assert_eq!(session.password_attempts_left(), 3);
    }

    #[test]
    fn leave_password_entry_on_last_attempt() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, &UNLOCK_COMPUTER[..2]);
        play(&mut session, &["waterfall", "scrum"]);
        assert_eq!(session.password_attempts_left(), 1);

        let reply = play(&mut session, &["leave"]);
        assert!(reply.starts_with("You are in lab"));
        assert!(!session.is_over());
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.password_attempts_left(), 1);

        play(&mut session, &["approach computer"]);
        assert_eq!(session.mode(), Mode::AwaitingPassword);
        assert_eq!(play(&mut session, &["open"]), "The screen lights up.");
    }

    #[test]
    fn plate_out_of_order_loses() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, UNLOCK_COMPUTER);
        let reply = play(&mut session, &["approach shelf", "take plate-b"]);
        assert_eq!(reply, "Crash.");
        assert_eq!(session.outcome(), Some(Ending::Lost));
    }

    #[test]
    fn loading_plates_reveals_terminal() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, UNLOCK_COMPUTER);
        play(&mut session, LOAD_PLATES);
        assert!(session.world().all_plates_loaded());

        let narration = session.begin_turn();
        assert_eq!(narration, vec!["All plates loaded.".to_string()]);
        assert!(!session.world().entity("terminal").unwrap().hidden);
        assert_eq!(entity_description(&session, "mentor"), "Go to the terminal.");
        assert!(session.begin_turn().is_empty());
    }

    #[test]
    fn terminal_sequence_wins() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, UNLOCK_COMPUTER);
        play(&mut session, LOAD_PLATES);

        play(&mut session, &["move south", "approach terminal"]);
        assert_eq!(session.mode(), Mode::AwaitingTerminal);
        assert!(!session.terminal_first_done());

        assert_eq!(
            play(&mut session, &["cat key"]),
            "The terminal displays:\n\nbash: cat key: command not found\n\nType 'leave' to stop entering commands on the terminal\n"
        );
        assert_eq!(play(&mut session, &["cd /secret"]), "Now read the key.");
        assert_eq!(
            entity_description(&session, "terminal"),
            "A terminal.\nNow read the key.\n"
        );
        assert_eq!(play(&mut session, &["cat key"]), "You win.");
        assert_eq!(session.outcome(), Some(Ending::Won));
    }

    #[test]
    fn terminal_remembers_progress_after_leave() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, UNLOCK_COMPUTER);
        play(&mut session, LOAD_PLATES);
        play(
            &mut session,
            &["move south", "approach terminal", "cd /secret", "leave"],
        );
        assert_eq!(session.mode(), Mode::Normal);

        play(&mut session, &["approach terminal"]);
        assert_eq!(session.mode(), Mode::AwaitingTerminal);
        assert!(session.terminal_first_done());
        assert_eq!(play(&mut session, &["cat key"]), "You win.");
    }

    #[test]
    fn leave_terminal_before_first_command() {
        let mut session = session();
        play(&mut session, GET_BADGE);
        play(&mut session, UNLOCK_COMPUTER);
        play(&mut session, LOAD_PLATES);

        let reply = play(&mut session, &["move south", "approach terminal", "leave"]);
        assert!(reply.starts_with("You are in lab"));
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.player().engaged(), None);
        assert!(!session.terminal_first_done());
        assert!(!session.is_over());

        play(&mut session, &["approach terminal"]);
        let reply = play(&mut session, &["cat key"]);
        assert_eq!(reply.lines().nth(2), Some("bash: cat key: command not found"));
        assert_eq!(play(&mut session, &["cd /secret"]), "Now read the key.");
    }

    #[test]
    fn empty_scenario_has_no_scripted_behaviour() {
        let world = World::from_json(
            r#"{ "rooms": [
                { "name": "a", "description": "Room a.", "exits": { "east": "b" } },
                { "name": "b", "description": "Room b." }
            ] }"#,
        )
        .unwrap();
        let mut session = GameSession::new(world, &GameConfig::default()).unwrap();
        assert!(session.begin_turn().is_empty());
        assert_eq!(session.process("move east"), "You are in b");
        assert_eq!(session.process("move east"), "You can't go that way!");
    }
}
