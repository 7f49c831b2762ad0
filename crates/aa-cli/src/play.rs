use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use aa_core::World;
use aa_fiction::{FAREWELL, GameConfig, GameSession};

use crate::terminal;

/// The built-in hack-day world.
const ACADEMY: &str = include_str!("../assets/academy.json");

/// Presentation switches from the command line.
pub struct Options {
    pub clear: bool,
    pub intro: bool,
}

/// Load the world at `path`, or the built-in one.
pub fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            World::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => World::from_json(ACADEMY).map_err(|e| format!("built-in world: {e}")),
    }
}

pub fn run(world: World, config: &GameConfig, options: &Options) -> Result<(), String> {
    let mut session =
        GameSession::new(world, config).map_err(|e| format!("failed to start session: {e}"))?;
    tracing::info!(title = %session.world().title, "starting game");

    let mut stdout = io::stdout();
    if options.intro && !session.world().intro.is_empty() {
        if options.clear {
            terminal::clear(&mut stdout)?;
        }
        println!("{}", session.world().intro);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        for narration in session.begin_turn() {
            println!("{narration}");
        }
        if session.is_over() {
            break;
        }

        print!("{}", "Enter command: ".bold());
        stdout.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = session.process(&line);
        if options.clear {
            terminal::clear(&mut stdout)?;
        }
        if !reply.is_empty() {
            println!("{reply}");
        }
    }

    println!("{}", FAREWELL.bold());
    tracing::info!(outcome = ?session.outcome(), "game finished");
    Ok(())
}
