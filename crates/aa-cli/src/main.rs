//! Terminal frontend for Academy Adventure.

mod play;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aa_fiction::GameConfig;

#[derive(Parser)]
#[command(
    name = "academy",
    about = "Academy Adventure: a text adventure set on the last hack-day",
    version
)]
struct Cli {
    /// World definition (JSON) to play instead of the built-in academy
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Carry capacity, overriding the world's value
    #[arg(short, long)]
    capacity: Option<u32>,

    /// Keep earlier output on screen instead of clearing between turns
    #[arg(long)]
    no_clear: bool,

    /// Start without printing the introduction
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::default();
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    let options = play::Options {
        clear: !cli.no_clear,
        intro: !cli.skip_intro,
    };

    let result = play::load_world(cli.world.as_deref())
        .and_then(|world| play::run(world, &config, &options));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
