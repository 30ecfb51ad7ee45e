//! nudgenet console
//!
//! Loads a labeled CSV dataset, splits it into training and testing sets and
//! builds a sigmoid feedforward classifier, then hands control to an
//! interactive command loop.
//!
//! Run with:
//!   cargo run --release -- --config iris.json
//!
//! Commands: info, train, test, options, help, exit/quit.

mod handlers;
mod menu;
mod state;
mod util;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use nudgenet::AppConfig;
use tracing_subscriber::EnvFilter;

use menu::Console;
use state::Session;
use util::prompt::Terminal;

#[derive(Parser)]
#[command(name = "nudgenet")]
#[command(about = "Train and query a small classifier by finite-difference gradient descent", long_about = None)]
struct Cli {
    /// JSON configuration file; built-in Iris defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the dataset path from the configuration
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Override the random seed from the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter, e.g. "info" or "nudgenet=debug"
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_json(path)?,
        None => AppConfig::default(),
    };
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if let Some(path) = cli.write_config {
        config.validate()?;
        config.save_json(&path)?;
        println!("configuration written to {}", path.display());
        return Ok(());
    }

    let mut session = Session::new(config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut term = Terminal::new(&mut input, &mut output);

    Console::new().run(&mut session, &mut term)
}
