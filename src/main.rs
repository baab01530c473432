use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pillsplit::color::PastelColors;
use pillsplit::config::{ConfigError, EditorConfig};
use pillsplit::engine::EngineCore;
use pillsplit::script::{self, ScriptError};
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("script error: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pillsplit", about = "Headless driver for the pill splitter editing core")]
struct Cli {
    /// Log gesture transitions and split decisions.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines pointer script and print the resulting scene.
    Replay {
        script: PathBuf,
        /// Seed for pill colors (overrides PILLSPLIT_COLOR_SEED).
        #[arg(long)]
        seed: Option<u64>,
        /// Print every action as a JSON line instead of the final scene.
        #[arg(long)]
        actions: bool,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let config = EditorConfig::from_env()?;
    match cli.command {
        Command::Replay { script, seed, actions } => run_replay(config, &script, seed, actions),
    }
}

fn run_replay(config: EditorConfig, path: &Path, seed: Option<u64>, print_actions: bool) -> Result<(), CliError> {
    let file = File::open(path).map_err(|source| CliError::Open { path: path.to_path_buf(), source })?;
    let events = script::parse(BufReader::new(file))?;

    let colors = PastelColors::from_seed(seed.or(config.color_seed));
    let mut core = EngineCore::new(config, colors);
    let actions = script::replay(&mut core, &events);
    tracing::info!(events = events.len(), actions = actions.len(), pills = core.pills().len(), "replay finished");

    let mut out = io::stdout().lock();
    if print_actions {
        for action in &actions {
            serde_json::to_writer(&mut out, action)?;
            writeln!(out)?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &core.scene())?;
        writeln!(out)?;
    }
    Ok(())
}
