//! `frames`: browse a frame taxonomy from the terminal.
//!
//! **Usage:**
//! ```text
//! frames [--taxonomy <FILE>] [-v...] <COMMAND>
//! ```
//!
//! Without `--taxonomy` (or `FRAMES_TAXONOMY`) the built-in animal
//! kingdom sample is loaded.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod browse;
mod table;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use frames::{outline, report, sample, views, Frame, FrameNetwork};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Inspect frames, their supersets and their resolved attributes.
#[derive(Debug, Parser)]
#[command(name = "frames", version, about)]
struct Cli {
    /// JSON taxonomy to load instead of the built-in sample.
    #[arg(long, short, global = true, env = "FRAMES_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show one frame as a table of resolved attributes.
    Show {
        /// Frame name
        name: String,
    },

    /// Print the plain-text report for one frame, or every frame.
    Dump {
        /// Frame name (all frames when omitted)
        name: Option<String>,
    },

    /// Print the taxonomy as a tree.
    Tree,

    /// Print every frame as JSON.
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Interactive prompt: type a frame name to see its description.
    Browse,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(path: Option<&Path>) -> Result<FrameNetwork> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading taxonomy");
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read taxonomy {}", path.display()))?;
            FrameNetwork::from_json(&text)
                .with_context(|| format!("Invalid taxonomy {}", path.display()))
        }
        None => {
            debug!("using built-in sample taxonomy");
            FrameNetwork::from_taxonomy(&sample::animal_kingdom())
                .context("Failed to build sample taxonomy")
        }
    }
}

fn find<'a>(network: &'a FrameNetwork, name: &str) -> Result<&'a Frame> {
    match network.by_name(name) {
        Some(frame) => Ok(frame),
        None => bail!(
            "No frame named '{}' (known frames: {})",
            name,
            network.names().join(", ")
        ),
    }
}

/// Produce the stdout text of a one-shot command.
fn render(network: &FrameNetwork, command: &Command) -> Result<String> {
    let text = match command {
        Command::Show { name } => table::render(network, find(network, name)?),
        Command::Dump { name: Some(name) } => report(network, find(network, name)?).to_string(),
        Command::Dump { name: None } => network
            .iter()
            .map(|frame| report(network, frame).to_string())
            .collect(),
        Command::Tree => outline(network).to_string(),
        Command::Export { pretty } => {
            let all = views(network);
            let mut json = if *pretty {
                serde_json::to_string_pretty(&all)?
            } else {
                serde_json::to_string(&all)?
            };
            json.push('\n');
            json
        }
        Command::Browse => bail!("browse is interactive and has no fixed output"),
    };
    Ok(text)
}

fn run(cli: Cli) -> Result<()> {
    let network = load(cli.taxonomy.as_deref())?;

    match cli.command {
        Command::Browse => browse::run(&network),
        command => {
            print!("{}", render(&network, &command)?);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
