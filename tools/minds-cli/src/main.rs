//! Terminal renderer for the Global Minds workspace.
//!
//! Prints the timezone overlap grid for a roster (the built-in team table or a
//! JSON file) and the team transcript, optionally after sending messages as
//! the current user.

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minds_common::mock;
use minds_common::session::Session;
use minds_common::timezone::{parse_roster, OverlapWindow, Timezone, UtcHour};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minds-cli", about = "Scaffolding Global Minds terminal view")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show when each participant is awake and the golden meeting window.
    Overlap {
        /// JSON roster file: [{"city": "Cairo", "utc_offset_hours": 2, "awake": [6, 22]}].
        #[arg(long)]
        timezones: Option<PathBuf>,

        /// First UTC hour of the golden window (inclusive).
        #[arg(long, default_value_t = 13)]
        window_start: u8,

        /// Last UTC hour of the golden window (inclusive).
        #[arg(long, default_value_t = 15)]
        window_end: u8,
    },
    /// Print the team transcript.
    Transcript {
        /// Message to send as the current user before printing. Repeatable.
        #[arg(long)]
        send: Vec<String>,

        /// Emit the transcript as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn load_timezones(path: Option<&Path>) -> Result<Vec<Timezone>> {
    let Some(path) = path else {
        return Ok(mock::timezones());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let roster =
        parse_roster(&json).with_context(|| format!("parsing roster {}", path.display()))?;
    info!("Loaded {} timezones from {}", roster.len(), path.display());
    Ok(roster)
}

fn golden_window(start: u8, end: u8) -> Result<OverlapWindow> {
    let start = UtcHour::new(start).context("--window-start")?;
    let end = UtcHour::new(end).context("--window-end")?;
    Ok(OverlapWindow::new(start, end))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Overlap {
            timezones,
            window_start,
            window_end,
        } => {
            let roster = load_timezones(timezones.as_deref())?;
            let window = golden_window(window_start, window_end)?;
            print!("{}", render::overlap_grid(&roster, &window));
        }
        Command::Transcript { send, json } => {
            let mut session = Session::seeded().context("seeding transcript")?;
            for body in send {
                session.set_draft(body);
                if session.send_draft().is_none() {
                    warn!("Skipped blank message");
                }
            }
            if json {
                let out = serde_json::to_string_pretty(session.log().messages())
                    .context("serializing transcript")?;
                println!("{out}");
            } else {
                print!("{}", render::transcript(session.log().iter()));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
