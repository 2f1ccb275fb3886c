use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use impostor_engine::session::Session;
use impostor_engine::view::RoundView;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schemars::schema_for;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod draw;
mod tui;

/// Pass-the-device party game: everybody gets the same secret name except
/// the impostors.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed the deal so it can be reproduced
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs here, the terminal itself belongs to the game
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the JSON schema of the state a front end renders
    Schema {
        #[arg(short, long, default_value = "./round_view.json")]
        out: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(Command::Schema { out }) = &args.command {
        let schema = schema_for!(RoundView);
        fs::write(out, serde_json::to_string_pretty(&schema)?)
            .with_context(|| format!("Failed to write schema to {}", out.display()))?;
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, "Starting session");

    tui::ui(Session::new(rng)).await
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=trace,impostor_engine=trace", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
