mod config;
mod pauses;
mod segments;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiz-cli", about = "Assemble narrated quiz audio and its render timeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Excise trigger words from the narration, insert timed pauses and
    /// write the corrected audio plus the timeline metadata.
    Pauses {
        #[arg(long)]
        config: PathBuf,
    },
    /// Cut the narration into question/answer segments at cue phrases and
    /// reassemble it with timer and effect sounds.
    Segments {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Pauses { config } => pauses::run(&config),
        Command::Segments { config } => segments::run(&config),
    }
}
