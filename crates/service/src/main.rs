use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use diskhead_service::{CompareDirections, Config, handle_json};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads one JSON scheduling request per line from stdin and writes one JSON
/// response per line to stdout.
#[derive(Parser)]
#[command(name = "diskhead", version, about = "Disk-head scheduling engine")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How comparisons choose directions for the sweep algorithms.
    #[arg(long, value_enum)]
    compare_directions: Option<CompareDirections>,

    /// Prepend the head position to every reported sequence.
    #[arg(long)]
    include_head: bool,

    /// Report each response's full trajectory, boundary and wrap legs included.
    #[arg(long)]
    include_stops: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("diskhead=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, "ready");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut handled = 0_usize;

    for line in stdin.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_json(&line, &config);
        serde_json::to_writer(&mut stdout, &response).context("failed to write response")?;
        writeln!(stdout).context("failed to write response")?;
        stdout.flush()?;
        handled += 1;
    }

    info!(handled, "done");
    Ok(())
}

/// Loads the config file, if any, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?
            .parse::<Config>()
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(directions) = cli.compare_directions {
        config.compare_directions = directions;
    }
    if cli.include_head {
        config.include_head = true;
    }
    if cli.include_stops {
        config.include_stops = true;
    }

    Ok(config)
}
