use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use snake_board::driver::PlayDriver;
use snake_board::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_board")]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// Cells per side of the square board
    #[arg(long, conflicts_with = "config")]
    grid_size: Option<usize>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// JSON file with the full board configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log; the terminal itself is taken by the board
    #[arg(long, default_value = "snake_board.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match (&self.config, self.grid_size) {
            (Some(path), _) => GameConfig::load(path)?,
            (None, Some(size)) => GameConfig::new(size),
            (None, None) => GameConfig::default(),
        };

        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("starting with {config:?}");

    let mut driver = PlayDriver::new(config)?;
    driver.run().await?;

    Ok(())
}
