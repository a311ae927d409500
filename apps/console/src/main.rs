use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use dataholders::{UiSurface, ValueStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::load_settings;
use controller::{
    events::{parse_command, HELP_TEXT},
    orchestration::{Flow, ScreenController},
};
use ui::ConsoleSurface;

/// Console screen for the four reactive data holders.
#[derive(Parser, Debug)]
struct Args {
    /// TOML config file; defaults to ./dataholders.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,
    /// Comma-separated commands to run instead of reading stdin.
    #[arg(long, value_delimiter = ',')]
    script: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    init_tracing(args.log_level.as_deref().unwrap_or(&settings.log_filter));

    let store = Arc::new(ValueStore::with_config(&settings.store));
    let surface: Arc<dyn UiSurface> = Arc::new(ConsoleSurface::stdout());
    let mut controller = ScreenController::new(store, surface);
    info!("screen created");

    if args.script.is_empty() {
        run_interactive(&mut controller).await
    } else {
        run_script(&mut controller, &args.script).await
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run_script(controller: &mut ScreenController, commands: &[String]) -> Result<()> {
    let mut out = io::stdout();
    for line in commands {
        match parse_command(line) {
            Ok(command) => {
                if controller.dispatch(command, &mut out).await? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(err) => warn!(error = %err, command = %line, "skipping script command"),
        }
    }
    controller.shutdown().await;
    Ok(())
}

async fn run_interactive(controller: &mut ScreenController) -> Result<()> {
    let mut out = io::stdout();
    writeln!(out, "{HELP_TEXT}")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if controller.dispatch(command, &mut out).await? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    controller.shutdown().await;
    Ok(())
}
