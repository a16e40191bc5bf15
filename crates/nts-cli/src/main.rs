mod app;
mod art;
mod cli;
mod component;
mod components;
mod error;
mod output;
mod player;
mod theme;
mod widgets;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use nts_proto::config::Config;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::Disposition;
use crate::output::{terminal_width, RenderOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();

    info!("nts {:?}", cli.command);

    // ── Load config ──────────────────────────────────────────────────────────
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        warn!("config: {:#}; using defaults", e);
        Config::default()
    });

    let stdout = std::io::stdout();
    let color = !cli.no_color
        && config.display.color
        && std::env::var_os("NO_COLOR").is_none()
        && stdout.is_terminal();
    let options = RenderOptions {
        color,
        width: terminal_width(config.display.fallback_width),
    };

    let mut out = stdout.lock();
    let Err(err) = app::run(&cli.command, &config, options, &mut out).await else {
        return Ok(ExitCode::SUCCESS);
    };
    drop(out);

    let color_err = color && std::io::stderr().is_terminal();
    match app::report(&err, color_err, &mut std::io::stderr()) {
        Disposition::Recoverable => {
            warn!("{}", err);
            Ok(ExitCode::SUCCESS)
        }
        Disposition::Failed => {
            warn!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Disposition::Fatal => Err(err.into()),
    }
}

/// Log to `<data_dir>/nts.log`. Any failure here just leaves logging off.
fn init_logging() {
    let data_dir = nts_proto::platform::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("nts.log"))
    else {
        return;
    };

    // Allow RUST_LOG override; keep HTTP client internals quiet by default.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .try_init();
}
