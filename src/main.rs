//! Mercury log file replayer
//!
//! Replays the log files of a live-coding performance in their original
//! order and pacing, sending each file's code as an OSC message to a running
//! Mercury instance.

mod config;
mod core;
mod error;
mod input;
mod playback;
mod transport;

use anyhow::Context;
use clap::Parser;
use config::{OscSettings, PlayerConfig, DEFAULT_EXTENSION};
use crate::core::format_ms;
use input::{discover_files, FsSource};
use playback::{run_session, PlaybackEngine, SessionOutcome, TimestampResolver, TimestampSource};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use transport::OscClient;

#[derive(Parser, Debug)]
#[command(name = "mercury-log-player")]
#[command(about = "Replay Mercury log files over OSC at the pace they were written")]
#[command(version)]
struct Cli {
    /// Folder containing the log files (searched recursively)
    #[arg(short, long)]
    folder: Option<PathBuf>,

    /// Playback rate (1 = same as performance, 2 = twice as fast)
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    rate: f64,

    /// Fixed total playback length in seconds, spread evenly over all files
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<f64>,

    /// Where file timestamps come from
    #[arg(short, long, value_enum, default_value_t = TimestampSource::Created)]
    timestamps: TimestampSource,

    /// Extension of the log files
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// OSC host (overrides saved settings)
    #[arg(long)]
    host: Option<String>,

    /// OSC port (overrides saved settings)
    #[arg(long)]
    port: Option<u16>,

    /// OSC address the code is sent to (overrides saved settings)
    #[arg(long)]
    address: Option<String>,

    /// Save the effective host, port and address as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn osc_settings(&self) -> OscSettings {
        let mut settings = OscSettings::load();
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(address) = &self.address {
            settings.address = address.clone();
        }
        settings
    }
}

/// Resolves when the operator hits Ctrl + C
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl + C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let osc = cli.osc_settings();
    let config = PlayerConfig::new(cli.folder.clone(), osc)?
        .with_rate(cli.rate)
        .with_fixed_length(cli.length)
        .with_timestamp_source(cli.timestamps)
        .with_extension(cli.extension.clone())
        .validate()?;

    if cli.save_settings {
        match config.osc.save() {
            Ok(path) => info!("saved settings to {}", path.display()),
            Err(e) => warn!("could not save settings: {}", e),
        }
    }

    info!("--folder: {}", config.folder.display());
    info!("--rate: {}", config.rate);
    if let Some(length) = config.timing.fixed_length_secs {
        info!("--length: {}s", length);
    }
    info!("--timestamps: {:?}", config.timing.source);

    info!("getting files from path...");
    let files = discover_files(&config.folder, &config.extension)?;
    info!("found files: {}", files.len());

    let playlist = TimestampResolver::new(&FsSource, &config.timing)
        .resolve(&files)
        .context("failed to prepare log files for playback")?;

    info!("total performance time: {}", format_ms(playlist.total_ms as f64));
    info!(
        "runtime with playbackrate: {}",
        format_ms(playlist.scaled_total_ms(config.rate))
    );

    let mut transport = OscClient::connect(&config.osc.host, config.osc.port)
        .await
        .context("failed to open OSC connection")?;
    let mut engine = PlaybackEngine::new(playlist.events, config.rate, config.osc.address.clone());

    info!("starting playback... quit by hitting: Ctrl + C");
    let outcome = run_session(&mut engine, &mut transport, interrupted()).await;

    let report = outcome.report();
    if report.failed > 0 {
        warn!("{} of {} files could not be sent", report.failed, report.dispatched + report.failed);
    }
    if let SessionOutcome::Interrupted(_) = outcome {
        info!("stopped with {} files left", engine.remaining());
    }

    Ok(())
}
