//! Zonesnap Announce - play an alert on Sonos zones, then restore them.
//!
//! Every configured speaker is snapshotted, coordinators play the alert, and
//! after a hold period every speaker is put back the way it was.
//! The `snap` and `restore` subcommands work on a single speaker with images
//! stored as JSON.

mod announce;
mod config;

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use zonesnap_core::{Image, Snapshot, SonosZonePlayer};

use crate::config::AnnounceConfig;

/// Zonesnap Announce - snapshot, announce and restore Sonos zones.
#[derive(Parser, Debug)]
#[command(name = "zonesnap-announce")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (YAML).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long, default_value = "info", env = "ZONESNAP_LOG_LEVEL", global = true)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Snapshot all speakers, play the alert, restore (default).
    Announce {
        /// Alert URI (overrides config file).
        #[arg(short, long)]
        alert_uri: Option<String>,

        /// Seconds to hold before restoring (overrides config file).
        #[arg(long)]
        hold_secs: Option<u64>,

        /// Restore volume directly instead of fading in.
        #[arg(long)]
        no_fade: bool,
    },
    /// Capture one speaker and print its image as JSON.
    Snap {
        /// Speaker IP address.
        ip: IpAddr,
    },
    /// Restore one speaker from a JSON image file.
    Restore {
        /// Speaker IP address.
        ip: IpAddr,

        /// Image file written by `snap` or the announce image dump.
        #[arg(short, long, value_name = "FILE")]
        image: PathBuf,

        /// Fade volume in.
        #[arg(long)]
        fade: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Zonesnap Announce v{}", env!("CARGO_PKG_VERSION"));

    let mut config =
        AnnounceConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        None => run_announce(config).await,
        Some(Command::Announce {
            alert_uri,
            hold_secs,
            no_fade,
        }) => {
            if let Some(uri) = alert_uri {
                config.alert_uri = uri;
            }
            if let Some(secs) = hold_secs {
                config.hold_secs = secs;
            }
            if no_fade {
                config.fade = false;
            }
            run_announce(config).await
        }
        Some(Command::Snap { ip }) => {
            let mut snapshot = single_speaker(&config, ip);
            let image = snapshot.snap().await.context("Snapshot failed")?;
            println!("{}", image.to_json()?);
            Ok(())
        }
        Some(Command::Restore { ip, image, fade }) => {
            let json = std::fs::read_to_string(&image)
                .with_context(|| format!("Failed to read image: {}", image.display()))?;
            let image = Image::from_json(&json).context("Failed to parse image")?;
            single_speaker(&config, ip)
                .restore(fade, Some(&image))
                .await
                .context("Restore failed")?;
            log::info!("{} restored", ip);
            Ok(())
        }
    }
}

async fn run_announce(config: AnnounceConfig) -> Result<()> {
    config.validate()?;

    log::info!(
        "Configuration: speakers={}, alert_uri={}, hold_secs={}, fade={}",
        config.speakers.len(),
        config.alert_uri,
        config.hold_secs,
        config.fade
    );

    let zones = announce::sonos_zones(&config);
    let failures = announce::run(&config, zones).await?;
    if failures > 0 {
        bail!("{} speaker(s) could not be snapped or restored", failures);
    }

    log::info!("All speakers restored");
    Ok(())
}

fn single_speaker(config: &AnnounceConfig, ip: IpAddr) -> Snapshot {
    let player = SonosZonePlayer::new(reqwest::Client::new(), ip.to_string(), &config.snapshot);
    Snapshot::with_config(
        Arc::new(player),
        config.snapshot.clone(),
        Arc::new(zonesnap_core::LogDiagnostics),
    )
}
