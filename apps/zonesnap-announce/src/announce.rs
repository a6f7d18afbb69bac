//! Snapshot, announce, restore across a set of zone players.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::join_all;
use zonesnap_core::{
    LogDiagnostics, Snapshot, SnapshotConfig, SoapResult, SonosZonePlayer, ZonePlayer,
};

use crate::config::{AnnounceConfig, SpeakerConfig};

/// One speaker taking part in the announcement, with its snapshot engine.
pub struct Zone {
    ip: String,
    coordinator: bool,
    player: Arc<dyn ZonePlayer>,
    snapshot: Snapshot,
    captured: bool,
}

impl Zone {
    pub fn new(
        ip: String,
        coordinator: bool,
        player: Arc<dyn ZonePlayer>,
        config: &SnapshotConfig,
    ) -> Self {
        let snapshot = Snapshot::with_config(player.clone(), config.clone(), Arc::new(LogDiagnostics));

        Self {
            ip,
            coordinator,
            player,
            snapshot,
            captured: false,
        }
    }

    /// Builds a zone backed by the SOAP client for a configured speaker.
    pub fn sonos(client: &reqwest::Client, speaker: &SpeakerConfig, config: &SnapshotConfig) -> Self {
        let ip = speaker.ip.to_string();
        let player = Arc::new(SonosZonePlayer::new(client.clone(), ip.clone(), config));
        Self::new(ip, speaker.coordinator, player, config)
    }
}

/// Builds one SOAP-backed zone per configured speaker, sharing one HTTP client.
pub fn sonos_zones(config: &AnnounceConfig) -> Vec<Zone> {
    let client = reqwest::Client::new();
    config
        .speakers
        .iter()
        .map(|s| Zone::sonos(&client, s, &config.snapshot))
        .collect()
}

/// Runs the announcement over `zones`. Returns the number of speakers that
/// could not be snapped or restored.
pub async fn run(config: &AnnounceConfig, mut zones: Vec<Zone>) -> Result<usize> {
    let mut failures = 0;

    // Snap every zone before touching any of them
    let results = join_all(zones.iter_mut().map(|zone| async move {
        let result = zone.snapshot.snap().await.map(|image| image.clone());
        (zone, result)
    }))
    .await;

    for (zone, result) in results {
        match result {
            Ok(image) => {
                log::info!(
                    "[Announce] {}: {} source, volume {}, mute {}",
                    zone.ip,
                    image.source(),
                    image.volume(),
                    image.mute()
                );
                if let Some(dir) = &config.image_dump {
                    dump_image(dir, &zone.ip, &image.to_json()?)?;
                }
                zone.captured = true;
            }
            Err(e) => {
                log::error!("[Announce] {}: snapshot failed, leaving it alone: {}", zone.ip, e);
                failures += 1;
            }
        }
    }

    for zone in zones.iter().filter(|z| z.coordinator && z.captured) {
        log::info!("[Announce] Playing alert on {}", zone.ip);
        if let Err(e) = play_alert(zone.player.as_ref(), &config.alert_uri).await {
            log::error!("[Announce] {}: alert failed: {}", zone.ip, e);
        }
    }

    log::info!("[Announce] Holding for {}s", config.hold_secs);
    tokio::time::sleep(Duration::from_secs(config.hold_secs)).await;

    let restores = join_all(zones.iter().filter(|z| z.captured).map(|zone| async move {
        (zone, zone.snapshot.restore(config.fade, None).await)
    }))
    .await;

    for (zone, result) in restores {
        match result {
            Ok(()) => log::info!("[Announce] {} restored", zone.ip),
            Err(e) => {
                log::error!("[Announce] {}: restore failed: {}", zone.ip, e);
                failures += 1;
            }
        }
    }

    Ok(failures)
}

async fn play_alert(player: &dyn ZonePlayer, uri: &str) -> SoapResult<()> {
    player.set_transport_uri(uri, "").await?;
    player.play().await
}

fn dump_image(dir: &Path, ip: &str, json: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create image directory: {}", dir.display()))?;
    let path = dir.join(format!("{}.json", ip));
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    log::debug!("[Announce] Wrote {}", path.display());
    Ok(())
}
