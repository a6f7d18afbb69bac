//! Capture and restore of a zone player's playback state.
//!
//! A [`Snapshot`] is bound to one zone player and holds at most one image.
//! Operations issue their device commands one at a time and stop at the first
//! failure; nothing is rolled back.

use std::sync::Arc;

use super::diagnostics::{DiagnosticsSink, LogDiagnostics, UnrecognizedSourceError};
use super::image::{Image, Playback};
use super::source::SourceKind;
use super::time::normalize_rel_time;
use crate::config::SnapshotConfig;
use crate::error::{CommandContext, DeviceCommand, SnapshotError, SnapshotResult};
use crate::sonos::traits::ZonePlayer;
use crate::sonos::types::TransportState;

/// Snapshot engine for a single zone player.
///
/// # Example
///
/// ```ignore
/// let mut snapshot = Snapshot::new(Arc::new(player));
/// snapshot.snap().await?;
/// play_announcement().await?;
/// snapshot.restore(true, None).await?;
/// ```
pub struct Snapshot {
    device: Arc<dyn ZonePlayer>,
    config: SnapshotConfig,
    diagnostics: Arc<dyn DiagnosticsSink>,
    image: Option<Image>,
}

impl Snapshot {
    /// Creates an engine with default settings, reporting anomalies to the log.
    #[must_use]
    pub fn new(device: Arc<dyn ZonePlayer>) -> Self {
        Self::with_config(device, SnapshotConfig::default(), Arc::new(LogDiagnostics))
    }

    #[must_use]
    pub fn with_config(
        device: Arc<dyn ZonePlayer>,
        config: SnapshotConfig,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            device,
            config,
            diagnostics,
            image: None,
        }
    }

    /// The image from the last successful [`snap`](Self::snap), if any.
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Captures the zone player's current state, replacing the held image.
    ///
    /// Only reads from the device. An unrecognized URI scheme is reported to
    /// the diagnostics sink and captured as [`SourceKind::Unknown`].
    ///
    /// # Errors
    /// Returns [`SnapshotError::DeviceCommand`] if a query fails; the
    /// previously held image is kept in that case.
    pub async fn snap(&mut self) -> SnapshotResult<&Image> {
        let image = capture(self.device.as_ref(), &self.config, self.diagnostics.as_ref()).await?;
        log::debug!("[Snapshot] Captured {:?}", image);
        Ok(self.image.insert(image))
    }

    /// Puts the zone player back into the state of `image`, or of the held
    /// image when `image` is `None`.
    ///
    /// With `fade`, volume is set to 0 and then ramped up on the device; this
    /// returns without waiting for the ramp.
    ///
    /// # Errors
    /// - [`SnapshotError::Precondition`] if there is no image to restore.
    /// - [`SnapshotError::DeviceCommand`] for the first command that fails;
    ///   later steps are not attempted.
    pub async fn restore(&self, fade: bool, image: Option<&Image>) -> SnapshotResult<()> {
        let image = image
            .or(self.image.as_ref())
            .ok_or(SnapshotError::Precondition)?;

        restore_image(self.device.as_ref(), image, fade).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capture
// ─────────────────────────────────────────────────────────────────────────────

async fn capture(
    device: &dyn ZonePlayer,
    config: &SnapshotConfig,
    diagnostics: &dyn DiagnosticsSink,
) -> SnapshotResult<Image> {
    let mute = device.get_mute().await.during(DeviceCommand::GetMute)?;
    let volume = device.get_volume().await.during(DeviceCommand::GetVolume)?;
    let media = device
        .get_media_info()
        .await
        .during(DeviceCommand::GetMediaInfo)?;

    let source = SourceKind::classify(&media.current_uri, config.unmapped_scheme);
    if source == SourceKind::Unknown {
        diagnostics.unrecognized_source(&UnrecognizedSourceError::new(&media.current_uri));
    }

    let playback = match source {
        SourceKind::Queue => {
            let track = device
                .get_current_track_info()
                .await
                .during(DeviceCommand::GetCurrentTrackInfo)?;
            Playback::Queue {
                track_number: track.playlist_position,
                track_position: track.position,
                transport_state: transport_state(device).await?,
            }
        }
        SourceKind::Stream => Playback::Stream {
            media_metadata: media.current_uri_metadata,
            transport_state: transport_state(device).await?,
        },
        SourceKind::File => Playback::File {
            transport_state: transport_state(device).await?,
        },
        SourceKind::Empty => Playback::Empty {
            transport_state: transport_state(device).await?,
        },
        SourceKind::Unknown => Playback::Unknown {
            transport_state: transport_state(device).await?,
        },
        SourceKind::Slave => Playback::Slave,
    };

    Image::new(mute, volume.min(100), media.current_uri, playback)
}

async fn transport_state(device: &dyn ZonePlayer) -> SnapshotResult<TransportState> {
    device
        .get_transport_state()
        .await
        .during(DeviceCommand::GetTransportState)
}

// ─────────────────────────────────────────────────────────────────────────────
// Restore
// ─────────────────────────────────────────────────────────────────────────────

async fn restore_image(device: &dyn ZonePlayer, image: &Image, fade: bool) -> SnapshotResult<()> {
    log::info!(
        "[Snapshot] Restoring {} source (fade={})",
        image.source(),
        fade
    );

    // The transport URI must be set before seeking: a seek applies to
    // whatever queue or stream is currently loaded.
    match image.playback() {
        Playback::Queue {
            track_number,
            track_position,
            transport_state,
        } => {
            set_transport_uri(device, image.media_uri(), "").await?;

            if *track_number > 0 {
                device
                    .seek_track_number(*track_number)
                    .await
                    .during(DeviceCommand::SeekTrackNumber)?;
                device
                    .seek_relative_time(&normalize_rel_time(track_position))
                    .await
                    .during(DeviceCommand::SeekRelativeTime)?;
            }

            resume(device, *transport_state).await?;
        }
        Playback::Stream {
            media_metadata,
            transport_state,
        } => {
            set_transport_uri(device, image.media_uri(), media_metadata).await?;
            resume(device, *transport_state).await?;
        }
        Playback::File { .. } | Playback::Empty { .. } | Playback::Unknown { .. } => {
            log::debug!(
                "[Snapshot] {} source is not resumed, restoring mute and volume only",
                image.source()
            );
        }
        Playback::Slave => {}
    }

    device
        .set_mute(image.mute())
        .await
        .during(DeviceCommand::SetMute)?;

    restore_volume(device, image.volume(), fade).await
}

async fn set_transport_uri(device: &dyn ZonePlayer, uri: &str, metadata: &str) -> SnapshotResult<()> {
    device
        .set_transport_uri(uri, metadata)
        .await
        .during(DeviceCommand::SetTransportUri)
}

async fn resume(device: &dyn ZonePlayer, state: TransportState) -> SnapshotResult<()> {
    match state {
        TransportState::Playing => device.play().await.during(DeviceCommand::Play),
        TransportState::Stopped | TransportState::Transitioning | TransportState::PausedPlayback => {
            Ok(())
        }
    }
}

/// Fixed-output speakers always report 100, so a captured 100 is ambiguous
/// and the speaker is asked before touching its volume.
async fn restore_volume(device: &dyn ZonePlayer, volume: u8, fade: bool) -> SnapshotResult<()> {
    if volume == 100
        && device
            .get_output_fixed()
            .await
            .during(DeviceCommand::GetOutputFixed)?
    {
        log::info!("[Snapshot] Output is fixed, leaving volume unchanged");
        return Ok(());
    }

    if fade {
        device
            .set_volume(0)
            .await
            .during(DeviceCommand::SetVolume)?;
        device
            .ramp_to_volume(volume)
            .await
            .during(DeviceCommand::RampToVolume)
    } else {
        device
            .set_volume(volume)
            .await
            .during(DeviceCommand::SetVolume)
    }
}
