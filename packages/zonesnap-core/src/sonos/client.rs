//! SOAP-backed [`ZonePlayer`] for a Sonos speaker.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SnapshotConfig;
use crate::sonos::soap::{SoapResult, SpeakerEndpoint};
use crate::sonos::traits::ZonePlayer;
use crate::sonos::types::{MediaInfo, RampType, TrackInfo, TransportState};
use crate::sonos::{playback, volume};

/// A Sonos zone player addressed by IP.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct SonosZonePlayer {
    speaker: SpeakerEndpoint,
    ramp_type: RampType,
}

impl SonosZonePlayer {
    /// Creates a zone player using the timeout and ramp settings from `config`.
    #[must_use]
    pub fn new(client: Client, ip: impl Into<String>, config: &SnapshotConfig) -> Self {
        Self {
            speaker: SpeakerEndpoint::new(
                client,
                ip,
                Duration::from_secs(config.soap_timeout_secs),
            ),
            ramp_type: config.ramp_type,
        }
    }

    /// IP address of the speaker.
    #[must_use]
    pub fn ip(&self) -> &str {
        self.speaker.ip()
    }
}

#[async_trait]
impl ZonePlayer for SonosZonePlayer {
    async fn get_mute(&self) -> SoapResult<bool> {
        volume::get_speaker_mute(&self.speaker).await
    }

    async fn set_mute(&self, mute: bool) -> SoapResult<()> {
        volume::set_speaker_mute(&self.speaker, mute).await
    }

    async fn get_volume(&self) -> SoapResult<u8> {
        volume::get_speaker_volume(&self.speaker).await
    }

    async fn set_volume(&self, level: u8) -> SoapResult<()> {
        volume::set_speaker_volume(&self.speaker, level).await
    }

    async fn get_output_fixed(&self) -> SoapResult<bool> {
        volume::get_output_fixed(&self.speaker).await
    }

    async fn ramp_to_volume(&self, target: u8) -> SoapResult<()> {
        volume::ramp_to_volume(&self.speaker, target, self.ramp_type).await
    }

    async fn get_media_info(&self) -> SoapResult<MediaInfo> {
        playback::get_media_info(&self.speaker).await
    }

    async fn get_current_track_info(&self) -> SoapResult<TrackInfo> {
        playback::get_position_info(&self.speaker).await
    }

    async fn get_transport_state(&self) -> SoapResult<TransportState> {
        playback::get_transport_state(&self.speaker).await
    }

    async fn set_transport_uri(&self, uri: &str, metadata: &str) -> SoapResult<()> {
        playback::set_av_transport_uri(&self.speaker, uri, metadata).await
    }

    async fn seek_track_number(&self, track: u32) -> SoapResult<()> {
        playback::seek_track(&self.speaker, track).await
    }

    async fn seek_relative_time(&self, time: &str) -> SoapResult<()> {
        playback::seek_rel_time(&self.speaker, time).await
    }

    async fn play(&self) -> SoapResult<()> {
        playback::play(&self.speaker).await
    }
}
