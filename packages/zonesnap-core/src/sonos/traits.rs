//! Trait abstraction over a single zone player.
//!
//! The snapshot engine depends on [`ZonePlayer`] rather than the SOAP client,
//! so tests can drive it with an in-memory device.

use async_trait::async_trait;

use crate::sonos::soap::SoapResult;
use crate::sonos::types::{MediaInfo, TrackInfo, TransportState};

/// Commands and queries a snapshot needs from one zone player.
///
/// Each call completes when the device has answered. Timeouts and transport
/// retries are the implementation's concern.
#[async_trait]
pub trait ZonePlayer: Send + Sync {
    /// Gets the speaker's mute state.
    async fn get_mute(&self) -> SoapResult<bool>;

    /// Sets the speaker's mute state.
    async fn set_mute(&self, mute: bool) -> SoapResult<()>;

    /// Gets the speaker's volume (0-100).
    async fn get_volume(&self) -> SoapResult<u8>;

    /// Sets the speaker's volume (0-100, values > 100 are clamped).
    async fn set_volume(&self, volume: u8) -> SoapResult<()>;

    /// Returns `true` when the speaker's output is locked at a fixed level.
    ///
    /// Fixed-output speakers always report a volume of 100.
    async fn get_output_fixed(&self) -> SoapResult<bool>;

    /// Starts ramping the volume towards `target`.
    ///
    /// Returns once the device has accepted the command; the ramp itself
    /// continues on the device.
    async fn ramp_to_volume(&self, target: u8) -> SoapResult<()>;

    /// Gets the current transport URI and its metadata.
    async fn get_media_info(&self) -> SoapResult<MediaInfo>;

    /// Gets the current queue position and elapsed time.
    async fn get_current_track_info(&self) -> SoapResult<TrackInfo>;

    /// Gets the current transport state.
    async fn get_transport_state(&self) -> SoapResult<TransportState>;

    /// Sets the transport URI (queue, stream, group coordinator, ...).
    async fn set_transport_uri(&self, uri: &str, metadata: &str) -> SoapResult<()>;

    /// Seeks to a 1-based queue position.
    async fn seek_track_number(&self, track: u32) -> SoapResult<()>;

    /// Seeks within the current track to an "HH:MM:SS" offset.
    async fn seek_relative_time(&self, time: &str) -> SoapResult<()>;

    /// Starts playback of the current transport URI.
    async fn play(&self) -> SoapResult<()>;
}
