//! Sonos domain types returned by zone player queries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Transport State
// ─────────────────────────────────────────────────────────────────────────────

/// Playback transport state of a Sonos speaker.
///
/// Represents the current playback state as reported by the AVTransport service.
/// Serializes to the device's own strings so captured images read like the
/// `GetTransportInfo` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportState {
    Playing,
    Stopped,
    Transitioning,
    PausedPlayback,
}

impl TransportState {
    /// Returns the AVTransport string for this state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Stopped => "STOPPED",
            Self::Transitioning => "TRANSITIONING",
            Self::PausedPlayback => "PAUSED_PLAYBACK",
        }
    }
}

impl std::fmt::Display for TransportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown transport state string.
#[derive(Debug, Clone, Error)]
#[error("unknown transport state: {0}")]
pub struct ParseTransportStateError(pub String);

impl std::str::FromStr for TransportState {
    type Err = ParseTransportStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLAYING" => Ok(Self::Playing),
            "STOPPED" => Ok(Self::Stopped),
            "TRANSITIONING" => Ok(Self::Transitioning),
            "PAUSED_PLAYBACK" | "PAUSED" => Ok(Self::PausedPlayback),
            other => Err(ParseTransportStateError(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Media and Track Info
// ─────────────────────────────────────────────────────────────────────────────

/// Current transport URI of a zone player, from `GetMediaInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInfo {
    /// Raw transport URI (`x-rincon-queue:RINCON_xxx#0`, `x-rincon:RINCON_xxx`, ...).
    pub current_uri: String,
    /// DIDL-Lite metadata for the URI, empty when the device reports none.
    pub current_uri_metadata: String,
}

/// Position within the current track, from `GetPositionInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    /// 1-based queue position; 0 when nothing is queued.
    pub playlist_position: u32,
    /// Elapsed time as reported by the device ("H:MM:SS").
    pub position: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Volume Ramp
// ─────────────────────────────────────────────────────────────────────────────

/// Ramp curve used by `RampToVolume`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampType {
    /// Slow linear ramp (about 17s from 0 to 100).
    #[default]
    SleepTimer,
    /// Ramp used by alarms: mute, then fade in.
    Alarm,
    /// Fast ramp from 0 used when playback starts.
    AutoPlay,
}

impl RampType {
    /// Returns the RenderingControl `RampType` argument.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SleepTimer => "SLEEP_TIMER_RAMP_TYPE",
            Self::Alarm => "ALARM_RAMP_TYPE",
            Self::AutoPlay => "AUTOPLAY_RAMP_TYPE",
        }
    }
}
