//! The captured state of one zone player.
//!
//! What an image holds depends on its source kind, so the kind-specific
//! fields live in [`Playback`] variants. An [`Image`] can only be built with a
//! variant that agrees with the classification of its URI.

use serde::{Deserialize, Serialize};

use super::source::SourceKind;
use crate::error::{SnapshotError, SnapshotResult};
use crate::sonos::types::TransportState;

/// Source-specific part of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Coordinator playing its queue.
    Queue {
        /// 1-based queue position; 0 means no track.
        track_number: u32,
        /// Elapsed time as reported by the device.
        track_position: String,
        transport_state: TransportState,
    },
    /// Coordinator playing a stream; the metadata is needed to set it again.
    Stream {
        media_metadata: String,
        transport_state: TransportState,
    },
    File {
        transport_state: TransportState,
    },
    Empty {
        transport_state: TransportState,
    },
    Unknown {
        transport_state: TransportState,
    },
    /// Group member; the coordinator owns the transport.
    Slave,
}

impl Playback {
    /// The source kind this variant represents.
    #[must_use]
    pub fn source(&self) -> SourceKind {
        match self {
            Self::Queue { .. } => SourceKind::Queue,
            Self::Stream { .. } => SourceKind::Stream,
            Self::File { .. } => SourceKind::File,
            Self::Empty { .. } => SourceKind::Empty,
            Self::Unknown { .. } => SourceKind::Unknown,
            Self::Slave => SourceKind::Slave,
        }
    }

    /// Transport state, absent for group members.
    #[must_use]
    pub fn transport_state(&self) -> Option<TransportState> {
        match self {
            Self::Queue { transport_state, .. }
            | Self::Stream { transport_state, .. }
            | Self::File { transport_state }
            | Self::Empty { transport_state }
            | Self::Unknown { transport_state } => Some(*transport_state),
            Self::Slave => None,
        }
    }
}

/// Snapshot of a zone player's volume, mute and what it was playing.
///
/// Serializes as a flat camelCase object; kind-specific fields are omitted
/// when they do not apply:
///
/// ```json
/// {"mute":false,"volume":30,"mediaUri":"x-rincon-queue:RINCON_1#0","source":"queue",
///  "trackNumber":3,"trackPosition":"0:02:15","transportState":"PLAYING"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImage", into = "RawImage")]
pub struct Image {
    mute: bool,
    volume: u8,
    media_uri: String,
    playback: Playback,
}

impl Image {
    /// Builds an image, checking that `playback` fits the URI.
    ///
    /// # Errors
    /// Returns [`SnapshotError::InvalidImage`] if the volume is above 100 or
    /// the playback variant cannot be derived from `media_uri`.
    pub fn new(
        mute: bool,
        volume: u8,
        media_uri: impl Into<String>,
        playback: Playback,
    ) -> SnapshotResult<Self> {
        let media_uri = media_uri.into();

        if volume > 100 {
            return Err(SnapshotError::InvalidImage(format!(
                "volume {} is out of range 0-100",
                volume
            )));
        }

        let source = playback.source();
        if !source.matches_uri(&media_uri) {
            return Err(SnapshotError::InvalidImage(format!(
                "source '{}' does not match media URI '{}'",
                source, media_uri
            )));
        }

        Ok(Self {
            mute,
            volume,
            media_uri,
            playback,
        })
    }

    /// Parses an image previously produced by [`Image::to_json`].
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        serde_json::from_str(json).map_err(|e| SnapshotError::InvalidImage(e.to_string()))
    }

    /// Serializes the image as pretty-printed JSON.
    pub fn to_json(&self) -> SnapshotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::InvalidImage(e.to_string()))
    }

    #[must_use]
    pub fn mute(&self) -> bool {
        self.mute
    }

    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    #[must_use]
    pub fn media_uri(&self) -> &str {
        &self.media_uri
    }

    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[must_use]
    pub fn source(&self) -> SourceKind {
        self.playback.source()
    }

    /// Stream metadata; present only for [`SourceKind::Stream`].
    #[must_use]
    pub fn media_metadata(&self) -> Option<&str> {
        match &self.playback {
            Playback::Stream { media_metadata, .. } => Some(media_metadata),
            _ => None,
        }
    }

    /// Queue position; present only for [`SourceKind::Queue`].
    #[must_use]
    pub fn track_number(&self) -> Option<u32> {
        match &self.playback {
            Playback::Queue { track_number, .. } => Some(*track_number),
            _ => None,
        }
    }

    /// Elapsed time in the track; present only for [`SourceKind::Queue`].
    #[must_use]
    pub fn track_position(&self) -> Option<&str> {
        match &self.playback {
            Playback::Queue { track_position, .. } => Some(track_position),
            _ => None,
        }
    }

    /// Transport state; absent only for [`SourceKind::Slave`].
    #[must_use]
    pub fn transport_state(&self) -> Option<TransportState> {
        self.playback.transport_state()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImage {
    mute: bool,
    volume: u8,
    media_uri: String,
    source: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    media_metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    track_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    track_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transport_state: Option<TransportState>,
}

impl TryFrom<RawImage> for Image {
    type Error = SnapshotError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        let playback = match (
            raw.source,
            raw.media_metadata,
            raw.track_number,
            raw.track_position,
            raw.transport_state,
        ) {
            (SourceKind::Queue, None, Some(track_number), Some(track_position), Some(state)) => {
                Playback::Queue {
                    track_number,
                    track_position,
                    transport_state: state,
                }
            }
            (SourceKind::Stream, Some(media_metadata), None, None, Some(state)) => {
                Playback::Stream {
                    media_metadata,
                    transport_state: state,
                }
            }
            (SourceKind::File, None, None, None, Some(state)) => Playback::File {
                transport_state: state,
            },
            (SourceKind::Empty, None, None, None, Some(state)) => Playback::Empty {
                transport_state: state,
            },
            (SourceKind::Unknown, None, None, None, Some(state)) => Playback::Unknown {
                transport_state: state,
            },
            (SourceKind::Slave, None, None, None, None) => Playback::Slave,
            (source, ..) => {
                return Err(SnapshotError::InvalidImage(format!(
                    "fields present do not match source '{}'",
                    source
                )))
            }
        };

        Image::new(raw.mute, raw.volume, raw.media_uri, playback)
    }
}

impl From<Image> for RawImage {
    fn from(image: Image) -> Self {
        let source = image.source();
        let mut raw = RawImage {
            mute: image.mute,
            volume: image.volume,
            media_uri: image.media_uri,
            source,
            media_metadata: None,
            track_number: None,
            track_position: None,
            transport_state: image.playback.transport_state(),
        };

        match image.playback {
            Playback::Queue {
                track_number,
                track_position,
                ..
            } => {
                raw.track_number = Some(track_number);
                raw.track_position = Some(track_position);
            }
            Playback::Stream { media_metadata, .. } => raw.media_metadata = Some(media_metadata),
            Playback::File { .. }
            | Playback::Empty { .. }
            | Playback::Unknown { .. }
            | Playback::Slave => {}
        }

        raw
    }
}
