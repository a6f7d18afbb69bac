//! Zonesnap Core - snapshot and restore of Sonos zone player state.
//!
//! Captures what a zone player is doing (what it plays and from where, its
//! volume and mute) into an [`Image`], so the player can be used for something
//! else, such as an announcement, and then put back the way it was.
//!
//! # Architecture
//!
//! - [`snapshot`]: The engine, the image type and source classification
//! - [`sonos`]: The [`ZonePlayer`] abstraction and its UPnP/SOAP implementation
//! - [`config`]: Snapshot settings
//! - [`error`]: Centralized error types
//!
//! # Abstraction Traits
//!
//! - [`ZonePlayer`](sonos::ZonePlayer): Queries and commands on one speaker
//! - [`DiagnosticsSink`](snapshot::DiagnosticsSink): Receives capture anomalies
//!
//! Both have default implementations ([`SonosZonePlayer`] and
//! [`LogDiagnostics`](snapshot::LogDiagnostics)); tests substitute their own.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod protocol_constants;
pub mod snapshot;
pub mod sonos;

// Re-export commonly used types at the crate root
pub use config::{SnapshotConfig, UnmappedScheme};
pub use error::{DeviceCommand, ErrorCode, SnapshotError, SnapshotResult};
pub use snapshot::{
    normalize_rel_time, DiagnosticsSink, Image, LogDiagnostics, NoopDiagnostics, Playback,
    Snapshot, SourceKind, UnrecognizedSourceError,
};
pub use sonos::{
    MediaInfo, RampType, SoapError, SoapResult, SonosZonePlayer, TrackInfo, TransportState,
    ZonePlayer,
};
