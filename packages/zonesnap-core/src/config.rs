//! Snapshot configuration.
//!
//! Deserializable with every field optional, so it can be embedded in an
//! application's config file.

use serde::{Deserialize, Serialize};

use crate::protocol_constants::SOAP_TIMEOUT_SECS;
use crate::sonos::types::RampType;

/// How a transport URI with a scheme outside the known table is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedScheme {
    /// Treat it as a stream (internet radio, line-in, music services).
    #[default]
    Stream,
    /// Treat it as unknown: only mute and volume are restored, and the
    /// scheme is reported to the diagnostics sink.
    Unknown,
}

/// Settings for capturing and restoring zone player state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Classification of unmapped URI schemes.
    pub unmapped_scheme: UnmappedScheme,

    /// Ramp curve used when restoring with fade.
    pub ramp_type: RampType,

    /// Timeout for each SOAP request (seconds).
    pub soap_timeout_secs: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            unmapped_scheme: UnmappedScheme::Stream,
            ramp_type: RampType::SleepTimer,
            soap_timeout_secs: SOAP_TIMEOUT_SECS,
        }
    }
}
