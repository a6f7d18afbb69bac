//! Centralized error types for snapshot capture and restore.
//!
//! Device failures keep the [`SoapError`] that caused them and name the
//! command that was being issued, so callers can tell which restore step
//! aborted.

use thiserror::Error;

use crate::sonos::soap::SoapError;

/// Trait for error types that provide machine-readable error codes.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;
}

impl ErrorCode for SoapError {
    fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "http_request_failed",
            Self::HttpStatus(_, _) => "http_error_status",
            Self::Fault(_) => "soap_fault",
            Self::Parse => "soap_parse_error",
        }
    }
}

/// Zone player command a snapshot operation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCommand {
    GetMute,
    SetMute,
    GetVolume,
    SetVolume,
    GetOutputFixed,
    RampToVolume,
    GetMediaInfo,
    GetCurrentTrackInfo,
    GetTransportState,
    SetTransportUri,
    SeekTrackNumber,
    SeekRelativeTime,
    Play,
}

impl DeviceCommand {
    /// Returns the command name as used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetMute => "GetMute",
            Self::SetMute => "SetMute",
            Self::GetVolume => "GetVolume",
            Self::SetVolume => "SetVolume",
            Self::GetOutputFixed => "GetOutputFixed",
            Self::RampToVolume => "RampToVolume",
            Self::GetMediaInfo => "GetMediaInfo",
            Self::GetCurrentTrackInfo => "GetCurrentTrackInfo",
            Self::GetTransportState => "GetTransportState",
            Self::SetTransportUri => "SetTransportUri",
            Self::SeekTrackNumber => "SeekTrackNumber",
            Self::SeekRelativeTime => "SeekRelativeTime",
            Self::Play => "Play",
        }
    }
}

impl std::fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by snapshot capture and restore.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Restore was requested but no image was captured or supplied.
    #[error("No snapshot image captured or supplied")]
    Precondition,

    /// A zone player command failed; the operation stopped at this command.
    #[error("Device command {command} failed: {source}")]
    DeviceCommand {
        command: DeviceCommand,
        #[source]
        source: SoapError,
    },

    /// An image violates the field presence rules for its source kind.
    #[error("Invalid snapshot image: {0}")]
    InvalidImage(String),
}

impl SnapshotError {
    /// Returns the failed command for device errors.
    #[must_use]
    pub fn command(&self) -> Option<DeviceCommand> {
        match self {
            Self::DeviceCommand { command, .. } => Some(*command),
            _ => None,
        }
    }
}

impl ErrorCode for SnapshotError {
    fn code(&self) -> &'static str {
        match self {
            Self::Precondition => "precondition_failed",
            Self::DeviceCommand { .. } => "device_command_failed",
            Self::InvalidImage(_) => "invalid_image",
        }
    }
}

/// Convenient Result alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Attaches the issuing command to a SOAP failure.
pub(crate) trait CommandContext<T> {
    fn during(self, command: DeviceCommand) -> SnapshotResult<T>;
}

impl<T> CommandContext<T> for Result<T, SoapError> {
    fn during(self, command: DeviceCommand) -> SnapshotResult<T> {
        self.map_err(|source| SnapshotError::DeviceCommand { command, source })
    }
}
