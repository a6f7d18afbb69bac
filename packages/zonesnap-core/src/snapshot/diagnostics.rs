//! Diagnostics sink for anomalies seen while capturing.
//!
//! Anomalies never fail a capture; they are handed to the sink the engine was
//! built with.

use thiserror::Error;

use super::source::uri_scheme;

/// A transport URI whose scheme is not in the classification table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized media URI scheme '{scheme}' in {uri}")]
pub struct UnrecognizedSourceError {
    /// Full transport URI reported by the device.
    pub uri: String,
    /// The scheme that failed to match.
    pub scheme: String,
}

impl UnrecognizedSourceError {
    #[must_use]
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            scheme: uri_scheme(uri).to_string(),
        }
    }
}

/// Receives capture anomalies.
pub trait DiagnosticsSink: Send + Sync {
    /// Called when a captured URI is classified as unknown.
    fn unrecognized_source(&self, error: &UnrecognizedSourceError);
}

/// Forwards anomalies to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn unrecognized_source(&self, error: &UnrecognizedSourceError) {
        log::warn!("[Snapshot] {}", error);
    }
}

/// Discards anomalies.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl DiagnosticsSink for NoopDiagnostics {
    fn unrecognized_source(&self, _error: &UnrecognizedSourceError) {}
}
