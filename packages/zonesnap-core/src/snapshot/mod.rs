//! Snapshot and restore of zone player state.
//!
//! - `source` - URI scheme classification table
//! - `image` - The captured, serializable state
//! - `engine` - [`Snapshot`], which captures and restores images
//! - `diagnostics` - Sink for capture anomalies
//! - `time` - Elapsed-time normalization for seeks

pub mod diagnostics;
pub mod engine;
pub mod image;
pub mod source;
pub mod time;

#[cfg(test)]
pub(crate) mod test_device;

pub use diagnostics::{DiagnosticsSink, LogDiagnostics, NoopDiagnostics, UnrecognizedSourceError};
pub use engine::Snapshot;
pub use image::{Image, Playback};
pub use source::{uri_scheme, SourceKind};
pub use time::normalize_rel_time;
