//! Fixed protocol constants that should NOT be changed.
//!
//! These values are defined by the UPnP device descriptions Sonos zone players
//! publish, and changing them would break protocol compliance.

// ─────────────────────────────────────────────────────────────────────────────
// HTTP/SOAP
// ─────────────────────────────────────────────────────────────────────────────

/// Default Sonos speaker control port.
pub const SONOS_PORT: u16 = 1400;

/// Default timeout for SOAP HTTP requests (seconds).
///
/// 10 seconds is reasonable for LAN operations.
pub const SOAP_TIMEOUT_SECS: u64 = 10;

/// The only AVTransport/RenderingControl instance a zone player exposes.
pub const INSTANCE_ID: &str = "0";

/// Channel addressed by per-speaker volume and mute actions.
pub const MASTER_CHANNEL: &str = "Master";

// ─────────────────────────────────────────────────────────────────────────────
// Media URI Schemes
// ─────────────────────────────────────────────────────────────────────────────

/// Transport URI prefix of a coordinator playing its own queue.
pub const SCHEME_QUEUE: &str = "x-rincon-queue";

/// Transport URI prefix of a file on a network share.
pub const SCHEME_FILE: &str = "x-file-cifs";

/// Transport URI prefix of a group member following its coordinator.
pub const SCHEME_SLAVE: &str = "x-rincon";

/// Transport URI prefix of a radio stream served through a music service.
pub const SCHEME_STREAM: &str = "x-sonosapi-stream";

// ─────────────────────────────────────────────────────────────────────────────
// AVTransport Seek Units
// ─────────────────────────────────────────────────────────────────────────────

/// Seek unit selecting a 1-based queue position.
pub const SEEK_TRACK_NR: &str = "TRACK_NR";

/// Seek unit selecting an elapsed time within the current track.
pub const SEEK_REL_TIME: &str = "REL_TIME";
