//! Sonos zone player control over UPnP/SOAP.
//!
//! # Module Structure
//!
//! - `types` - Transport state, media/track info and ramp types
//! - `services` - UPnP service definitions (URNs, paths)
//! - `traits` - The [`ZonePlayer`] abstraction the snapshot engine depends on
//! - `client` - `SonosZonePlayer`, the SOAP-backed implementation
//! - `playback` - AVTransport queries, seek and play
//! - `volume` - RenderingControl volume, mute, fixed output and ramp
//! - `soap` - Low-level SOAP protocol implementation
//! - `utils` - XML and URL helpers

pub mod client;
pub(crate) mod playback;
pub(crate) mod retry;
pub mod services;
pub mod soap;
pub mod traits;
pub mod types;
pub mod utils;
pub(crate) mod volume;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::SonosZonePlayer;
pub use services::SonosService;
pub use soap::{SoapError, SoapResult};
pub use traits::ZonePlayer;
pub use types::{MediaInfo, RampType, TrackInfo, TransportState};
