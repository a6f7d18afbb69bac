//! Sonos UPnP service definitions.
//!
//! Single source of truth for the service URNs and control paths used by the
//! SOAP commands a snapshot needs.

use serde::Serialize;

/// Sonos UPnP services used for snapshot capture and restore.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SonosService {
    /// Audio/Video transport control (media info, position, seek, play).
    AVTransport,
    /// Individual speaker volume, mute, fixed-output and ramp control.
    RenderingControl,
}

impl SonosService {
    /// Returns the UPnP service URN for SOAP requests.
    #[must_use]
    pub fn urn(&self) -> &'static str {
        match self {
            Self::AVTransport => "urn:schemas-upnp-org:service:AVTransport:1",
            Self::RenderingControl => "urn:schemas-upnp-org:service:RenderingControl:1",
        }
    }

    /// Returns the UPnP control endpoint path for SOAP requests.
    #[must_use]
    pub fn control_path(&self) -> &'static str {
        match self {
            Self::AVTransport => "/MediaRenderer/AVTransport/Control",
            Self::RenderingControl => "/MediaRenderer/RenderingControl/Control",
        }
    }

    /// Returns a human-readable name for this service.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AVTransport => "AVTransport",
            Self::RenderingControl => "RenderingControl",
        }
    }
}
