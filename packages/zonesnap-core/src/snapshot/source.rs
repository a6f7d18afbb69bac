//! Classification of a transport URI into the kind of source it plays.

use serde::{Deserialize, Serialize};

use crate::config::UnmappedScheme;
use crate::protocol_constants::{SCHEME_FILE, SCHEME_QUEUE, SCHEME_SLAVE, SCHEME_STREAM};

/// What a zone player was playing, derived from its transport URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The coordinator's own queue.
    Queue,
    /// A single file on a network share.
    File,
    /// Group member following its coordinator.
    Slave,
    /// Radio, line-in or any other stream.
    Stream,
    /// Nothing loaded.
    Empty,
    /// Scheme outside the known table, when configured not to assume a stream.
    Unknown,
}

impl SourceKind {
    /// Classifies a transport URI.
    ///
    /// Only the scheme (text before the first `:`) matters. Schemes missing
    /// from the table follow `unmapped`.
    #[must_use]
    pub fn classify(uri: &str, unmapped: UnmappedScheme) -> Self {
        Self::from_scheme(uri_scheme(uri)).unwrap_or(match unmapped {
            UnmappedScheme::Stream => Self::Stream,
            UnmappedScheme::Unknown => Self::Unknown,
        })
    }

    /// Looks a scheme up in the known table.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            SCHEME_QUEUE => Some(Self::Queue),
            SCHEME_FILE => Some(Self::File),
            SCHEME_SLAVE => Some(Self::Slave),
            SCHEME_STREAM => Some(Self::Stream),
            "" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Returns `true` if `uri` may be classified as `self` under some policy.
    pub(crate) fn matches_uri(&self, uri: &str) -> bool {
        match Self::from_scheme(uri_scheme(uri)) {
            Some(kind) => kind == *self,
            None => matches!(self, Self::Stream | Self::Unknown),
        }
    }

    /// Returns the lowercase name used in serialized images.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::File => "file",
            Self::Slave => "slave",
            Self::Stream => "stream",
            Self::Empty => "empty",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the scheme of a transport URI: everything before the first `:`.
///
/// A URI without a colon is all scheme.
#[must_use]
pub fn uri_scheme(uri: &str) -> &str {
    uri.split_once(':').map_or(uri, |(scheme, _)| scheme)
}
