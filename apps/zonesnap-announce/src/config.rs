//! Announce configuration.
//!
//! Supports loading from YAML files with environment variable overrides.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use zonesnap_core::SnapshotConfig;

/// A zone player taking part in the announcement.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SpeakerConfig {
    /// IP address of the speaker.
    pub ip: IpAddr,

    /// Whether the speaker coordinates its group. Only coordinators are sent
    /// the alert; group members follow them.
    #[serde(default)]
    pub coordinator: bool,
}

/// Announce configuration loaded from YAML with environment overrides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnnounceConfig {
    /// Zone players to snapshot and restore.
    pub speakers: Vec<SpeakerConfig>,

    /// Transport URI of the announcement.
    /// Override: `ZONESNAP_ALERT_URI`
    pub alert_uri: String,

    /// Seconds to let the announcement play before restoring.
    /// Override: `ZONESNAP_HOLD_SECS`
    pub hold_secs: u64,

    /// Fade volume back in when restoring.
    pub fade: bool,

    /// Directory to write each captured image to as `<ip>.json`.
    pub image_dump: Option<PathBuf>,

    /// Capture and restore settings.
    pub snapshot: SnapshotConfig,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            speakers: Vec::new(),
            alert_uri: String::new(),
            hold_secs: 6,
            fade: true,
            image_dump: None,
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl AnnounceConfig {
    /// Loads configuration from a YAML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ZONESNAP_ALERT_URI") {
            if !val.is_empty() {
                self.alert_uri = val;
            }
        }

        if let Ok(val) = std::env::var("ZONESNAP_HOLD_SECS") {
            if let Ok(secs) = val.parse() {
                self.hold_secs = secs;
            }
        }
    }

    /// Checks that there is something to announce and somewhere to play it.
    pub fn validate(&self) -> Result<()> {
        if self.alert_uri.is_empty() {
            bail!("No alert URI configured (set alert_uri or ZONESNAP_ALERT_URI)");
        }
        if self.speakers.is_empty() {
            bail!("No speakers configured");
        }
        if !self.speakers.iter().any(|s| s.coordinator) {
            log::warn!("No speaker is marked as coordinator; the alert will not be played");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zonesnap_core::{RampType, UnmappedScheme};

    use super::*;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_speakers_and_nested_snapshot_settings() {
        let file = write_config(
            r#"
alert_uri: "x-file-cifs://nas/alerts/doorbell.mp3"
hold_secs: 4
speakers:
  - ip: 192.168.1.64
    coordinator: true
  - ip: 192.168.1.65
snapshot:
  unmapped_scheme: unknown
  ramp_type: auto_play
"#,
        );

        let config = AnnounceConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.speakers.len(), 2);
        assert!(config.speakers[0].coordinator);
        assert!(!config.speakers[1].coordinator);
        assert_eq!(config.hold_secs, 4);
        assert!(config.fade);
        assert_eq!(config.snapshot.unmapped_scheme, UnmappedScheme::Unknown);
        assert_eq!(config.snapshot.ramp_type, RampType::AutoPlay);
        assert_eq!(config.snapshot.soap_timeout_secs, 10);
        config.validate().unwrap();
    }

    #[test]
    fn invalid_yaml_is_reported_with_path() {
        let file = write_config("speakers: [not a speaker");
        let err = AnnounceConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn validate_requires_speakers() {
        let config = AnnounceConfig {
            alert_uri: "x-file-cifs://nas/alerts/doorbell.mp3".into(),
            ..AnnounceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
