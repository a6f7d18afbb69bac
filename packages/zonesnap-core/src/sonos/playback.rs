//! AVTransport queries and commands for a single zone player.
//!
//! Covers what a snapshot reads (media info, position, transport state) and
//! what a restore replays (transport URI, seek, play). Mutating commands retry
//! transient SOAP faults with exponential backoff.

use crate::protocol_constants::{SEEK_REL_TIME, SEEK_TRACK_NR};
use crate::sonos::retry::with_retry;
use crate::sonos::services::SonosService;
use crate::sonos::soap::{SoapError, SoapResult, SpeakerEndpoint};
use crate::sonos::types::{MediaInfo, TrackInfo, TransportState};
use crate::sonos::utils::extract_xml_text;

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// Gets the current transport URI and its metadata.
pub async fn get_media_info(speaker: &SpeakerEndpoint) -> SoapResult<MediaInfo> {
    let response = speaker
        .request(SonosService::AVTransport, "GetMediaInfo")
        .send()
        .await?;

    Ok(parse_media_info(&response))
}

/// Gets the current queue position and elapsed time.
///
/// The `RelTime` field is in "H:MM:SS" format with second precision.
pub async fn get_position_info(speaker: &SpeakerEndpoint) -> SoapResult<TrackInfo> {
    let response = speaker
        .request(SonosService::AVTransport, "GetPositionInfo")
        .send()
        .await?;

    parse_position_info(&response)
}

/// Gets the current transport state.
pub async fn get_transport_state(speaker: &SpeakerEndpoint) -> SoapResult<TransportState> {
    let response = speaker
        .request(SonosService::AVTransport, "GetTransportInfo")
        .send()
        .await?;

    parse_transport_state(&response)
}

fn parse_media_info(xml: &str) -> MediaInfo {
    // Idle speakers answer with self-closing elements
    MediaInfo {
        current_uri: extract_xml_text(xml, "CurrentURI").unwrap_or_default(),
        current_uri_metadata: extract_xml_text(xml, "CurrentURIMetaData").unwrap_or_default(),
    }
}

fn parse_position_info(xml: &str) -> SoapResult<TrackInfo> {
    // An idle queue reports Track 0, which is a valid answer
    let playlist_position = extract_xml_text(xml, "Track")
        .and_then(|s| s.trim().parse().ok())
        .ok_or(SoapError::Parse)?;
    let position = extract_xml_text(xml, "RelTime").ok_or(SoapError::Parse)?;

    Ok(TrackInfo {
        playlist_position,
        position,
    })
}

fn parse_transport_state(xml: &str) -> SoapResult<TransportState> {
    let state = extract_xml_text(xml, "CurrentTransportState").ok_or(SoapError::Parse)?;
    state.parse().map_err(|e| {
        log::warn!("[Sonos] {}", e);
        SoapError::Parse
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Sets the transport URI without starting playback.
pub async fn set_av_transport_uri(
    speaker: &SpeakerEndpoint,
    uri: &str,
    metadata: &str,
) -> SoapResult<()> {
    log::info!(
        "[Sonos] SetAVTransportURI: ip={}, uri={}",
        speaker.ip(),
        uri
    );

    with_retry("SetAVTransportURI", || {
        speaker
            .request(SonosService::AVTransport, "SetAVTransportURI")
            .arg("CurrentURI", uri)
            .arg("CurrentURIMetaData", metadata)
            .send()
    })
    .await?;

    Ok(())
}

/// Seeks to a 1-based position in the queue.
pub async fn seek_track(speaker: &SpeakerEndpoint, track: u32) -> SoapResult<()> {
    seek(speaker, SEEK_TRACK_NR, &track.to_string()).await
}

/// Seeks within the current track to an "HH:MM:SS" offset.
pub async fn seek_rel_time(speaker: &SpeakerEndpoint, time: &str) -> SoapResult<()> {
    seek(speaker, SEEK_REL_TIME, time).await
}

async fn seek(speaker: &SpeakerEndpoint, unit: &str, target: &str) -> SoapResult<()> {
    log::info!(
        "[Sonos] Seek: ip={}, unit={}, target={}",
        speaker.ip(),
        unit,
        target
    );

    // 714 right after SetAVTransportURI means the queue is still loading
    with_retry("Seek", || {
        speaker
            .request(SonosService::AVTransport, "Seek")
            .arg("Unit", unit)
            .arg("Target", target)
            .send()
    })
    .await?;

    Ok(())
}

/// Sends a Play command for the current transport URI.
pub async fn play(speaker: &SpeakerEndpoint) -> SoapResult<()> {
    log::info!("[Sonos] Sending Play command to {}", speaker.ip());

    with_retry("Play", || {
        speaker
            .request(SonosService::AVTransport, "Play")
            .arg("Speed", "1")
            .send()
    })
    .await?;

    log::info!("[Sonos] Play command succeeded for {}", speaker.ip());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::Client;

    use super::*;
    use crate::sonos::test_fixtures::{
        MEDIA_INFO_EMPTY, MEDIA_INFO_QUEUE, MEDIA_INFO_STREAM, POSITION_INFO_TRACK_3,
        TRANSPORT_INFO_PAUSED,
    };

    fn test_speaker() -> SpeakerEndpoint {
        SpeakerEndpoint::new(Client::new(), "192.168.1.64", Duration::from_secs(1))
    }

    #[test]
    fn parses_queue_media_info() {
        let info = parse_media_info(MEDIA_INFO_QUEUE);
        assert_eq!(info.current_uri, "x-rincon-queue:RINCON_000E58C3892E01400#0");
        assert_eq!(info.current_uri_metadata, "");
    }

    #[test]
    fn parses_stream_media_info_with_decoded_metadata() {
        let info = parse_media_info(MEDIA_INFO_STREAM);
        assert_eq!(info.current_uri, "x-sonosapi-stream:s17553?sid=254&flags=8224&sn=0");
        assert!(info.current_uri_metadata.starts_with("<DIDL-Lite"));
        assert!(info.current_uri_metadata.contains("<dc:title>Radio 1</dc:title>"));
    }

    #[test]
    fn self_closing_media_info_is_empty() {
        assert_eq!(parse_media_info(MEDIA_INFO_EMPTY), MediaInfo::default());
    }

    #[test]
    fn parses_position_info() {
        let info = parse_position_info(POSITION_INFO_TRACK_3).expect("position parsed");
        assert_eq!(info.playlist_position, 3);
        assert_eq!(info.position, "0:02:15");
    }

    #[test]
    fn position_info_without_track_is_parse_error() {
        let xml = "<r><RelTime>0:01:00</RelTime></r>";
        assert!(matches!(parse_position_info(xml), Err(SoapError::Parse)));
    }

    #[test]
    fn position_info_without_rel_time_is_parse_error() {
        let xml = "<r><Track>2</Track></r>";
        assert!(matches!(parse_position_info(xml), Err(SoapError::Parse)));
    }

    #[test]
    fn non_numeric_track_is_parse_error() {
        let xml = "<r><Track>two</Track><RelTime>0:01:00</RelTime></r>";
        assert!(matches!(parse_position_info(xml), Err(SoapError::Parse)));
    }

    #[test]
    fn parses_transport_state() {
        let state = parse_transport_state(TRANSPORT_INFO_PAUSED).expect("state parsed");
        assert_eq!(state, TransportState::PausedPlayback);
    }

    #[test]
    fn unknown_transport_state_is_parse_error() {
        let xml = "<r><CurrentTransportState>BUFFERING</CurrentTransportState></r>";
        assert!(matches!(parse_transport_state(xml), Err(SoapError::Parse)));
    }

    #[test]
    fn set_av_transport_uri_request_shape() {
        let speaker = test_speaker();
        let parts = speaker
            .request(SonosService::AVTransport, "SetAVTransportURI")
            .arg("CurrentURI", "x-rincon-queue:RINCON_1#0")
            .arg("CurrentURIMetaData", "")
            .into_parts();

        let (service, action, args) = parts.expect("should build request");
        assert_eq!(service, SonosService::AVTransport);
        assert_eq!(action, "SetAVTransportURI");
        assert_eq!(args[0], ("InstanceID", "0".to_string()));
        assert_eq!(args[1], ("CurrentURI", "x-rincon-queue:RINCON_1#0".to_string()));
        assert_eq!(args[2], ("CurrentURIMetaData", String::new()));
    }

    #[test]
    fn rel_time_seek_request_shape() {
        let speaker = test_speaker();
        let parts = speaker
            .request(SonosService::AVTransport, "Seek")
            .arg("Unit", SEEK_REL_TIME)
            .arg("Target", "00:02:15")
            .into_parts();

        let (_, action, args) = parts.expect("should build request");
        assert_eq!(action, "Seek");
        assert_eq!(args[1], ("Unit", "REL_TIME".to_string()));
        assert_eq!(args[2], ("Target", "00:02:15".to_string()));
    }
}
