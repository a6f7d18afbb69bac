//! Per-speaker volume and mute control (RenderingControl).
//!
//! A snapshot restores each speaker individually, so everything here addresses
//! the speaker's own Master channel rather than the group.

use crate::protocol_constants::MASTER_CHANNEL;
use crate::sonos::services::SonosService;
use crate::sonos::soap::{SoapError, SoapResult, SpeakerEndpoint};
use crate::sonos::types::RampType;
use crate::sonos::utils::extract_xml_text;

/// Gets volume from an individual speaker (0-100).
pub async fn get_speaker_volume(speaker: &SpeakerEndpoint) -> SoapResult<u8> {
    let response = speaker
        .request(SonosService::RenderingControl, "GetVolume")
        .arg("Channel", MASTER_CHANNEL)
        .send()
        .await?;

    extract_xml_text(&response, "CurrentVolume")
        .and_then(|v| v.parse().ok())
        .ok_or(SoapError::Parse)
}

/// Sets volume on an individual speaker (0-100, values > 100 are clamped).
pub async fn set_speaker_volume(speaker: &SpeakerEndpoint, volume: u8) -> SoapResult<()> {
    let clamped = volume.min(100);

    speaker
        .request(SonosService::RenderingControl, "SetVolume")
        .arg("Channel", MASTER_CHANNEL)
        .arg("DesiredVolume", clamped.to_string())
        .send()
        .await?;

    Ok(())
}

/// Gets mute state from an individual speaker.
pub async fn get_speaker_mute(speaker: &SpeakerEndpoint) -> SoapResult<bool> {
    let response = speaker
        .request(SonosService::RenderingControl, "GetMute")
        .arg("Channel", MASTER_CHANNEL)
        .send()
        .await?;

    extract_xml_text(&response, "CurrentMute")
        .map(|v| parse_upnp_bool(&v))
        .ok_or(SoapError::Parse)
}

/// Sets mute state on an individual speaker.
pub async fn set_speaker_mute(speaker: &SpeakerEndpoint, mute: bool) -> SoapResult<()> {
    speaker
        .request(SonosService::RenderingControl, "SetMute")
        .arg("Channel", MASTER_CHANNEL)
        .arg("DesiredMute", if mute { "1" } else { "0" })
        .send()
        .await?;

    Ok(())
}

/// Returns `true` if the speaker's output volume is locked.
///
/// Line-out devices (Connect, Port, Amp with fixed output) report a volume of
/// 100 and reject `SetVolume` while locked.
pub async fn get_output_fixed(speaker: &SpeakerEndpoint) -> SoapResult<bool> {
    let response = speaker
        .request(SonosService::RenderingControl, "GetOutputFixed")
        .send()
        .await?;

    extract_xml_text(&response, "CurrentFixed")
        .map(|v| parse_upnp_bool(&v))
        .ok_or(SoapError::Parse)
}

/// Starts a volume ramp towards `target` and returns once it is accepted.
///
/// The speaker keeps ramping on its own after the response.
pub async fn ramp_to_volume(
    speaker: &SpeakerEndpoint,
    target: u8,
    ramp_type: RampType,
) -> SoapResult<()> {
    log::info!(
        "[Sonos] RampToVolume: ip={}, target={}, ramp={}",
        speaker.ip(),
        target,
        ramp_type.as_str()
    );

    speaker
        .request(SonosService::RenderingControl, "RampToVolume")
        .arg("Channel", MASTER_CHANNEL)
        .arg("RampType", ramp_type.as_str())
        .arg("DesiredVolume", target.min(100).to_string())
        .arg("ResetVolumeAfter", "0")
        .arg("ProgramURI", "")
        .send()
        .await?;

    Ok(())
}

fn parse_upnp_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
