//! In-memory zone player for engine tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::DeviceCommand;
use crate::sonos::soap::{SoapError, SoapResult};
use crate::sonos::traits::ZonePlayer;
use crate::sonos::types::{MediaInfo, TrackInfo, TransportState};

/// A command as received by the simulated device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetMute,
    SetMute(bool),
    GetVolume,
    SetVolume(u8),
    GetOutputFixed,
    RampToVolume(u8),
    GetMediaInfo,
    GetCurrentTrackInfo,
    GetTransportState,
    SetTransportUri(String, String),
    SeekTrackNumber(u32),
    SeekRelativeTime(String),
    Play,
}

impl Call {
    fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::SetMute(_)
                | Self::SetVolume(_)
                | Self::RampToVolume(_)
                | Self::SetTransportUri(..)
                | Self::SeekTrackNumber(_)
                | Self::SeekRelativeTime(_)
                | Self::Play
        )
    }
}

/// Observable state of the simulated device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    pub mute: bool,
    pub volume: u8,
    pub output_fixed: bool,
    pub uri: String,
    pub metadata: String,
    pub track: u32,
    pub position: String,
    pub transport_state: TransportState,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            mute: false,
            volume: 25,
            output_fixed: false,
            uri: String::new(),
            metadata: String::new(),
            track: 0,
            position: "0:00:00".to_string(),
            transport_state: TransportState::Stopped,
        }
    }
}

/// Zone player that keeps its state in memory and records every call.
pub struct SimulatedZonePlayer {
    state: Mutex<DeviceState>,
    calls: Mutex<Vec<Call>>,
    fail_on: Option<DeviceCommand>,
}

impl SimulatedZonePlayer {
    pub fn new(state: DeviceState) -> Self {
        Self {
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Makes every `command` fail with a SOAP fault.
    pub fn failing_on(mut self, command: DeviceCommand) -> Self {
        self.fail_on = Some(command);
        self
    }

    pub fn state(&self) -> DeviceState {
        self.state.lock().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Recorded calls that change the device.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: Call, command: DeviceCommand) -> SoapResult<()> {
        self.calls.lock().push(call);
        if self.fail_on == Some(command) {
            return Err(SoapError::Fault(format!("UPnPError (errorCode 800) in {}", command)));
        }
        Ok(())
    }
}

#[async_trait]
impl ZonePlayer for SimulatedZonePlayer {
    async fn get_mute(&self) -> SoapResult<bool> {
        self.record(Call::GetMute, DeviceCommand::GetMute)?;
        Ok(self.state.lock().mute)
    }

    async fn set_mute(&self, mute: bool) -> SoapResult<()> {
        self.record(Call::SetMute(mute), DeviceCommand::SetMute)?;
        self.state.lock().mute = mute;
        Ok(())
    }

    async fn get_volume(&self) -> SoapResult<u8> {
        self.record(Call::GetVolume, DeviceCommand::GetVolume)?;
        let state = self.state.lock();
        Ok(if state.output_fixed { 100 } else { state.volume })
    }

    async fn set_volume(&self, volume: u8) -> SoapResult<()> {
        self.record(Call::SetVolume(volume), DeviceCommand::SetVolume)?;
        self.state.lock().volume = volume.min(100);
        Ok(())
    }

    async fn get_output_fixed(&self) -> SoapResult<bool> {
        self.record(Call::GetOutputFixed, DeviceCommand::GetOutputFixed)?;
        Ok(self.state.lock().output_fixed)
    }

    async fn ramp_to_volume(&self, target: u8) -> SoapResult<()> {
        // Target is recorded; the simulated ramp finishes instantly
        self.record(Call::RampToVolume(target), DeviceCommand::RampToVolume)?;
        self.state.lock().volume = target.min(100);
        Ok(())
    }

    async fn get_media_info(&self) -> SoapResult<MediaInfo> {
        self.record(Call::GetMediaInfo, DeviceCommand::GetMediaInfo)?;
        let state = self.state.lock();
        Ok(MediaInfo {
            current_uri: state.uri.clone(),
            current_uri_metadata: state.metadata.clone(),
        })
    }

    async fn get_current_track_info(&self) -> SoapResult<TrackInfo> {
        self.record(Call::GetCurrentTrackInfo, DeviceCommand::GetCurrentTrackInfo)?;
        let state = self.state.lock();
        Ok(TrackInfo {
            playlist_position: state.track,
            position: state.position.clone(),
        })
    }

    async fn get_transport_state(&self) -> SoapResult<TransportState> {
        self.record(Call::GetTransportState, DeviceCommand::GetTransportState)?;
        Ok(self.state.lock().transport_state)
    }

    async fn set_transport_uri(&self, uri: &str, metadata: &str) -> SoapResult<()> {
        self.record(
            Call::SetTransportUri(uri.to_string(), metadata.to_string()),
            DeviceCommand::SetTransportUri,
        )?;
        let mut state = self.state.lock();
        state.uri = uri.to_string();
        state.metadata = metadata.to_string();
        state.track = 1;
        state.position = "0:00:00".to_string();
        state.transport_state = TransportState::Stopped;
        Ok(())
    }

    async fn seek_track_number(&self, track: u32) -> SoapResult<()> {
        self.record(Call::SeekTrackNumber(track), DeviceCommand::SeekTrackNumber)?;
        self.state.lock().track = track;
        Ok(())
    }

    async fn seek_relative_time(&self, time: &str) -> SoapResult<()> {
        self.record(
            Call::SeekRelativeTime(time.to_string()),
            DeviceCommand::SeekRelativeTime,
        )?;
        self.state.lock().position = time.to_string();
        Ok(())
    }

    async fn play(&self) -> SoapResult<()> {
        self.record(Call::Play, DeviceCommand::Play)?;
        self.state.lock().transport_state = TransportState::Playing;
        Ok(())
    }
}
