//! Captured SOAP response bodies shared by the parsing tests.

/// `GetMediaInfo` response for a coordinator playing its queue.
pub const MEDIA_INFO_QUEUE: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:GetMediaInfoResponse xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><NrTracks>12</NrTracks><MediaDuration>NOT_IMPLEMENTED</MediaDuration><CurrentURI>x-rincon-queue:RINCON_000E58C3892E01400#0</CurrentURI><CurrentURIMetaData></CurrentURIMetaData><NextURI></NextURI><NextURIMetaData></NextURIMetaData><PlayMedium>NETWORK</PlayMedium><RecordMedium>NOT_IMPLEMENTED</RecordMedium><WriteStatus>NOT_IMPLEMENTED</WriteStatus></u:GetMediaInfoResponse></s:Body></s:Envelope>"#;

/// `GetMediaInfo` response for a radio stream with escaped DIDL-Lite metadata.
pub const MEDIA_INFO_STREAM: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:GetMediaInfoResponse xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><NrTracks>1</NrTracks><MediaDuration>NOT_IMPLEMENTED</MediaDuration><CurrentURI>x-sonosapi-stream:s17553?sid=254&amp;flags=8224&amp;sn=0</CurrentURI><CurrentURIMetaData>&lt;DIDL-Lite xmlns:dc=&quot;http://purl.org/dc/elements/1.1/&quot;&gt;&lt;item id=&quot;-1&quot;&gt;&lt;dc:title&gt;Radio 1&lt;/dc:title&gt;&lt;/item&gt;&lt;/DIDL-Lite&gt;</CurrentURIMetaData><PlayMedium>NETWORK</PlayMedium></u:GetMediaInfoResponse></s:Body></s:Envelope>"#;

/// `GetMediaInfo` response for a speaker with nothing loaded.
pub const MEDIA_INFO_EMPTY: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetMediaInfoResponse xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><NrTracks>0</NrTracks><CurrentURI/><CurrentURIMetaData/></u:GetMediaInfoResponse></s:Body></s:Envelope>"#;

/// `GetPositionInfo` response partway through the third queue track.
pub const POSITION_INFO_TRACK_3: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetPositionInfoResponse xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><Track>3</Track><TrackDuration>0:04:01</TrackDuration><TrackMetaData></TrackMetaData><TrackURI>x-file-cifs://nas/music/track03.mp3</TrackURI><RelTime>0:02:15</RelTime><AbsTime>NOT_IMPLEMENTED</AbsTime><RelCount>2147483647</RelCount><AbsCount>2147483647</AbsCount></u:GetPositionInfoResponse></s:Body></s:Envelope>"#;

/// `GetTransportInfo` response while paused.
pub const TRANSPORT_INFO_PAUSED: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetTransportInfoResponse xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><CurrentTransportState>PAUSED_PLAYBACK</CurrentTransportState><CurrentTransportStatus>OK</CurrentTransportStatus><CurrentSpeed>1</CurrentSpeed></u:GetTransportInfoResponse></s:Body></s:Envelope>"#;

/// `GetOutputFixed` response for a line-out locked at full volume.
pub const OUTPUT_FIXED_ON: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetOutputFixedResponse xmlns:u="urn:schemas-upnp-org:service:RenderingControl:1"><CurrentFixed>1</CurrentFixed></u:GetOutputFixedResponse></s:Body></s:Envelope>"#;

/// `GetVolume` response.
pub const VOLUME_30: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetVolumeResponse xmlns:u="urn:schemas-upnp-org:service:RenderingControl:1"><CurrentVolume>30</CurrentVolume></u:GetVolumeResponse></s:Body></s:Envelope>"#;

/// SOAP fault returned when a transport change is not possible right now.
pub const SOAP_FAULT_TRANSITION: &str = r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><s:Fault><faultcode>s:Client</faultcode><faultstring>UPnPError</faultstring><detail><UPnPError xmlns="urn:schemas-upnp-org:control-1-0"><errorCode>701</errorCode></UPnPError></detail></s:Fault></s:Body></s:Envelope>"#;
