//! Low-level SOAP protocol implementation for UPnP/Sonos communication.
//!
//! This module handles the raw SOAP envelope building, HTTP transport,
//! and fault detection. For the typed zone player commands, see
//! `playback.rs` and `volume.rs`.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::services::SonosService;
use super::utils::{build_sonos_url, escape_xml, extract_xml_text};
use crate::protocol_constants::{INSTANCE_ID, SOAP_TIMEOUT_SECS};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during SOAP operations with Sonos speakers.
#[derive(Debug, Error)]
pub enum SoapError {
    /// HTTP request to the speaker failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Speaker returned a non-success HTTP status without a SOAP fault.
    #[error("HTTP error {0}: {1}")]
    HttpStatus(u16, String),

    /// Speaker returned a SOAP fault response.
    #[error("SOAP fault: {0}")]
    Fault(String),

    /// Failed to parse SOAP response XML.
    #[error("Failed to parse SOAP response")]
    Parse,
}

/// Convenient Result alias for SOAP operations.
pub type SoapResult<T> = Result<T, SoapError>;

impl SoapError {
    /// Returns true if this error is transient and the operation should be retried.
    ///
    /// Transient Sonos SOAP fault codes:
    /// - 701: Transition not available (device changing states)
    /// - 714: Illegal seek target (previous source still loading)
    /// - 716: Resource not found (device busy initializing)
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SoapError::Fault(msg) => {
                msg.contains("701")
                    || msg.contains("714")
                    || msg.contains("716")
                    || msg.to_lowercase().contains("transition")
            }
            SoapError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SOAP Request/Response
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the SOAP envelope for an action.
///
/// Must be a single line with no leading whitespace; Sonos rejects XML with
/// whitespace before the root element.
fn build_envelope(service: &str, action: &str, args: &[(&str, &str)]) -> String {
    let mut body = format!(
        r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:{} xmlns:u="{}">"#,
        action, service
    );

    for (k, v) in args {
        body.push_str(&format!("<{k}>{}</{k}>", escape_xml(v)));
    }

    body.push_str(&format!(r#"</u:{}></s:Body></s:Envelope>"#, action));
    body
}

/// Sends a SOAP request to a Sonos speaker.
///
/// # Arguments
/// * `client` - The HTTP client to use for the request
/// * `ip` - IP address of the Sonos speaker
/// * `endpoint` - The control URL path (e.g., "/MediaRenderer/AVTransport/Control")
/// * `service` - The UPnP service URN
/// * `action` - The SOAP action name (e.g., "Play", "GetMediaInfo")
/// * `args` - Key-value pairs for action arguments (order is preserved)
/// * `timeout` - Per-request timeout
///
/// # Returns
/// The response body on success, or a `SoapError` if the request fails
/// or the speaker returns a SOAP fault.
pub async fn send_soap_request(
    client: &Client,
    ip: &str,
    endpoint: &str,
    service: &str,
    action: &str,
    args: &[(&str, &str)],
    timeout: Duration,
) -> SoapResult<String> {
    let url = build_sonos_url(ip, endpoint);
    let body = build_envelope(service, action, args);

    log::info!("[SOAP] {} -> {} (body: {} bytes)", action, url, body.len());
    log::debug!("[SOAP] Request body: {}", body);

    let start = std::time::Instant::now();
    let res = client
        .post(&url)
        .header("Content-Type", "text/xml; charset=\"utf-8\"")
        .header("SOAPAction", format!("\"{}#{}\"", service, action))
        .body(body)
        .timeout(timeout)
        .send()
        .await;

    log::info!(
        "[SOAP] {} completed in {:?}: {:?}",
        action,
        start.elapsed(),
        res.as_ref().map(|r| r.status())
    );

    let res = res?;

    let status = res.status();
    let response_text = res.text().await?;

    // SOAP faults usually arrive with a 500 status, so check them first
    if response_text.contains("<s:Fault>") || response_text.contains("<soap:Fault>") {
        let fault_msg = extract_fault(&response_text)
            .unwrap_or_else(|| "Unknown SOAP fault".to_string());
        return Err(SoapError::Fault(fault_msg));
    }

    if !status.is_success() {
        return Err(SoapError::HttpStatus(status.as_u16(), response_text));
    }

    Ok(response_text)
}

/// Extracts a fault description, preferring the UPnP error code.
///
/// Sonos puts a generic "UPnPError" in `faultstring` and the useful numeric
/// code in `detail/UPnPError/errorCode`.
fn extract_fault(xml: &str) -> Option<String> {
    let fault_string = extract_xml_text(xml, "faultstring");
    match extract_xml_text(xml, "errorCode") {
        Some(code) => Some(format!(
            "{} (errorCode {})",
            fault_string.as_deref().unwrap_or("UPnPError"),
            code
        )),
        None => fault_string,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SOAP Request Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for constructing and sending SOAP requests to Sonos speakers.
///
/// # Example
/// ```ignore
/// let response = SoapRequestBuilder::new(&client, "192.168.1.100")
///     .service(SonosService::AVTransport)
///     .action("Play")
///     .instance_id()
///     .arg("Speed", "1")
///     .send()
///     .await?;
/// ```
pub struct SoapRequestBuilder<'a> {
    client: &'a Client,
    ip: &'a str,
    service: Option<SonosService>,
    action: Option<&'a str>,
    args: Vec<(&'a str, String)>,
    timeout: Duration,
}

impl<'a> SoapRequestBuilder<'a> {
    /// Creates a new SOAP request builder with the default timeout.
    #[must_use]
    pub fn new(client: &'a Client, ip: &'a str) -> Self {
        Self {
            client,
            ip,
            service: None,
            action: None,
            args: Vec::new(),
            timeout: Duration::from_secs(SOAP_TIMEOUT_SECS),
        }
    }

    /// Sets the Sonos service for this request.
    #[must_use]
    pub fn service(mut self, service: SonosService) -> Self {
        self.service = Some(service);
        self
    }

    /// Sets the SOAP action name.
    #[must_use]
    pub fn action(mut self, action: &'a str) -> Self {
        self.action = Some(action);
        self
    }

    /// Adds an argument to the SOAP request.
    ///
    /// Arguments are included in the SOAP body in the order they are added.
    #[must_use]
    pub fn arg(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.args.push((key, value.into()));
        self
    }

    /// Adds the standard InstanceID="0" argument used by most Sonos actions.
    #[must_use]
    pub fn instance_id(self) -> Self {
        self.arg("InstanceID", INSTANCE_ID)
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the SOAP request and returns the response body.
    ///
    /// # Errors
    /// Returns `SoapError` if the service or action is not set, or if the
    /// request fails.
    pub async fn send(self) -> SoapResult<String> {
        let service = self
            .service
            .ok_or_else(|| SoapError::Fault("SoapRequestBuilder: service not set".into()))?;
        let action = self
            .action
            .ok_or_else(|| SoapError::Fault("SoapRequestBuilder: action not set".into()))?;

        let args: Vec<(&str, &str)> = self.args.iter().map(|(k, v)| (*k, v.as_str())).collect();

        send_soap_request(
            self.client,
            self.ip,
            service.control_path(),
            service.urn(),
            action,
            &args,
            self.timeout,
        )
        .await
    }

    /// Returns the request parts without sending (for testing).
    #[cfg(test)]
    pub fn into_parts(self) -> Option<(SonosService, &'a str, Vec<(&'a str, String)>)> {
        let service = self.service?;
        let action = self.action?;
        Some((service, action, self.args))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Speaker Endpoint
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client, address and timeout for one speaker.
#[derive(Debug, Clone)]
pub struct SpeakerEndpoint {
    client: Client,
    ip: String,
    timeout: Duration,
}

impl SpeakerEndpoint {
    /// Creates an endpoint for the speaker at `ip`.
    #[must_use]
    pub fn new(client: Client, ip: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            ip: ip.into(),
            timeout,
        }
    }

    /// IP address of the speaker.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Starts a request for `action` on `service`, with InstanceID already set.
    #[must_use]
    pub fn request(&self, service: SonosService, action: &'static str) -> SoapRequestBuilder<'_> {
        SoapRequestBuilder::new(&self.client, &self.ip)
            .service(service)
            .action(action)
            .timeout(self.timeout)
            .instance_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonos::test_fixtures::SOAP_FAULT_TRANSITION;

    fn test_client() -> Client {
        Client::new()
    }

    #[test]
    fn builder_captures_args_in_order() {
        let client = test_client();
        let parts = SoapRequestBuilder::new(&client, "192.168.1.100")
            .service(SonosService::AVTransport)
            .action("Seek")
            .instance_id()
            .arg("Unit", "TRACK_NR")
            .arg("Target", "3")
            .into_parts();

        let (service, action, args) = parts.expect("should have parts");
        assert_eq!(service, SonosService::AVTransport);
        assert_eq!(action, "Seek");
        assert_eq!(args[0], ("InstanceID", "0".to_string()));
        assert_eq!(args[1], ("Unit", "TRACK_NR".to_string()));
        assert_eq!(args[2], ("Target", "3".to_string()));
    }

    #[test]
    fn into_parts_returns_none_without_service() {
        let client = test_client();
        let parts = SoapRequestBuilder::new(&client, "192.168.1.100")
            .action("GetVolume")
            .into_parts();

        assert!(parts.is_none());
    }

    #[test]
    fn envelope_escapes_argument_values() {
        let body = build_envelope(
            SonosService::AVTransport.urn(),
            "SetAVTransportURI",
            &[("CurrentURI", "x-rincon-queue:RINCON_1#0"), ("CurrentURIMetaData", "<a>&</a>")],
        );

        assert!(body.starts_with("<?xml"));
        assert!(body.contains("<CurrentURI>x-rincon-queue:RINCON_1#0</CurrentURI>"));
        assert!(body.contains("<CurrentURIMetaData>&lt;a&gt;&amp;&lt;/a&gt;</CurrentURIMetaData>"));
        assert!(body.ends_with("</u:SetAVTransportURI></s:Body></s:Envelope>"));
    }

    #[test]
    fn fault_includes_upnp_error_code() {
        let fault = extract_fault(SOAP_FAULT_TRANSITION).expect("fault parsed");
        assert_eq!(fault, "UPnPError (errorCode 701)");
        assert!(SoapError::Fault(fault).is_transient());
    }

    #[test]
    fn parse_error_is_not_transient() {
        assert!(!SoapError::Parse.is_transient());
        assert!(!SoapError::HttpStatus(500, String::new()).is_transient());
    }
}
