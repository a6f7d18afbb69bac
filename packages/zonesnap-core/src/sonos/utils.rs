//! XML and URL helpers shared by the SOAP layer.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::protocol_constants::SONOS_PORT;

/// Extracts text content from the first occurrence of an XML element.
///
/// Searches for an element by its local name (ignoring namespace prefixes)
/// and returns its decoded text content. Self-closing elements
/// (`<CurrentURIMetaData/>`) yield `None`.
///
/// # Example
/// ```ignore
/// let xml = r#"<u:CurrentVolume>42</u:CurrentVolume>"#;
/// assert_eq!(extract_xml_text(xml, "CurrentVolume"), Some("42".to_string()));
/// ```
pub fn extract_xml_text(xml: &str, element_name: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let target_bytes = element_name.as_bytes();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == target_bytes => {
                if let Ok(text) = reader.read_text(e.name()) {
                    let decoded = html_escape::decode_html_entities(&text);
                    return Some(decoded.to_string());
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    None
}

/// Builds a Sonos speaker URL for the given IP and endpoint.
pub fn build_sonos_url(ip: &str, endpoint: &str) -> String {
    format!("http://{}:{}{}", ip, SONOS_PORT, endpoint)
}

/// Escapes XML special characters for embedding in XML content.
///
/// Transport URIs and DIDL-Lite metadata captured from a device are sent back
/// verbatim, so all five special characters are escaped.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_xml("Tom & Jerry"), "Tom &amp; Jerry");
/// ```
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
