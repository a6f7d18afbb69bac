//! Elapsed-time strings as exchanged with AVTransport.

/// Pads the leading unit of an elapsed time to two digits.
///
/// `GetPositionInfo` reports `RelTime` as "H:MM:SS" but a `REL_TIME` seek
/// needs "HH:MM:SS". Anything that does not start with a single digit unit
/// (already padded, "NOT_IMPLEMENTED", empty) is returned unchanged.
///
/// ```
/// use zonesnap_core::snapshot::normalize_rel_time;
///
/// assert_eq!(normalize_rel_time("0:02:15"), "00:02:15");
/// assert_eq!(normalize_rel_time("01:02:15"), "01:02:15");
/// ```
#[must_use]
pub fn normalize_rel_time(position: &str) -> String {
    match position.split_once(':') {
        Some((lead, rest)) if lead.len() == 1 && lead.bytes().all(|b| b.is_ascii_digit()) => {
            format!("0{}:{}", lead, rest)
        }
        _ => position.to_string(),
    }
}
