//! Wire framing for the AVR control protocol
//!
//! The receiver accepts a pseudo-HTTP POST: a fixed header block followed
//! directly by the XML body, without the blank line HTTP would require.

use crate::error::TransportError;

/// Host header sent with every request.
///
/// This is a fixed address and is not derived from the connection target.
/// Receivers seen so far ignore it.
pub const HOST_HEADER: &str = "10.21.219.218:10025";

/// User-Agent header sent with every request
pub const USER_AGENT: &str = "Harman Kardon AVR Remote Controller /2.0";

/// Start of the XML document inside a reply
pub const XML_MARKER: &str = "<?xml";

/// Frame a request body for the wire
pub fn frame_request(payload: &str) -> String {
    format!(
        "\r\nPOST AVR HTTP/1.1\r\nHost: {}\r\nUser-Agent: {}\r\nContent-Length: {}\r\n{}",
        HOST_HEADER,
        USER_AGENT,
        payload.len(),
        payload
    )
}

/// Slice a raw reply to start at the first XML marker
///
/// Everything before the marker is discarded; everything after it is kept,
/// including any trailing bytes.
pub fn extract_xml(raw: &[u8]) -> Result<String, TransportError> {
    let marker = XML_MARKER.as_bytes();
    let start = raw
        .windows(marker.len())
        .position(|window| window == marker)
        .ok_or_else(|| {
            TransportError::MalformedResponse(format!(
                "no XML document in {} byte reply",
                raw.len()
            ))
        })?;

    Ok(String::from_utf8_lossy(&raw[start..]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_request_layout() {
        let framed = frame_request("<x/>");
        assert_eq!(
            framed,
            "\r\nPOST AVR HTTP/1.1\r\n\
             Host: 10.21.219.218:10025\r\n\
             User-Agent: Harman Kardon AVR Remote Controller /2.0\r\n\
             Content-Length: 4\r\n\
             <x/>"
        );
    }

    #[test]
    fn test_frame_request_counts_bytes_not_chars() {
        // "Zoné" is 4 chars but 5 bytes
        let framed = frame_request("Zoné");
        assert!(framed.contains("Content-Length: 5\r\nZoné"));
    }

    #[test]
    fn test_frame_request_has_no_blank_line_before_body() {
        let framed = frame_request("<x/>");
        assert!(!framed.contains("\r\n\r\n"));
    }

    #[test]
    fn test_extract_xml_discards_prefix() {
        let raw = b"garbage<?xml version=\"1.0\"?><ok/>tail";
        assert_eq!(
            extract_xml(raw).unwrap(),
            "<?xml version=\"1.0\"?><ok/>tail"
        );
    }

    #[test]
    fn test_extract_xml_uses_first_marker() {
        let raw = b"HTTP/1.1 200 OK\r\n<?xml a?><one/><?xml b?><two/>";
        assert_eq!(extract_xml(raw).unwrap(), "<?xml a?><one/><?xml b?><two/>");
    }

    #[test]
    fn test_extract_xml_without_marker() {
        let result = extract_xml(b"HTTP/1.1 200 OK\r\n");
        match result.unwrap_err() {
            TransportError::MalformedResponse(msg) => assert!(msg.contains("17 byte")),
            _ => panic!("Expected TransportError::MalformedResponse"),
        }
    }

    #[test]
    fn test_extract_xml_short_input() {
        assert!(extract_xml(b"<?x").is_err());
    }
}
