//! Normalized HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by the
//! network layer. By the time a caller sees it, the body has been read to the
//! end and the connection released, so it can be inspected or rendered
//! without touching the transport again.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. For text responses, convert with
//!   `String::from_utf8_lossy(&resp.body)`. For JSON, parse with
//!   `serde_json::from_slice(&resp.body)`.
//! - `headers` is a [`Headers`] map with canonical names, so
//!   `resp.header("content-type")` and `resp.header("Content-Type")` agree.
//! - `status_line` is the numeric code followed by the reason phrase the
//!   server sent (e.g. `"404 Not Found"`, `"299 Custom Thing"`). When the
//!   server sent none, the canonical phrase is used, or just the code for
//!   non-standard statuses.
use crate::net::Headers;

/// Snapshot of a completed HTTP response, independent of the transport crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Protocol the response arrived over (e.g., `"HTTP/1.1"`, `"HTTP/2.0"`).
    pub protocol_version: String,

    /// Status code and reason phrase (e.g., `"200 OK"`).
    pub status_line: String,

    /// Response headers; repeated names keep their arrival order.
    pub headers: Headers,

    /// Raw response body bytes, empty when the server sent no content.
    pub body: Vec<u8>,
}

impl Response {
    /// Numeric status code parsed from the status line.
    pub fn status_code(&self) -> Option<u16> {
        self.status_line.split_whitespace().next()?.parse().ok()
    }

    /// First value of the header `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

pub(crate) fn protocol_name(version: http::Version) -> String {
    match version {
        http::Version::HTTP_09 => "HTTP/0.9".into(),
        http::Version::HTTP_10 => "HTTP/1.0".into(),
        http::Version::HTTP_11 => "HTTP/1.1".into(),
        http::Version::HTTP_2 => "HTTP/2.0".into(),
        http::Version::HTTP_3 => "HTTP/3.0".into(),
        other => format!("{other:?}"),
    }
}

/// Builds `"{code} {reason}"`. `reason` is the phrase received on the wire,
/// which the HTTP/1 client only records when it differs from the canonical one.
pub(crate) fn status_line(status: http::StatusCode, reason: Option<&[u8]>) -> String {
    let reason = match reason {
        Some(raw) => String::from_utf8_lossy(raw).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    };

    if reason.is_empty() {
        status.as_str().to_string()
    } else {
        format!("{} {}", status.as_str(), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_falls_back_to_canonical_reason() {
        assert_eq!(status_line(http::StatusCode::OK, None), "200 OK");
        assert_eq!(status_line(http::StatusCode::CREATED, None), "201 Created");
        assert_eq!(status_line(http::StatusCode::from_u16(599).unwrap(), None), "599");
    }

    #[test]
    fn status_line_prefers_received_reason() {
        assert_eq!(
            status_line(http::StatusCode::OK, Some(&b"Everything Fine"[..])),
            "200 Everything Fine"
        );
        assert_eq!(
            status_line(http::StatusCode::from_u16(299).unwrap(), Some(&b"Custom Thing"[..])),
            "299 Custom Thing"
        );
    }

    #[test]
    fn protocol_names() {
        assert_eq!(protocol_name(http::Version::HTTP_11), "HTTP/1.1");
        assert_eq!(protocol_name(http::Version::HTTP_2), "HTTP/2.0");
    }

    #[test]
    fn status_code_and_header_lookup() {
        let mut resp = Response {
            protocol_version: "HTTP/1.1".into(),
            status_line: "404 Not Found".into(),
            ..Default::default()
        };
        resp.headers.append("content-type", "text/plain");

        assert_eq!(resp.status_code(), Some(404));
        assert_eq!(resp.header("Content-Type"), Some("text/plain"));
        assert!(resp.body.is_empty());
    }
}
