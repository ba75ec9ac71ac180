//! Turns a [`Response`] into the text shown to the user.
//!
//! The layout is:
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json      (only with headers enabled)
//! Set-Cookie: a=1, b=2
//!
//! Data:
//! <body>
//! ```
//!
//! Rendering never fails. A body that should be pretty-printed but is not
//! valid JSON is logged as a warning and shown unchanged.
use crate::net::Response;

pub mod json;

/// Separates the status/header block from the body.
pub const BODY_MARKER: &str = "\nData:\n";

/// What to include in the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit one line per header name
    pub include_headers: bool,
    /// Re-indent JSON bodies
    pub pretty_json: bool,
}

/// Renders `resp` with the given flags.
pub fn render(resp: &Response, include_headers: bool, pretty_json: bool) -> String {
    render_with(
        resp,
        RenderOptions {
            include_headers,
            pretty_json,
        },
    )
}

pub fn render_with(resp: &Response, opts: RenderOptions) -> String {
    let mut out = format!("{} {}\n", resp.protocol_version, resp.status_line);

    if opts.include_headers {
        for (name, values) in resp.headers.iter() {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&values.join(", "));
            out.push('\n');
        }
    }

    out.push_str(BODY_MARKER);
    out.push_str(&render_body(&resp.body, opts.pretty_json));
    out
}

fn render_body(body: &[u8], pretty_json: bool) -> String {
    if pretty_json {
        match json::pretty_print(body) {
            Ok(pretty) => return pretty,
            Err(e) => log::warn!("failed to parse JSON for pretty-printing: {e}"),
        }
    }
    String::from_utf8_lossy(body).into_owned()
}
