//! Command-line options.
//!
//! [`Options::parse_from`] turns an argument list into a structured value
//! without touching any process-wide state, so it can be called repeatedly
//! (and in parallel) from tests.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::errors::ParseError;
use crate::net::{Headers, RequestSpec};
use crate::render::RenderOptions;

/// Send one HTTP request and print the response
#[derive(Debug, Parser)]
#[command(name = "gosub-fetch", version)]
struct Args {
    /// HTTP method to use
    #[arg(short = 'X', long = "method", default_value = "GET")]
    method: String,

    /// Custom header to include in the request ("Name: value"), may be repeated
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Data to include in the request body
    #[arg(short = 'd', long = "data", default_value = "")]
    body: String,

    /// Include response headers in the output
    #[arg(short = 'i', long = "include")]
    include_headers: bool,

    /// Pretty-print JSON responses
    #[arg(long = "json")]
    pretty_json: bool,

    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// URL to request
    url: String,
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub url: String,
    pub method: String,
    pub headers: Headers,
    pub body: String,
    pub include_headers: bool,
    pub pretty_json: bool,
    pub output: Option<PathBuf>,
}

impl Options {
    /// Parses `args`; the first item is the program name.
    pub fn parse_from<I, T>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;

        Ok(Self {
            url: args.url,
            method: args.method,
            headers: parse_headers(&args.headers),
            body: args.body,
            include_headers: args.include_headers,
            pretty_json: args.pretty_json,
            output: args.output,
        })
    }

    pub fn request_spec(&self) -> RequestSpec {
        RequestSpec {
            url: self.url.clone(),
            method: self.method.clone(),
            headers: self.headers.clone(),
            body: self.body.clone().into_bytes(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_headers: self.include_headers,
            pretty_json: self.pretty_json,
        }
    }
}

/// Builds a header map from `"Name: value"` tokens. Tokens without a colon
/// or with an empty name are skipped with a warning.
pub fn parse_headers<S: AsRef<str>>(raw: &[S]) -> Headers {
    let mut headers = Headers::new();

    for token in raw {
        let token = token.as_ref();
        let Some((name, value)) = token.split_once(':') else {
            log::warn!("invalid header format, skipping: {token}");
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            log::warn!("invalid header format, skipping: {token}");
            continue;
        }

        headers.append(name, value.trim());
    }

    headers
}
