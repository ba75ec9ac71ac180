//! Error types for every stage of a fetch invocation.
//!
//! Each stage has its own enum so callers can match on exactly what went
//! wrong. [`AppError`] collects them for the binary and prefixes every
//! message with the stage that produced it (`parser:`, `client:`,
//! `output file:`).
use std::path::PathBuf;

/// Failures while sending a request or receiving its response.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("failed to read response body: {0}")]
    BodyReadFailed(#[source] reqwest::Error),
}

/// Malformed invocation options.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl ParseError {
    /// Returns true when the "error" is a request for help or version output.
    pub fn is_informational(&self) -> bool {
        match self {
            ParseError::Cli(e) => matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ),
        }
    }
}

/// Failures while writing the rendered output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Invalid fetch configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchConfigError {
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("user agent must not be empty")]
    EmptyUserAgent,
}

/// Top-level error, labelled by the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("parser: {0}")]
    Parser(#[from] ParseError),

    #[error("client: {0}")]
    Client(#[from] ExecutionError),

    #[error("output file: {0}")]
    Output(#[from] OutputError),
}
