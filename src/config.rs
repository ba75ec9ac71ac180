//! Fetch configuration.
//!
//! `FetchConfig` controls how the [`Fetcher`](crate::net::Fetcher) talks to
//! the network. The defaults match what the command-line tool uses; the
//! builder exists for embedders and tests.
//!
//! ```rust
//! use std::time::Duration;
//! use gosub_fetch::config::FetchConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .timeout(Duration::from_secs(3))
//!     .user_agent("my-tool/1.0")
//!     .build()?;
//! assert_eq!(cfg.timeout, Duration::from_secs(3));
//! # Ok(()) }
//! ```
use std::time::Duration;

use crate::errors::FetchConfigError;

/// Upper bound for a whole round trip: connect, send, and receive the full body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("gosub-fetch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Timeout applied to the complete request/response exchange
    pub timeout: Duration,
    /// User agent sent when the caller does not set one explicitly
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn timeout(self, timeout: Duration) -> Self { self.map(|c| c.timeout = timeout) }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, FetchConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

fn validate(c: &FetchConfig) -> Result<(), FetchConfigError> {
    if c.timeout.is_zero() {
        return Err(FetchConfigError::ZeroTimeout);
    }
    if c.user_agent.trim().is_empty() {
        return Err(FetchConfigError::EmptyUserAgent);
    }
    Ok(())
}
