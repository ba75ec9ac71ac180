use std::time::Duration;

use http::{HeaderName, HeaderValue, Method};
use url::Url;

use crate::config::FetchConfig;
use crate::errors::ExecutionError;
use crate::net::response::{protocol_name, status_line};
use crate::net::{Headers, RequestSpec, Response};

/// Sends single requests and turns the answers into [`Response`] values.
///
/// Every call to [`execute`](Self::execute) builds its own transport client
/// without an idle pool, so no connection outlives the call that opened it.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Sends `spec` once and buffers the complete response.
    ///
    /// The whole exchange (connect, send, read the full body) must finish
    /// within the configured timeout. Nothing is retried.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Response, ExecutionError> {
        let url = parse_url(&spec.url)?;
        let method = parse_method(spec.effective_method())?;
        let headers = header_pairs(&spec.headers)?;

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ExecutionError::ConnectionFailed)?;

        let mut req = client.request(method.clone(), url.clone());
        for (name, value) in headers {
            req = req.header(name, value);
        }
        if !spec.body.is_empty() {
            req = req.body(spec.body.clone());
        }

        log::debug!(
            "{method} {url} ({} header(s), {} byte body)",
            spec.headers.len(),
            spec.body.len()
        );

        let timeout = self.config.timeout;
        match tokio::time::timeout(timeout, exchange(req, timeout)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ExecutionError::Timeout(timeout)),
        }
    }
}

/// Sends `spec` with the default configuration.
pub async fn fetch(spec: &RequestSpec) -> Result<Response, ExecutionError> {
    Fetcher::default().execute(spec).await
}

async fn exchange(
    req: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<Response, ExecutionError> {
    let res = req.send().await.map_err(|e| {
        if e.is_timeout() {
            ExecutionError::Timeout(timeout)
        } else if e.is_builder() {
            ExecutionError::InvalidUrl {
                url: e.url().map(Url::to_string).unwrap_or_default(),
                reason: e.to_string(),
            }
        } else {
            ExecutionError::ConnectionFailed(e)
        }
    })?;

    let protocol_version = protocol_name(res.version());
    let reason = res.extensions().get::<hyper::ext::ReasonPhrase>();
    let status_line = status_line(res.status(), reason.map(|r| r.as_bytes()));
    let headers = Headers::from(res.headers());

    // Consuming the response releases the connection whether or not the read succeeds
    let body = res.bytes().await.map_err(|e| {
        if e.is_timeout() {
            ExecutionError::Timeout(timeout)
        } else {
            ExecutionError::BodyReadFailed(e)
        }
    })?;

    log::debug!("{protocol_version} {status_line}, {} byte body", body.len());

    Ok(Response {
        protocol_version,
        status_line,
        headers,
        body: body.to_vec(),
    })
}

fn parse_url(raw: &str) -> Result<Url, ExecutionError> {
    let invalid = |reason: String| ExecutionError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    if raw.trim().is_empty() {
        return Err(invalid("URL is empty".into()));
    }
    // The URL parser silently strips some control characters; refuse them instead
    if raw.chars().any(char::is_control) {
        return Err(invalid("URL contains control characters".into()));
    }

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

fn parse_method(raw: &str) -> Result<Method, ExecutionError> {
    Method::from_bytes(raw.as_bytes()).map_err(|_| ExecutionError::InvalidMethod(raw.to_string()))
}

fn header_pairs(headers: &Headers) -> Result<Vec<(HeaderName, HeaderValue)>, ExecutionError> {
    headers
        .pairs()
        .map(|(name, value)| -> Result<(HeaderName, HeaderValue), ExecutionError> {
            let invalid = |reason: String| ExecutionError::InvalidHeader {
                name: name.to_string(),
                reason,
            };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            Ok((name, value))
        })
        .collect()
}
