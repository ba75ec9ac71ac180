//! In-process HTTP/1.1 server used by the fetcher tests.
//!
//! Every connection gets the same canned response. The parsed request is
//! sent back to the test through a channel before the response is written,
//! so tests can assert on exactly what went over the wire.
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// A request as the server saw it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// All values received for `name`, matched case-insensitively.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

pub(crate) struct TestServer {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<RecordedRequest>,
}

impl TestServer {
    pub async fn start(response: Vec<u8>) -> anyhow::Result<Self> {
        Self::start_with_delay(response, Duration::ZERO).await
    }

    /// Like [`start`](Self::start) but waits `delay` before answering.
    pub async fn start_with_delay(response: Vec<u8>, delay: Duration) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let tx = tx.clone();
                let response = response.clone();
                tokio::spawn(async move {
                    if let Err(e) = serve(stream, &response, delay, tx).await {
                        log::debug!("test server connection ended: {e}");
                    }
                });
            }
        });

        Ok(Self { addr, requests: rx })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Waits for the next request the server received.
    pub async fn recorded(&mut self) -> RecordedRequest {
        self.requests.recv().await.expect("server recorded no request")
    }
}

/// Builds a complete HTTP/1.1 response with a correct `Content-Length`.
pub(crate) fn raw_response(status: &str, headers: &[(&str, &str)], body: &str) -> Vec<u8> {
    let mut out = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str(&format!("Content-Length: {}\r\nConnection: close\r\n\r\n", body.len()));
    out.push_str(body);
    out.into_bytes()
}

async fn serve(
    stream: TcpStream,
    response: &[u8],
    delay: Duration,
    tx: mpsc::UnboundedSender<RecordedRequest>,
) -> anyhow::Result<()> {
    let mut reader = BufReader::new(stream);

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    let mut parts = line.split_whitespace();
    let method = parts.next().context("missing method")?.to_string();
    let target = parts.next().context("missing request target")?.to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            bail!("connection closed inside header block");
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        let (name, value) = trimmed.split_once(':').context("malformed header line")?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map(|(_, v)| v.parse::<usize>())
        .transpose()?
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).await?;

    let _ = tx.send(RecordedRequest { method, target, headers, body });

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut stream = reader.into_inner();
    stream.write_all(response).await?;
    stream.shutdown().await?;
    Ok(())
}
