//! Network layer: describing a request, sending it, and the buffered response.
mod fetch;
mod headers;
mod request;
mod response;

#[cfg(test)]
pub(crate) mod test_server;

pub use fetch::{fetch, Fetcher};
pub use headers::{canonical_name, Headers};
pub use request::RequestSpec;
pub use response::Response;
