pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod net;
pub mod output;
pub mod render;

pub use config::{FetchConfig, DEFAULT_TIMEOUT};
pub use errors::{AppError, ExecutionError, OutputError, ParseError};
pub use net::{fetch, Fetcher, Headers, RequestSpec, Response};
pub use render::{render, render_with, RenderOptions};
