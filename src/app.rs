//! Drives one invocation: options, request, rendering, output.
use std::ffi::OsString;

use crate::cli::Options;
use crate::errors::AppError;
use crate::net::Fetcher;
use crate::output::OutputSink;
use crate::render;

/// Executes the request described by `opts` and returns the rendered text.
pub async fn fetch_and_render(opts: &Options, fetcher: &Fetcher) -> Result<String, AppError> {
    let resp = fetcher.execute(&opts.request_spec()).await?;
    Ok(render::render_with(&resp, opts.render_options()))
}

/// Runs a full invocation for `args` (program name first).
///
/// Nothing is written to the sink unless the request and rendering both
/// succeeded.
pub async fn run<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let opts = Options::parse_from(args)?;
    let text = fetch_and_render(&opts, &Fetcher::default()).await?;

    let sink = OutputSink::from_path(opts.output.as_deref());
    sink.write(&text)?;

    if let OutputSink::File(path) = &sink {
        println!("Output written to {}", path.display());
    }

    Ok(())
}
