use std::process::ExitCode;

use gosub_fetch::errors::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match gosub_fetch::app::run(std::env::args_os()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Parser(e)) if e.is_informational() => {
            // --help / --version
            print!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", one_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Usage errors from the argument parser span several lines.
fn one_line(msg: &str) -> String {
    msg.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
