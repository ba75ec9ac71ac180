//! Where the rendered text ends up.
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::OutputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output, followed by a trailing newline
    Stdout,
    /// A file that is created or truncated, content written verbatim
    File(PathBuf),
}

impl OutputSink {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => OutputSink::File(p.to_path_buf()),
            None => OutputSink::Stdout,
        }
    }

    pub fn write(&self, content: &str) -> Result<(), OutputError> {
        match self {
            OutputSink::Stdout => {
                let stdout = std::io::stdout();
                write_line(&mut stdout.lock(), content)
            }
            OutputSink::File(path) => write_file(path, content),
        }
    }
}

/// Writes `content` plus a newline to `w`.
pub fn write_line<W: Write>(w: &mut W, content: &str) -> Result<(), OutputError> {
    writeln!(w, "{content}").and_then(|_| w.flush()).map_err(OutputError::Stdout)
}

/// Replaces the contents of `path` with `content`.
pub fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content.as_bytes()).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("output written to {}", path.display());
    Ok(())
}
