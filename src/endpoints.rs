use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Startup failures that abort the session before any polling begins.
#[derive(Debug, Error)]
pub enum EndpointsError {
    #[error("failed to read endpoints file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("endpoints file {path} lists no endpoints")]
    Empty { path: PathBuf },
}

/// Load the ordered endpoint list: one URL per line.
///
/// Lines are right-trimmed (CRLF tolerance) and blank lines skipped.
/// Duplicates are kept; each occurrence is polled independently.
pub fn load_endpoints(path: &Path) -> Result<Vec<String>, EndpointsError> {
    let contents = fs::read_to_string(path).map_err(|source| EndpointsError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let endpoints: Vec<String> = contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if endpoints.is_empty() {
        return Err(EndpointsError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(endpoints)
}
