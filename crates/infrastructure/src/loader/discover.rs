//! Suite-file discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::LoadError;

/// Returns the suite files directly under `dir` with a `.yaml` or `.yml`
/// suffix, sorted for deterministic run order.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the directory cannot be enumerated.
pub async fn discover_suites(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |e| LoadError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = fs::read_dir(dir).await.map_err(io_error)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if is_file && has_suite_extension(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

fn has_suite_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("yaml" | "yml")
    )
}
