//! File persistence helpers.

use std::path::Path;
use tracing::debug;

use crate::error::StoreError;

/// Ensures a directory exists.
///
/// Returns `true` if the directory had to be created.
pub async fn ensure_dir(path: &Path) -> Result<bool, StoreError> {
    if tokio::fs::try_exists(path).await? {
        return Ok(false);
    }
    debug!(path = %path.display(), "Creating directory");
    tokio::fs::create_dir_all(path).await?;
    Ok(true)
}

/// Writes a text file atomically (temp file + rename).
pub async fn write_text(path: &Path, content: &str) -> Result<(), StoreError> {
    debug!(path = %path.display(), bytes = content.len(), "Writing file");

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    tokio::fs::write(temp_path, content).await?;
    tokio::fs::rename(temp_path, path).await?;
    Ok(())
}

/// Reads a text file.
pub async fn read_text(path: &Path) -> Result<String, StoreError> {
    debug!(path = %path.display(), "Reading file");
    Ok(tokio::fs::read_to_string(path).await?)
}
