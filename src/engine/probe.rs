// src/engine/probe.rs
use tracing::trace;

use super::failure::AccessFailure;

/// Check that `path` exists, is not a directory and can be opened for reading.
///
/// The file is opened and dropped straight away; nothing is read or written.
pub async fn probe_accessibility(path: &str) -> Result<(), AccessFailure> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| AccessFailure::from_io(path, &e))?;

    if metadata.is_dir() {
        return Err(AccessFailure::directory(path));
    }

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| AccessFailure::from_io(path, &e))?;
    drop(file);

    trace!("{} is accessible", path);
    Ok(())
}
