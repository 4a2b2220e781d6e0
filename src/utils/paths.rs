//! Platform path resolution
//!
//! The database lives in the platform data directory rather than next to the
//! binary, so launching from a desktop shortcut and from a terminal share the
//! same history.

use std::path::PathBuf;
use tracing::{debug, warn};

/// Get the application data directory for VidTik.
///
/// Returns `<data dir>/vidtik/`, e.g. `~/.local/share/vidtik` on Linux.
/// Creates the directory if it doesn't exist.
pub fn get_app_data_dir() -> PathBuf {
    let dir = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| {
            warn!("Could not determine data directory, using current directory");
            PathBuf::from(".")
        })
        .join("vidtik");

    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Failed to create data directory {:?}: {}", dir, e);
    }

    debug!("App data directory: {:?}", dir);
    dir
}

/// Get the local storage database path.
pub fn get_database_path() -> PathBuf {
    get_app_data_dir().join("vidtik.db")
}
