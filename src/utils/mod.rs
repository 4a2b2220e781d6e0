//! Utility modules for error handling, configuration and paths

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{VidtikError, INVALID_URL_MESSAGE};
pub use paths::{get_app_data_dir, get_database_path};
