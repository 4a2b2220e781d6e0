//! Local storage module

pub mod operations;
pub mod schema;

// Re-export for convenience
pub use operations::LocalStorage;
pub use schema::{initialize_database, initialize_in_memory_database};
