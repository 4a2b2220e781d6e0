//! GUI views

pub mod history_view;
pub mod result_view;
pub mod search_view;

// Re-export for convenience
pub use history_view::history_view;
pub use result_view::result_view;
pub use search_view::search_view;
