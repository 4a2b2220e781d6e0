//! GUI components

pub mod feature_card;
pub mod history_card;
pub mod progress_bar;
pub mod quality_item;
pub mod url_input;

// Re-export for convenience
pub use feature_card::feature_card;
pub use history_card::history_card;
pub use progress_bar::download_panel;
pub use quality_item::quality_item;
pub use url_input::url_input;
