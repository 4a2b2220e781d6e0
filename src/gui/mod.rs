//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod notification;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{AppFlags, Message, VidtikApp};
