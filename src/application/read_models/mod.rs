//! Read models for CQRS-lite pattern
//!
//! View-optimized snapshots of the radar screen handed to renderers.

pub mod screen_view;

pub use screen_view::{ScreenView, StatusBanner};
