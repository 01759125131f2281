//! # Rendering
//!
//! Turns the view state into something a front end can show directly.
//!
//! ## Sub-modules
//! - `text` - chord table and keyboard as plain text for the terminal
//! - `svg` - keyboard as a standalone SVG document for the browser
//!
//! Both renderers are pure functions of their inputs and never touch the
//! selection; [`crate::App`] decides what is highlighted.

mod svg;
mod text;

pub use svg::keyboard_svg;
pub use text::{keyboard_text, table_text};
