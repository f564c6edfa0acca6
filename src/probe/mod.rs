//! Probe data module
//!
//! This module handles the loosely typed stream descriptions the engine
//! hands to every plugin:
//! - Stream records and their codec categories
//! - Dotted property path resolution (`tags.language`, `disposition.forced`)
//! - Conversion of leaf values to display and comparison strings

pub mod property;
pub mod stream;
pub mod value;

pub use property::{resolve, PropertyPath};
pub use stream::{CodecType, StreamRecord};
pub use value::{comparison_string, display_string, is_forced};
