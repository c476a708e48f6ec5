//! Generic picker module
//!
//! Provides a trait and implementations for list-based selection UI components
//! that skip disabled or filtered-out items when the selection moves.

mod list;
mod traits;

pub use list::{Selectable, SelectableList};
pub use traits::Picker;
