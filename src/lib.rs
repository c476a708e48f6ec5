//! Keyboard selection for lists whose rows are not all selectable.
//!
//! [`find_next_selectable_row`] computes where an up/down move lands, skipping
//! rows the caller rejects and wrapping around the ends of the list. The
//! [`picker`] module keeps selection state on top of it.

pub mod config;
pub mod error;
pub mod log;
pub mod picker;
pub mod selection;

pub use error::{RowpickError, SelectionError};
pub use picker::{Picker, Selectable, SelectableList};
pub use selection::{
    SelectionDirection, SelectionEvent, find_last_selectable_row, find_next_selectable_row,
    find_next_selectable_row_without_wrap, try_find_next_selectable_row,
};
