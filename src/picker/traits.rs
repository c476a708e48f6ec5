//! Picker trait definition
//!
//! A generic trait for list-based selection components whose items may not
//! all be selectable.

use crate::log;
use crate::selection::{
    SelectionDirection, SelectionEvent, find_last_selectable_row, find_next_selectable_row,
    find_next_selectable_row_without_wrap,
};

/// A generic picker trait for list selection
///
/// Movement skips items for which [`Picker::can_select`] is false. Moves that
/// find nothing to select leave the selection untouched.
///
/// # Example
///
/// ```ignore
/// struct AgentPicker {
///     agents: Vec<Agent>,
///     selected: Option<usize>,
/// }
///
/// impl Picker for AgentPicker {
///     type Item = Agent;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.agents
///     }
///
///     fn selected_index(&self) -> Option<usize> {
///         self.selected
///     }
///
///     fn set_selected_index(&mut self, index: Option<usize>) {
///         self.selected = index;
///     }
///
///     fn can_select(&self, agent: &Agent) -> bool {
///         agent.is_available()
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Whether `item` may become the selection
    fn can_select(&self, item: &Self::Item) -> bool;

    /// Whether movement wraps around the ends of the list
    fn wraps(&self) -> bool {
        true
    }

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Whether the item at `index` exists and is selectable
    fn can_select_index(&self, index: usize) -> bool {
        self.items()
            .get(index)
            .is_some_and(|item| self.can_select(item))
    }

    /// Move the selection one selectable item in `direction`.
    ///
    /// Returns the new index, or `None` if nothing could be selected.
    fn move_selection(&mut self, direction: SelectionDirection) -> Option<usize> {
        let len = self.len();
        // With no selection, start just outside the end we move away from
        let row = match (self.selected_index(), direction) {
            (Some(index), _) => index as isize,
            (None, SelectionDirection::Down) => -1,
            (None, SelectionDirection::Up) => len as isize,
        };
        let event = SelectionEvent::new(direction, row);

        let next = if self.wraps() {
            find_next_selectable_row(len, |i| self.can_select_index(i), event)
        } else {
            find_next_selectable_row_without_wrap(len, |i| self.can_select_index(i), event)
        };

        match next {
            Some(index) => self.set_selected_index(Some(index)),
            None => log::log_event(&format!(
                "no selectable row {} from {} of {}",
                direction.as_str(),
                row,
                len
            )),
        }
        next
    }

    /// Select the next selectable item
    fn select_next(&mut self) -> Option<usize> {
        self.move_selection(SelectionDirection::Down)
    }

    /// Select the previous selectable item
    fn select_prev(&mut self) -> Option<usize> {
        self.move_selection(SelectionDirection::Up)
    }

    /// Select the first selectable item
    fn select_first(&mut self) -> Option<usize> {
        self.select_edge(SelectionDirection::Up)
    }

    /// Select the last selectable item
    fn select_last(&mut self) -> Option<usize> {
        self.select_edge(SelectionDirection::Down)
    }

    /// Select the furthest selectable item in `direction`
    fn select_edge(&mut self, direction: SelectionDirection) -> Option<usize> {
        let found = find_last_selectable_row(direction, self.len(), |i| self.can_select_index(i));
        if found.is_some() {
            self.set_selected_index(found);
        }
        found
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.selected_index().and_then(|index| self.items().get(index))
    }

    /// Select a specific index (clamped to valid range)
    ///
    /// If the clamped item is not selectable, the nearest selectable item
    /// below it is chosen, then the nearest above it.
    fn select_index(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let clamped = index.min(self.len() - 1);
        let found = if self.can_select_index(clamped) {
            Some(clamped)
        } else {
            let len = self.len();
            find_next_selectable_row_without_wrap(
                len,
                |i| self.can_select_index(i),
                SelectionEvent::down(clamped as isize),
            )
            .or_else(|| {
                find_next_selectable_row_without_wrap(
                    len,
                    |i| self.can_select_index(i),
                    SelectionEvent::up(clamped as isize),
                )
            })
        };

        if found.is_some() {
            self.set_selected_index(found);
        }
        found
    }

    /// Clear the current selection
    fn clear_selection(&mut self) {
        self.set_selected_index(None);
    }
}
