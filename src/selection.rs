//! Keyboard selection helpers for list-like views.
//!
//! Finds the next row a selection should move to, skipping rows the caller
//! marks as unselectable and wrapping around the ends of the list.

use serde::{Deserialize, Serialize};

use crate::error::{SelectionError, SelectionResult};

/// Direction to move the selection in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// Towards lower row indices
    Up,
    /// Towards higher row indices
    Down,
}

impl SelectionDirection {
    /// Signed offset for the given step count.
    fn offset(self, step: i128) -> i128 {
        match self {
            SelectionDirection::Up => -step,
            SelectionDirection::Down => step,
        }
    }

    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionDirection::Up => "up",
            SelectionDirection::Down => "down",
        }
    }
}

impl std::str::FromStr for SelectionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(SelectionDirection::Up),
            "down" => Ok(SelectionDirection::Down),
            other => Err(other.to_string()),
        }
    }
}

/// A single navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    /// The direction to move from the current row.
    pub direction: SelectionDirection,

    /// The row to use as a starting point. May lie outside the list, e.g. -1
    /// when nothing is selected yet.
    pub row: isize,
}

impl SelectionEvent {
    pub fn new(direction: SelectionDirection, row: isize) -> Self {
        Self { direction, row }
    }

    pub fn up(row: isize) -> Self {
        Self::new(SelectionDirection::Up, row)
    }

    pub fn down(row: isize) -> Self {
        Self::new(SelectionDirection::Down, row)
    }
}

/// Anchor and number of steps for a walk over `row_count` rows.
///
/// A start outside the list is pulled to just outside it, and the walk gets
/// one extra step because the first step only brings it back into the list.
fn walk_bounds(row_count: usize, row: isize) -> (i128, i128) {
    let count = row_count as i128;
    let row = row as i128;

    let base = row.clamp(-1, count);
    let steps = if row < 0 || row >= count {
        count + 1
    } else {
        count
    };

    (base, steps)
}

/// Determine the next selectable row, given the direction and row.
///
/// Walks circularly from `event.row` and returns the first row for which
/// `can_select_row` holds. The starting row itself is never a candidate.
/// Returns `None` if no row can be selected.
pub fn find_next_selectable_row<F>(
    row_count: usize,
    mut can_select_row: F,
    event: SelectionEvent,
) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    if row_count == 0 {
        return None;
    }

    let count = row_count as i128;
    let (base, steps) = walk_bounds(row_count, event.row);

    for i in 1..steps {
        let next = (base + event.direction.offset(i)).rem_euclid(count) as usize;

        if can_select_row(next) {
            return Some(next);
        }
    }

    None
}

/// Like [`find_next_selectable_row`], but stops at the ends of the list
/// instead of wrapping around.
pub fn find_next_selectable_row_without_wrap<F>(
    row_count: usize,
    mut can_select_row: F,
    event: SelectionEvent,
) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let count = row_count as i128;
    let (base, steps) = walk_bounds(row_count, event.row);

    for i in 1..steps {
        let next = base + event.direction.offset(i);
        if next < 0 || next >= count {
            return None;
        }

        let next = next as usize;
        if can_select_row(next) {
            return Some(next);
        }
    }

    None
}

/// Find the selectable row furthest along `direction`.
///
/// `Up` yields the topmost selectable row and `Down` the bottommost one.
pub fn find_last_selectable_row<F>(
    direction: SelectionDirection,
    row_count: usize,
    mut can_select_row: F,
) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    match direction {
        SelectionDirection::Up => (0..row_count).find(|&row| can_select_row(row)),
        SelectionDirection::Down => (0..row_count).rev().find(|&row| can_select_row(row)),
    }
}

/// Checked entry point for callers holding a signed row count.
///
/// A negative count is rejected rather than treated as an empty list.
pub fn try_find_next_selectable_row<F>(
    row_count: i64,
    can_select_row: F,
    event: SelectionEvent,
    wrap: bool,
) -> SelectionResult<Option<usize>>
where
    F: FnMut(usize) -> bool,
{
    if row_count < 0 {
        return Err(SelectionError::NegativeRowCount(row_count));
    }
    let count = usize::try_from(row_count).map_err(|_| SelectionError::RowCountTooLarge(row_count))?;

    Ok(if wrap {
        find_next_selectable_row(count, can_select_row, event)
    } else {
        find_next_selectable_row_without_wrap(count, can_select_row, event)
    })
}
