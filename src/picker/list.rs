//! A picker over a plain vector of items.

use super::Picker;

/// Items that may be disabled or filtered out of selection
pub trait Selectable {
    fn is_selectable(&self) -> bool;
}

/// Owned list of items with an optional selection
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    items: Vec<T>,
    selected: Option<usize>,
    wrap: bool,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> SelectableList<T> {
    /// Create a wrapping list with nothing selected
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected: None,
            wrap: true,
        }
    }

    /// Set whether movement wraps around the ends of the list
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Replace the items, dropping a selection that no longer points into the list
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected.is_some_and(|index| index >= self.items.len()) {
            self.selected = None;
        }
    }
}

impl<T: Selectable> Picker for SelectableList<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn can_select(&self, item: &T) -> bool {
        item.is_selectable()
    }

    fn wraps(&self) -> bool {
        self.wrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Agent {
        name: &'static str,
        available: bool,
    }

    impl Selectable for Agent {
        fn is_selectable(&self) -> bool {
            self.available
        }
    }

    fn agent(name: &'static str, available: bool) -> Agent {
        Agent { name, available }
    }

    fn agents() -> SelectableList<Agent> {
        SelectableList::new(vec![
            agent("claude", true),
            agent("gemini", false),
            agent("codex", true),
            agent("aider", false),
        ])
    }

    #[test]
    fn test_first_move_from_no_selection() {
        let mut down = agents();
        assert_eq!(down.select_next(), Some(0));

        let mut up = agents();
        assert_eq!(up.select_prev(), Some(2));
    }

    #[test]
    fn test_select_next_skips_unavailable() {
        let mut list = agents();
        list.select_next();
        assert_eq!(list.select_next(), Some(2));
        assert_eq!(list.selected_item().map(|a| a.name), Some("codex"));
    }

    #[test]
    fn test_select_next_wraps() {
        let mut list = agents();
        list.set_selected_index(Some(2));
        assert_eq!(list.select_next(), Some(0));
        assert_eq!(list.select_prev(), Some(2));
    }

    #[test]
    fn test_without_wrap_keeps_selection_at_edge() {
        let mut list = agents().with_wrap(false);
        list.set_selected_index(Some(2));
        assert_eq!(list.select_next(), None);
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_nothing_selectable() {
        let mut list = SelectableList::new(vec![agent("gemini", false), agent("aider", false)]);
        assert_eq!(list.select_next(), None);
        assert_eq!(list.select_first(), None);
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_empty_list() {
        let mut list: SelectableList<Agent> = SelectableList::default();
        assert!(list.is_empty());
        assert_eq!(list.select_prev(), None);
        assert_eq!(list.select_index(3), None);
    }

    #[test]
    fn test_select_first_and_last() {
        let mut list = SelectableList::new(vec![
            agent("gemini", false),
            agent("claude", true),
            agent("codex", true),
            agent("aider", false),
        ]);
        assert_eq!(list.select_last(), Some(2));
        assert_eq!(list.select_first(), Some(1));
    }

    #[test]
    fn test_select_index_settles_on_selectable() {
        let mut list = agents();
        assert_eq!(list.select_index(1), Some(2));
        assert_eq!(list.select_index(99), Some(2));
        assert_eq!(list.select_index(0), Some(0));
    }

    #[test]
    fn test_set_items_drops_stale_selection() {
        let mut list = agents();
        list.set_selected_index(Some(3));
        list.set_items(vec![agent("claude", true)]);
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_clear_selection() {
        let mut list = agents();
        list.select_next();
        list.clear_selection();
        assert!(list.selected_item().is_none());
    }
}
