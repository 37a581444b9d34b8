//! Batch selection over search results.
//!
//! Selection is keyed by [`SearchResult::selection_key`], which falls back
//! to the title whenever the provider omits an id. Two distinct results
//! with no id and the same title therefore share one selection slot; that
//! long-standing behavior is pinned by test below.

use std::collections::HashSet;

use crate::model::SearchResult;

use super::grouping::SeriesGroup;

/// Aggregate selection state of one series group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelection {
    /// No member selected.
    None,
    /// Some but not all members selected.
    Some,
    /// Every member selected.
    All,
}

/// Membership set for batch download selection.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    batch_mode: bool,
    selected: HashSet<String>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn batch_mode(&self) -> bool {
        self.batch_mode
    }

    /// Enables or disables batch mode. Leaving batch mode clears every
    /// selection; stale picks must not survive a later re-entry.
    pub fn set_batch_mode(&mut self, enabled: bool) {
        self.batch_mode = enabled;
        if !enabled {
            self.selected.clear();
        }
    }

    #[must_use]
    pub fn is_selected(&self, result: &SearchResult) -> bool {
        self.selected.contains(result.selection_key())
    }

    /// Flips membership of one result.
    pub fn toggle(&mut self, result: &SearchResult) {
        let key = result.selection_key();
        if !self.selected.remove(key) {
            self.selected.insert(key.to_owned());
        }
    }

    /// Aggregate state of a group's members. An empty group reads as
    /// [`GroupSelection::None`].
    #[must_use]
    pub fn group_state(&self, group: &SeriesGroup) -> GroupSelection {
        let total = group.books.len();
        let picked = group
            .books
            .iter()
            .filter(|b| self.is_selected(b))
            .count();
        if picked == 0 {
            GroupSelection::None
        } else if picked == total {
            GroupSelection::All
        } else {
            GroupSelection::Some
        }
    }

    /// Group-level toggle: a fully selected group is deselected entirely;
    /// any other state selects the remaining unselected members.
    pub fn toggle_group(&mut self, group: &SeriesGroup) {
        match self.group_state(group) {
            GroupSelection::All => {
                for book in &group.books {
                    self.selected.remove(book.selection_key());
                }
            }
            GroupSelection::None | GroupSelection::Some => {
                for book in &group.books {
                    self.selected.insert(book.selection_key().to_owned());
                }
            }
        }
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drops every selection without touching batch mode.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// The selected subset of `results`, in input order.
    #[must_use]
    pub fn selected_from<'a>(&self, results: &'a [SearchResult]) -> Vec<&'a SearchResult> {
        results.iter().filter(|r| self.is_selected(r)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::search::grouping::group_by_series;

    fn result(id: Option<&str>, title: &str) -> SearchResult {
        let mut r = crate::model::search::tests::result(title);
        r.id = id.map(str::to_owned);
        r
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = SelectionSet::new();
        let a = result(Some("a"), "Book A");
        assert!(!set.is_selected(&a));
        set.toggle(&a);
        assert!(set.is_selected(&a));
        set.toggle(&a);
        assert!(!set.is_selected(&a));
    }

    #[test]
    fn test_leaving_batch_mode_clears_selection() {
        let mut set = SelectionSet::new();
        set.set_batch_mode(true);
        set.toggle(&result(Some("a"), "Book A"));
        assert_eq!(set.len(), 1);
        set.set_batch_mode(false);
        assert!(set.is_empty());
        set.set_batch_mode(true);
        assert!(set.is_empty(), "re-entry must start from scratch");
    }

    #[test]
    fn test_group_toggle_cycles_through_states() {
        let mut set = SelectionSet::new();
        let groups = group_by_series(vec![
            result(Some("a"), "Book A"),
            result(Some("b"), "Book B"),
        ]);
        let group = &groups[0];
        assert_eq!(set.group_state(group), GroupSelection::None);

        set.toggle_group(group);
        assert_eq!(set.group_state(group), GroupSelection::All);

        set.toggle(&result(Some("a"), "Book A"));
        assert_eq!(set.group_state(group), GroupSelection::Some);

        // Partial selection selects the rest, not deselects.
        set.toggle_group(group);
        assert_eq!(set.group_state(group), GroupSelection::All);

        set.toggle_group(group);
        assert_eq!(set.group_state(group), GroupSelection::None);
    }

    #[test]
    fn test_duplicate_titles_without_ids_share_a_key() {
        // Pinned: id-less results are keyed by title, so two different
        // releases of the same title select and deselect together.
        let mut set = SelectionSet::new();
        let first = result(None, "Same Title");
        let second = result(None, "Same Title");
        set.toggle(&first);
        assert!(set.is_selected(&second));
        assert_eq!(set.len(), 1);
        set.toggle(&second);
        assert!(!set.is_selected(&first));
    }

    #[test]
    fn test_selected_from_preserves_input_order() {
        let mut set = SelectionSet::new();
        let a = result(Some("a"), "A");
        let b = result(Some("b"), "B");
        let c = result(Some("c"), "C");
        set.toggle(&c);
        set.toggle(&a);
        let all = vec![a, b, c];
        let picked = set.selected_from(&all);
        let titles: Vec<&str> = picked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }
}
