//! Owned list of names with front insertion

use std::collections::VecDeque;
use std::fmt;

const EMPTY_LIST: &str = "Empty!";

/// A list of owned strings, newest first
///
/// Duplicates are allowed. Cloning copies every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    items: VecDeque<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` at the front of the list
    pub fn insert_first(&mut self, value: &str) {
        self.items.push_front(value.to_string());
    }

    /// Remove every element equal to `value`, returning how many were removed
    pub fn remove_all(&mut self, value: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        before - self.items.len()
    }

    /// Number of elements equal to `value`
    pub fn occurrences(&self, value: &str) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "{EMPTY_LIST}");
        }
        for item in &self.items {
            write!(f, "'{item}'->")?;
        }
        write!(f, "|| size:{}", self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn list_of(values: &[&str]) -> NameList {
        let mut list = NameList::new();
        for value in values {
            list.insert_first(value);
        }
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = NameList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "Empty!");
    }

    #[test]
    fn test_insert_first_prepends() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_all_counts_removals() {
        let mut list = list_of(&["a", "b", "a", "c", "a"]);

        assert_eq!(list.remove_all("a"), 3);
        assert_eq!(list.remove_all("a"), 0);
        assert_eq!(list.remove_all("zzz"), 0);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_occurrences() {
        let list = list_of(&["x", "y", "x"]);
        assert_eq!(list.occurrences("x"), 2);
        assert_eq!(list.occurrences("y"), 1);
        assert_eq!(list.occurrences("z"), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = list_of(&["a", "b"]);
        let mut copy = original.clone();
        copy.insert_first("c");
        copy.remove_all("a");

        assert_eq!(original.iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(copy.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_display_lists_front_to_back() {
        let list = list_of(&["first", "second"]);
        assert_eq!(list.to_string(), "'second'->'first'->|| size:2");
    }
}
