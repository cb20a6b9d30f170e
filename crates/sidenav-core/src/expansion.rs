//! Expansion state: which branch nodes are currently rendered open.

use std::collections::HashSet;

use crate::model::MenuId;

/// Set of opaque node ids that are currently expanded.
///
/// Item ids and stringified menu ids share this set. Ids that no longer exist
/// in the tree are harmless: they simply never match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    ids: HashSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the whole set.
    pub fn replace(&mut self, ids: HashSet<String>) {
        self.ids = ids;
    }

    /// Flips membership of `id` and returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether a top-level menu id (in its text form) is in the set.
    pub fn is_expanded_menu(&self, id: MenuId) -> bool {
        self.ids.contains(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.ids
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut set: ExpansionSet = ["a", "b"].into_iter().collect();

        assert!(set.toggle("c"));
        assert!(set.contains("c"));
        assert!(!set.toggle("c"));
        assert!(!set.contains("c"));

        assert!(!set.toggle("a"));
        assert!(set.toggle("a"));

        // Other members untouched
        assert!(set.contains("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_replace_overwrites() {
        let mut set: ExpansionSet = ["old"].into_iter().collect();
        set.replace(HashSet::from(["new".to_string()]));

        assert!(!set.contains("old"));
        assert!(set.contains("new"));

        set.replace(HashSet::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_menu_ids_are_stringified() {
        let set: ExpansionSet = ["12"].into_iter().collect();
        assert!(set.is_expanded_menu(MenuId(12)));
        assert!(!set.is_expanded_menu(MenuId(1)));
    }
}
