//! Bounded log of navigation events, newest first.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::model::MenuItem;

/// Maximum number of navigation entries to keep.
pub const MAX_NAVIGATION_ENTRIES: usize = 10;

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEntry {
    pub at: DateTime<Local>,
    pub href: String,
    pub item_id: String,
    pub label: String,
}

impl NavigationEntry {
    /// Human-readable line for the log panel.
    pub fn describe(&self) -> String {
        format!("[{}] Navigated to: {} ({})", self.at.format("%H:%M:%S"), self.href, self.label)
    }
}

/// Newest-first navigation history with a fixed capacity.
#[derive(Debug, Clone)]
pub struct NavigationLog {
    entries: VecDeque<NavigationEntry>,
    capacity: usize,
}

impl Default for NavigationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NAVIGATION_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a navigation to `href` triggered by `item`, stamped now.
    pub fn record(&mut self, href: &str, item: &MenuItem) {
        self.push(NavigationEntry {
            at: Local::now(),
            href: href.to_string(),
            item_id: item.id.clone(),
            label: item.name_en.clone(),
        });
    }

    pub fn push(&mut self, entry: NavigationEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&NavigationEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut log = NavigationLog::with_capacity(3);
        for n in 0..5 {
            let item = MenuItem::leaf(format!("i{n}"), format!("Item {n}"), format!("/{n}"));
            log.record(&item.href, &item);
        }

        assert_eq!(log.len(), 3);
        let hrefs: Vec<&str> = log.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/4", "/3", "/2"]);
        assert_eq!(log.latest().map(|e| e.item_id.as_str()), Some("i4"));
    }

    #[test]
    fn test_describe() {
        let item = MenuItem::leaf("roles", "Role List", "/roles/list");
        let mut log = NavigationLog::new();
        log.record(&item.href, &item);

        let line = log.latest().map(NavigationEntry::describe).unwrap_or_default();
        assert!(line.ends_with("Navigated to: /roles/list (Role List)"));
        assert!(line.starts_with('['));
    }
}
