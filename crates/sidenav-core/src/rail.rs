//! Primary navigation rail: a flat list of sections beside the menu tree.

use tracing::debug;

use crate::model::NavItem;

/// Which rail entry is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RailState {
    pub items: Vec<NavItem>,
    pub active_code: String,
}

impl RailState {
    /// Starts on `active_code` when given, otherwise on the first entry.
    pub fn new(items: Vec<NavItem>, active_code: Option<String>) -> Self {
        let active_code = active_code
            .or_else(|| items.first().map(|item| item.code.clone()))
            .unwrap_or_default();
        Self { items, active_code }
    }

    /// Selects `code`. Returns whether the selection changed.
    pub fn select(&mut self, code: &str) -> bool {
        if self.active_code == code {
            return false;
        }
        debug!(from = %self.active_code, to = code, "Rail selection changed");
        self.active_code = code.to_string();
        true
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.active_code == item.code
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| self.is_active(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        vec![NavItem::new("SYSTEM", "System"), NavItem::new("REPORTS", "Reports")]
    }

    #[test]
    fn test_defaults_to_first_entry() {
        let rail = RailState::new(items(), None);
        assert_eq!(rail.active_code, "SYSTEM");
        assert_eq!(rail.active_item().map(|i| i.label.as_str()), Some("System"));
    }

    #[test]
    fn test_explicit_code_wins() {
        let rail = RailState::new(items(), Some("REPORTS".to_string()));
        assert_eq!(rail.active_code, "REPORTS");
    }

    #[test]
    fn test_empty_rail() {
        let rail = RailState::new(Vec::new(), None);
        assert_eq!(rail.active_code, "");
        assert!(rail.active_item().is_none());
    }

    #[test]
    fn test_select_reports_change() {
        let mut rail = RailState::new(items(), None);
        assert!(!rail.select("SYSTEM"));
        assert!(rail.select("REPORTS"));
        assert!(rail.is_active(&rail.items[1]));
    }
}
