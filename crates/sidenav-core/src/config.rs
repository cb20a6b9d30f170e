//! Configuration for a sidebar instance

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::NavItem;

/// Default header text of the full layout.
pub const DEFAULT_HEADER_TITLE: &str = "Management Console";

/// Recognized sidebar options.
///
/// Callbacks (`on_navigate`, icon rendering, rail change) are not part of the
/// config; they are injected where they are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Selects which name field is displayed
    pub locale: Locale,

    /// Delegate leaf navigation to the injected router when no callback is set
    pub enable_router_integration: bool,

    /// Extra CSS class for the sidebar root
    pub class_name: String,

    /// Title shown in the layout header
    pub header_title: String,

    /// Entries of the primary navigation rail
    pub nav_items: Vec<NavItem>,

    /// Initially selected rail entry (defaults to the first entry)
    pub active_nav_code: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            enable_router_integration: true,
            class_name: String::new(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            nav_items: Vec::new(),
            active_nav_code: None,
        }
    }
}

impl SidebarConfig {
    /// Config for hosts without a router: navigation is only reported through
    /// the callback.
    pub fn standalone() -> Self {
        Self {
            enable_router_integration: false,
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_nav_items(mut self, nav_items: Vec<NavItem>) -> Self {
        self.nav_items = nav_items;
        self
    }

    pub fn with_header_title(mut self, title: impl Into<String>) -> Self {
        self.header_title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SidebarConfig::default();
        assert_eq!(config.locale, Locale::En);
        assert!(config.enable_router_integration);
        assert_eq!(config.header_title, DEFAULT_HEADER_TITLE);
        assert!(!SidebarConfig::standalone().enable_router_integration);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SidebarConfig =
            serde_json::from_str(r#"{"locale":"kh","enable_router_integration":false}"#).unwrap();
        assert_eq!(config.locale, Locale::Kh);
        assert!(!config.enable_router_integration);
        assert_eq!(config.header_title, DEFAULT_HEADER_TITLE);
        assert!(config.nav_items.is_empty());
    }
}
