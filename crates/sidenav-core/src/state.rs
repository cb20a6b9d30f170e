//! Sidebar selection state and its transitions.
//!
//! [`SidebarState`] owns the only mutable data of the engine. The menu tree
//! is passed in per transition and never modified.

use tracing::debug;

use crate::expansion::ExpansionSet;
use crate::model::{Menu, MenuId, MenuItem};
use crate::resolver::{compute_expansion_for_active_path, find_node_by_id, owning_menu};

/// Discrete input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The active location changed (initial mount or a route change).
    PathChanged(String),
    /// A menu item was clicked, identified by its id.
    ItemClicked(String),
    /// A top-level menu header was clicked.
    MenuClicked(MenuId),
}

/// Result of clicking a menu item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A branch was toggled; no navigation happens.
    Toggled { id: String, expanded: bool },
    /// A leaf was activated; the caller should navigate to `href`.
    Navigate { href: String },
}

/// A navigation the host should carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub href: String,
    pub item_id: String,
}

/// Derived sidebar state: active location, open branches, open menu group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarState {
    pub active_href: String,
    pub expanded: ExpansionSet,
    pub active_menu_id: Option<MenuId>,
}

impl SidebarState {
    /// Creates state for an initial active path, without resolving it yet.
    pub fn new(active_href: impl Into<String>) -> Self {
        Self {
            active_href: active_href.into(),
            ..Self::default()
        }
    }

    /// Creates state and immediately reconciles it with `menus`.
    pub fn mounted(menus: &[Menu], active_href: impl Into<String>) -> Self {
        let mut state = Self::new(active_href);
        state.reconcile(menus);
        state
    }

    /// Sets the active path and reconciles expansion against it.
    pub fn sync_active_path(&mut self, menus: &[Menu], href: &str) {
        self.active_href = href.to_string();
        self.reconcile(menus);
    }

    /// Recomputes expansion and the active menu from `active_href`.
    ///
    /// An empty active path means "nothing selected" and leaves state alone.
    /// Otherwise expansion is replaced by exactly the new ancestor chain, and
    /// the active menu only moves when some menu contains the path.
    pub fn reconcile(&mut self, menus: &[Menu]) {
        if self.active_href.is_empty() {
            return;
        }

        self.expanded
            .replace(compute_expansion_for_active_path(menus, &self.active_href));

        if let Some(menu) = owning_menu(menus, &self.active_href) {
            self.active_menu_id = Some(menu.id);
        }

        debug!(
            href = %self.active_href,
            expanded = self.expanded.len(),
            active_menu = ?self.active_menu_id,
            "Reconciled active path"
        );
    }

    /// Handles a click on `item`.
    ///
    /// Branches toggle and never navigate; leaves set the active path and
    /// never toggle.
    pub fn click_item(&mut self, item: &MenuItem) -> ClickOutcome {
        if item.is_branch() {
            let expanded = self.expanded.toggle(&item.id);
            debug!(id = %item.id, expanded, "Toggled branch");
            ClickOutcome::Toggled {
                id: item.id.clone(),
                expanded,
            }
        } else {
            self.active_href = item.href.clone();
            debug!(id = %item.id, href = %item.href, "Activated leaf");
            ClickOutcome::Navigate {
                href: item.href.clone(),
            }
        }
    }

    /// Toggles the open menu group between `menu_id` and none.
    pub fn click_menu(&mut self, menu_id: MenuId) {
        self.active_menu_id = if self.active_menu_id == Some(menu_id) {
            None
        } else {
            Some(menu_id)
        };
        debug!(menu = %menu_id, active_menu = ?self.active_menu_id, "Toggled menu group");
    }

    /// Applies one event.
    ///
    /// Returns a navigation request when a leaf was clicked. Unknown item ids
    /// are ignored. A leaf click that moves the active path is followed by
    /// the active-path transition for its href, so the new location is
    /// revealed in the tree. Re-clicking the active leaf leaves expansion as
    /// it is.
    pub fn apply(&mut self, menus: &[Menu], event: SidebarEvent) -> Option<NavigationRequest> {
        match event {
            SidebarEvent::PathChanged(href) => {
                self.sync_active_path(menus, &href);
                None
            }
            SidebarEvent::ItemClicked(id) => {
                let item = menus
                    .iter()
                    .find_map(|menu| find_node_by_id(&menu.items, &id))?;
                let previous_href = self.active_href.clone();
                match self.click_item(item) {
                    ClickOutcome::Toggled { .. } => None,
                    ClickOutcome::Navigate { href } => {
                        if href != previous_href {
                            self.reconcile(menus);
                        }
                        Some(NavigationRequest {
                            href,
                            item_id: item.id.clone(),
                        })
                    }
                }
            }
            SidebarEvent::MenuClicked(menu_id) => {
                self.click_menu(menu_id);
                None
            }
        }
    }

    /// A menu group is open when it is the explicitly active group or when
    /// its id is in the expansion set. Either reason suffices.
    pub fn is_menu_expanded(&self, menu: &Menu) -> bool {
        self.active_menu_id == Some(menu.id) || self.expanded.is_expanded_menu(menu.id)
    }

    pub fn is_item_expanded(&self, item: &MenuItem) -> bool {
        self.expanded.contains(&item.id)
    }

    pub fn is_item_active(&self, item: &MenuItem) -> bool {
        self.active_href == item.href
    }
}
