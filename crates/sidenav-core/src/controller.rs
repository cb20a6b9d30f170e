//! Selection controller: state transitions plus navigation dispatch.
//!
//! The controller wires [`SidebarState`] to the host's side effects. A leaf
//! click is dispatched once, to the first available target:
//!
//! 1. the `on_navigate` callback, when one is set
//! 2. the injected [`Router`], when router integration is enabled
//! 3. nothing; the click is still recorded in the state

use std::fmt;

use tracing::{debug, info};

use crate::config::SidebarConfig;
use crate::locale::{Locale, Localized};
use crate::model::{Menu, MenuId, MenuItem};
use crate::resolver::find_node_by_id;
use crate::state::{ClickOutcome, NavigationRequest, SidebarEvent, SidebarState};

/// Callback invoked with the target href and the clicked item.
pub type NavigateCallback = Box<dyn FnMut(&str, &MenuItem)>;

/// Routing capability supplied by the host.
pub trait Router {
    /// The location the router currently considers active, if known.
    fn current_path(&self) -> Option<String>;

    /// Navigates to `href`.
    fn push(&mut self, href: &str);
}

/// In-process router that records every push.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router already sitting at `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> Option<String> {
        self.history.last().cloned()
    }

    fn push(&mut self, href: &str) {
        self.history.push(href.to_string());
    }
}

/// Owns sidebar state, configuration, and navigation targets.
pub struct SelectionController {
    config: SidebarConfig,
    state: SidebarState,
    on_navigate: Option<NavigateCallback>,
    router: Option<Box<dyn Router>>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_navigate", &self.on_navigate.is_some())
            .field("router", &self.router.is_some())
            .finish()
    }
}

impl SelectionController {
    /// Creates a controller with no navigation targets and an empty path.
    pub fn new(config: SidebarConfig) -> Self {
        Self {
            config,
            state: SidebarState::default(),
            on_navigate: None,
            router: None,
        }
    }

    /// Sets the navigation callback.
    pub fn with_on_navigate(mut self, callback: impl FnMut(&str, &MenuItem) + 'static) -> Self {
        self.on_navigate = Some(Box::new(callback));
        self
    }

    /// Injects a router. Its current path seeds the active path when router
    /// integration is enabled.
    pub fn with_router(mut self, router: impl Router + 'static) -> Self {
        if self.config.enable_router_integration {
            if let Some(path) = router.current_path() {
                self.state.active_href = path;
            }
        }
        self.router = Some(Box::new(router));
        self
    }

    /// Overrides the initial active path.
    pub fn with_initial_path(mut self, href: impl Into<String>) -> Self {
        self.state.active_href = href.into();
        self
    }

    /// Resolves the initial active path against `menus`.
    pub fn mount(&mut self, menus: &[Menu]) {
        info!(
            href = %self.state.active_href,
            menus = menus.len(),
            "Mounting sidebar"
        );
        self.state.reconcile(menus);
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.config.locale = locale;
    }

    pub fn active_href(&self) -> &str {
        &self.state.active_href
    }

    pub fn active_menu_id(&self) -> Option<MenuId> {
        self.state.active_menu_id
    }

    /// Display label for a node under the configured locale.
    pub fn display_name<'a, N: Localized + ?Sized>(&self, node: &'a N) -> &'a str {
        node.display_name(self.config.locale)
    }

    /// Handles an externally reported active-path change.
    pub fn set_active_path(&mut self, menus: &[Menu], href: &str) {
        self.state.sync_active_path(menus, href);
    }

    /// Pulls the router's current location and syncs to it.
    ///
    /// Does nothing when router integration is off or no router is present.
    pub fn on_route_change(&mut self, menus: &[Menu]) {
        if !self.config.enable_router_integration {
            return;
        }
        let Some(path) = self.router.as_ref().and_then(|router| router.current_path()) else {
            return;
        };
        if !path.is_empty() {
            self.state.sync_active_path(menus, &path);
        }
    }

    /// Handles a click on a menu item.
    ///
    /// Leaves always dispatch. Expansion is only reconciled when the click
    /// actually moved the active path.
    pub fn click_item(&mut self, menus: &[Menu], item: &MenuItem) -> ClickOutcome {
        let previous_href = self.state.active_href.clone();
        let outcome = self.state.click_item(item);

        if let ClickOutcome::Navigate { href } = &outcome {
            self.dispatch_navigation(href, item);
            if *href != previous_href {
                self.state.reconcile(menus);
            }
        }

        outcome
    }

    /// Handles a click on a top-level menu header.
    pub fn click_menu(&mut self, menu_id: MenuId) {
        self.state.click_menu(menu_id);
    }

    /// Applies one event, dispatching navigation for leaf clicks.
    ///
    /// Item clicks are resolved by id (first occurrence wins); unknown ids
    /// are ignored.
    pub fn apply(&mut self, menus: &[Menu], event: SidebarEvent) -> Option<NavigationRequest> {
        match event {
            SidebarEvent::ItemClicked(id) => {
                let item = menus
                    .iter()
                    .find_map(|menu| find_node_by_id(&menu.items, &id))?;
                match self.click_item(menus, item) {
                    ClickOutcome::Navigate { href } => Some(NavigationRequest {
                        href,
                        item_id: item.id.clone(),
                    }),
                    ClickOutcome::Toggled { .. } => None,
                }
            }
            other => self.state.apply(menus, other),
        }
    }

    pub fn is_menu_expanded(&self, menu: &Menu) -> bool {
        self.state.is_menu_expanded(menu)
    }

    pub fn is_item_expanded(&self, item: &MenuItem) -> bool {
        self.state.is_item_expanded(item)
    }

    pub fn is_item_active(&self, item: &MenuItem) -> bool {
        self.state.is_item_active(item)
    }

    fn dispatch_navigation(&mut self, href: &str, item: &MenuItem) {
        if let Some(callback) = self.on_navigate.as_mut() {
            debug!(href, "Dispatching navigation to callback");
            callback(href, item);
        } else if self.config.enable_router_integration {
            match self.router.as_mut() {
                Some(router) => {
                    debug!(href, "Dispatching navigation to router");
                    router.push(href);
                }
                None => debug!(href, "Router integration enabled but no router injected"),
            }
        } else {
            debug!(href, "No navigation target; click recorded only");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn menus() -> Vec<Menu> {
        vec![Menu::new(1, "ONE", "One").with_items(vec![
            MenuItem::leaf("a", "A", "/a"),
            MenuItem::branch("b", "B", vec![MenuItem::leaf("c", "C", "/b/c")]),
        ])]
    }

    #[test]
    fn test_callback_receives_leaf_click() {
        let menus = menus();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut controller = SelectionController::new(SidebarConfig::standalone())
            .with_on_navigate(move |href, item| sink.borrow_mut().push((href.to_string(), item.id.clone())));
        controller.mount(&menus);

        let leaf = &menus[0].items[1].children[0];
        controller.click_item(&menus, leaf);

        assert_eq!(*seen.borrow(), vec![("/b/c".to_string(), "c".to_string())]);
        assert_eq!(controller.active_href(), "/b/c");
        assert!(controller.state().expanded.contains("b"));
        assert_eq!(controller.active_menu_id(), Some(MenuId(1)));
    }

    #[test]
    fn test_branch_click_never_dispatches() {
        let menus = menus();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut controller = SelectionController::new(SidebarConfig::standalone())
            .with_on_navigate(move |_, _| *sink.borrow_mut() += 1);

        controller.click_item(&menus, &menus[0].items[1]);
        assert_eq!(*count.borrow(), 0);
        assert!(controller.is_item_expanded(&menus[0].items[1]));
    }

    #[test]
    fn test_router_seeds_initial_path() {
        let menus = menus();
        let mut controller =
            SelectionController::new(SidebarConfig::default()).with_router(MemoryRouter::at("/b/c"));
        controller.mount(&menus);

        assert_eq!(controller.active_href(), "/b/c");
        assert_eq!(controller.active_menu_id(), Some(MenuId(1)));
    }

    #[test]
    fn test_router_ignored_when_integration_disabled() {
        let menus = menus();
        let mut controller =
            SelectionController::new(SidebarConfig::standalone()).with_router(MemoryRouter::at("/b/c"));
        controller.mount(&menus);

        assert_eq!(controller.active_href(), "");
        assert_eq!(controller.active_menu_id(), None);

        // Click still updates state even without any navigation target
        controller.click_item(&menus, &menus[0].items[0]);
        assert_eq!(controller.active_href(), "/a");
    }

    #[test]
    fn test_apply_dispatches_once() {
        let menus = menus();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut controller = SelectionController::new(SidebarConfig::standalone())
            .with_on_navigate(move |_, _| *sink.borrow_mut() += 1);

        let request = controller.apply(&menus, SidebarEvent::ItemClicked("c".to_string()));
        assert_eq!(request.map(|r| r.item_id), Some("c".to_string()));
        assert_eq!(*count.borrow(), 1);

        assert!(controller
            .apply(&menus, SidebarEvent::ItemClicked("b".to_string()))
            .is_none());
        assert_eq!(*count.borrow(), 1);

        controller.apply(&menus, SidebarEvent::MenuClicked(MenuId(1)));
        assert_eq!(controller.active_menu_id(), None);
    }

    #[test]
    fn test_display_name_uses_configured_locale() {
        let item = MenuItem::leaf("a", "Accounts", "/a").with_name_kh("គណនី");
        let mut controller = SelectionController::new(SidebarConfig::standalone());

        assert_eq!(controller.display_name(&item), "Accounts");
        controller.set_locale(Locale::Kh);
        assert_eq!(controller.display_name(&item), "គណនី");
    }
}
