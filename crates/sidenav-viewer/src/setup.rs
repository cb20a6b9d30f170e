//! Viewer wiring: config from CLI options and controller construction.

use sidenav_core::{
    find_node_by_href, sample_nav_items, Locale, Menu, MemoryRouter, MenuItem, NavigateCallback,
    Router, SelectionController, SidebarConfig,
};

use crate::ViewerSettings;

/// Rail section highlighted on startup.
pub const DEFAULT_NAV_CODE: &str = "System";

/// Builds the viewer's sidebar config.
pub fn viewer_config(locale: Locale, enable_router: bool, title: Option<String>) -> SidebarConfig {
    let mut config = SidebarConfig::default()
        .with_locale(locale)
        .with_nav_items(sample_nav_items());
    config.enable_router_integration = enable_router;
    config.active_nav_code = Some(DEFAULT_NAV_CODE.to_string());
    if let Some(title) = title {
        config = config.with_header_title(title);
    }
    config
}

/// In-memory router that reports every push along with the item it resolves to.
pub struct RecordingRouter {
    inner: MemoryRouter,
    menus: Vec<Menu>,
    on_push: NavigateCallback,
}

impl RecordingRouter {
    pub fn new(
        inner: MemoryRouter,
        menus: Vec<Menu>,
        on_push: impl FnMut(&str, &MenuItem) + 'static,
    ) -> Self {
        Self {
            inner,
            menus,
            on_push: Box::new(on_push),
        }
    }
}

impl Router for RecordingRouter {
    fn current_path(&self) -> Option<String> {
        self.inner.current_path()
    }

    fn push(&mut self, href: &str) {
        self.inner.push(href);
        tracing::debug!("Router history has {} entries", self.inner.history().len());
        if let Some(item) = self
            .menus
            .iter()
            .find_map(|menu| find_node_by_href(&menu.items, href))
        {
            (self.on_push)(href, item);
        }
    }
}

/// Creates and mounts the controller.
///
/// With router integration on, navigation goes through a [`RecordingRouter`]
/// seeded with the active path. Otherwise `on_navigate` is the callback.
pub fn build_controller(
    settings: &ViewerSettings,
    on_navigate: impl FnMut(&str, &MenuItem) + 'static,
) -> SelectionController {
    let controller = SelectionController::new(settings.config.clone());
    let mut controller = if settings.config.enable_router_integration {
        let router = RecordingRouter::new(
            MemoryRouter::at(settings.active_path.clone()),
            settings.menus.clone(),
            on_navigate,
        );
        controller.with_router(router)
    } else {
        controller
            .with_initial_path(settings.active_path.clone())
            .with_on_navigate(on_navigate)
    };
    controller.mount(&settings.menus);
    controller
}
