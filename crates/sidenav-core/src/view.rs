//! Flattened, render-ready projection of the menu tree.
//!
//! The presentation layer draws exactly what [`project`] returns: groups in
//! display order, each with the visible rows of its subtree. Rows below a
//! collapsed branch are left out. Sorting is recomputed on every projection.

use crate::locale::{Locale, Localized};
use crate::model::{sorted_by_order, Menu, MenuId, MenuItem};
use crate::state::SidebarState;

/// One visible row of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub href: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub active: bool,
    pub show_badge: bool,
    pub is_new: bool,
}

/// A top-level menu group and its visible rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuGroupView {
    pub id: MenuId,
    pub label: String,
    pub icon: String,
    pub has_items: bool,
    pub expanded: bool,
    pub rows: Vec<RowView>,
}

/// Projects `menus` under `state` and `locale`.
pub fn project(menus: &[Menu], state: &SidebarState, locale: Locale) -> Vec<MenuGroupView> {
    sorted_by_order(menus)
        .into_iter()
        .map(|menu| {
            let expanded = state.is_menu_expanded(menu);
            let mut rows = Vec::new();
            if expanded {
                push_rows(&menu.items, 0, state, locale, &mut rows);
            }
            MenuGroupView {
                id: menu.id,
                label: menu.display_name(locale).to_string(),
                icon: menu.icon.clone(),
                has_items: menu.has_items(),
                expanded,
                rows,
            }
        })
        .collect()
}

fn push_rows(
    items: &[MenuItem],
    depth: usize,
    state: &SidebarState,
    locale: Locale,
    rows: &mut Vec<RowView>,
) {
    for item in sorted_by_order(items) {
        let expanded = item.is_branch() && state.is_item_expanded(item);
        rows.push(RowView {
            id: item.id.clone(),
            label: item.display_name(locale).to_string(),
            icon: item.icon.clone(),
            href: item.href.clone(),
            depth,
            has_children: item.is_branch(),
            expanded,
            active: state.is_item_active(item),
            show_badge: item.show_badge,
            is_new: item.is_new,
        });
        if expanded {
            push_rows(&item.children, depth + 1, state, locale, rows);
        }
    }
}
