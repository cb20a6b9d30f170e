//! Loading and validating menu trees.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SidenavError};
use crate::model::{Menu, MenuItem};

/// Parses a JSON array of menus.
pub fn load_menus_from_json(json: &str) -> Result<Vec<Menu>> {
    let menus: Vec<Menu> = serde_json::from_str(json)?;
    debug!(menus = menus.len(), "Parsed menu tree");
    Ok(menus)
}

/// Reads and parses a JSON menu file.
pub fn load_menus_from_path(path: impl AsRef<Path>) -> Result<Vec<Menu>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    load_menus_from_json(&content)
}

/// Reports the first duplicate menu id or item id, in traversal order.
///
/// The engine accepts duplicated trees (first match wins during lookup);
/// this check is for hosts that want to reject or warn about them.
pub fn validate_tree(menus: &[Menu]) -> Result<()> {
    let mut menu_ids = HashSet::new();
    for menu in menus {
        if !menu_ids.insert(menu.id) {
            return Err(SidenavError::DuplicateMenuId { id: menu.id.0 });
        }
    }

    let mut item_ids = HashSet::new();
    for menu in menus {
        check_items(&menu.items, &mut item_ids)?;
    }
    Ok(())
}

fn check_items<'a>(items: &'a [MenuItem], seen: &mut HashSet<&'a str>) -> Result<()> {
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(SidenavError::DuplicateItemId { id: item.id.clone() });
        }
        check_items(&item.children, seen)?;
    }
    Ok(())
}

/// Counts every item in the tree, at any depth.
pub fn count_items(menus: &[Menu]) -> usize {
    fn count(items: &[MenuItem]) -> usize {
        items.iter().map(|item| 1 + count(&item.children)).sum()
    }
    menus.iter().map(|menu| count(&menu.items)).sum()
}
