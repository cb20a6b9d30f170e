//! Default glyphs for icon tokens used in menu data.

/// Maps an icon token to a glyph. Unknown tokens fall back to the settings gear.
pub fn icon_glyph(token: &str) -> &'static str {
    match token {
        "users" => "👥",
        "shield" => "🛡",
        "fileText" => "📄",
        "package" => "📦",
        "database" => "🗄",
        "bell" => "🔔",
        _ => "⚙",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_tokens() {
        assert_eq!(icon_glyph("bell"), "🔔");
        assert_eq!(icon_glyph("settings"), "⚙");
        assert_eq!(icon_glyph("no-such-icon"), "⚙");
    }

    #[test]
    fn test_rail_items_carry_renderable_tokens() {
        let items = sidenav_core::sample_nav_items();
        let account = items.iter().find(|item| item.code == "Account").unwrap();

        // The rail renderer receives the icon token, not the section code
        assert_eq!(account.icon, "users");
        assert_eq!(icon_glyph(&account.icon), "👥");
        assert_eq!(icon_glyph(&account.code), "⚙");
        assert!(items.iter().all(|item| !item.icon.is_empty()));
    }
}
