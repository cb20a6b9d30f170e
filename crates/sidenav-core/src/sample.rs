//! Built-in sample tree and rail entries for demos and tests.

use crate::model::{Menu, MenuItem, NavItem};

/// Two populated groups (three levels deep) and one empty group.
pub fn sample_menus() -> Vec<Menu> {
    vec![
        Menu::new(1, "USER_MGMT", "User Management")
            .with_name_kh("ការគ្រប់គ្រងអ្នកប្រើប្រាស់")
            .with_short_names("Users", "អ្នកប្រើ")
            .with_descriptions("Manage users and permissions", "គ្រប់គ្រងអ្នកប្រើប្រាស់និងការអនុញ្ញាត")
            .with_icon("users")
            .with_href("/user-management")
            .with_order(1)
            .with_items(vec![
                MenuItem::branch(
                    "user-roles",
                    "User Roles",
                    vec![
                        MenuItem::leaf("role-list", "Role List", "/user-management/roles/list")
                            .with_name_kh("បញ្ជីតួនាទី")
                            .with_icon("fileText")
                            .with_order(1),
                        MenuItem::leaf(
                            "role-permissions",
                            "Role Permissions",
                            "/user-management/roles/permissions",
                        )
                        .with_name_kh("សិទ្ធិតួនាទី")
                        .with_icon("fileText")
                        .with_order(2)
                        .with_badge(),
                    ],
                )
                .with_href("/user-management/roles")
                .with_name_kh("តួនាទីអ្នកប្រើប្រាស់")
                .with_icon("shield")
                .with_order(1),
                MenuItem::branch(
                    "user-accounts",
                    "User Accounts",
                    vec![
                        MenuItem::leaf("account-list", "Account List", "/user-management/accounts/list")
                            .with_name_kh("បញ្ជីគណនី")
                            .with_icon("fileText")
                            .with_order(1),
                        MenuItem::leaf(
                            "account-pending",
                            "Pending Approval",
                            "/user-management/accounts/pending",
                        )
                        .with_name_kh("រង់ចាំការអនុម័ត")
                        .with_icon("fileText")
                        .with_order(2)
                        .with_badge(),
                    ],
                )
                .with_href("/user-management/accounts")
                .with_name_kh("គណនីអ្នកប្រើប្រាស់")
                .with_icon("users")
                .with_order(2)
                .marked_new(),
            ]),
        Menu::new(2, "SYSTEM_CONFIG", "System Configuration")
            .with_name_kh("ការកំណត់ប្រព័ន្ធ")
            .with_short_names("Config", "កំណត់")
            .with_descriptions("Configure system settings", "កំណត់ការកំណត់ប្រព័ន្ធ")
            .with_icon("settings")
            .with_href("/system-config")
            .with_order(2)
            .with_items(vec![
                MenuItem::leaf("general-settings", "General Settings", "/system-config/general")
                    .with_name_kh("ការកំណត់ទូទៅ")
                    .with_icon("settings")
                    .with_order(1),
                MenuItem::leaf("database-settings", "Database Settings", "/system-config/database")
                    .with_name_kh("ការកំណត់មូលដ្ឋានទិន្នន័យ")
                    .with_icon("database")
                    .with_order(2),
            ]),
        Menu::new(3, "NOTIFICATIONS", "Notifications")
            .with_name_kh("ការជូនដំណឹង")
            .with_short_names("Notifications", "ដំណឹង")
            .with_descriptions("Manage notifications", "គ្រប់គ្រងការជូនដំណឹង")
            .with_icon("bell")
            .with_href("/notifications")
            .with_order(3),
    ]
}

/// Rail sections shown beside the sample tree.
pub fn sample_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Account", "Account").with_icon("users"),
        NavItem::new("Configs", "Configs").with_icon("settings"),
        NavItem::new("Product", "Product").with_icon("package"),
        NavItem::new("System", "System").with_icon("settings"),
        NavItem::new("Requests", "Requests").with_icon("fileText"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{count_items, validate_tree};

    #[test]
    fn test_sample_is_well_formed() {
        let menus = sample_menus();
        assert!(validate_tree(&menus).is_ok());
        assert_eq!(count_items(&menus), 8);
        assert!(!menus[2].has_items());
    }
}
