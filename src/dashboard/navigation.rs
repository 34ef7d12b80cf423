//! Static route table and the role → permission map behind the sidebar.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    All,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    pub name: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub permissions: Permission,
    pub show_in_side_menu: bool,
}

pub static MENU: [RouteConfig; 3] = [
    RouteConfig {
        name: "Home",
        route: "/dashboard/home",
        icon: "home.svg",
        permissions: Permission::All,
        show_in_side_menu: true,
    },
    RouteConfig {
        name: "Profile",
        route: "/dashboard/profile",
        icon: "profile.svg",
        permissions: Permission::All,
        show_in_side_menu: true,
    },
    RouteConfig {
        name: "Users",
        route: "/dashboard/users",
        icon: "users.svg",
        permissions: Permission::All,
        show_in_side_menu: true,
    },
];

static HIDDEN_ROUTES: [RouteConfig; 2] = [
    RouteConfig {
        name: "Add User",
        route: "/dashboard/users/add",
        icon: "user-add.svg",
        permissions: Permission::Admin,
        show_in_side_menu: false,
    },
    RouteConfig {
        name: "Edit User",
        route: "/dashboard/users/[id]/edit",
        icon: "user-edit.svg",
        permissions: Permission::Admin,
        show_in_side_menu: false,
    },
];

pub fn all_routes() -> impl Iterator<Item = &'static RouteConfig> {
    MENU.iter().chain(HIDDEN_ROUTES.iter())
}

fn role_permissions(role: &str) -> &'static [Permission] {
    match role.to_lowercase().as_str() {
        "admin" => &[Permission::All, Permission::Admin],
        // "frontend developer" and unknown roles
        _ => &[Permission::All],
    }
}

pub fn permission_access(required: Permission, role: Option<&str>) -> bool {
    if required == Permission::All {
        return true;
    }
    match role {
        Some(role) => role_permissions(role).contains(&required),
        None => false,
    }
}

pub fn is_route_active(pathname: &str, route: &str) -> bool {
    pathname == route
        || pathname
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// First route whose path is `pathname` or a parent of it.
pub fn route_by_path(pathname: &str) -> Option<&'static RouteConfig> {
    all_routes().find(|r| is_route_active(pathname, r.route))
}

/// Sidebar entries the role may see.
pub fn side_menu(role: Option<&str>) -> impl Iterator<Item = &'static RouteConfig> + '_ {
    MENU.iter()
        .filter(move |r| r.show_in_side_menu && permission_access(r.permissions, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_open_to_everyone() {
        assert!(permission_access(Permission::All, None));
        assert!(permission_access(Permission::All, Some("Intern")));
    }

    #[test]
    fn admin_requires_admin_role() {
        assert!(permission_access(Permission::Admin, Some("Admin")));
        assert!(!permission_access(Permission::Admin, Some("Frontend Developer")));
        assert!(!permission_access(Permission::Admin, Some("Unknown")));
        assert!(!permission_access(Permission::Admin, None));
    }

    #[test]
    fn active_route_matches_children_only_on_segment_boundary() {
        assert!(is_route_active("/dashboard/users", "/dashboard/users"));
        assert!(is_route_active("/dashboard/users/add", "/dashboard/users"));
        assert!(!is_route_active("/dashboard/usersettings", "/dashboard/users"));
    }

    #[test]
    fn lookup_prefers_table_order() {
        assert_eq!(route_by_path("/dashboard/users/add").unwrap().name, "Users");
        assert_eq!(route_by_path("/dashboard/profile").unwrap().name, "Profile");
        assert!(route_by_path("/login").is_none());
    }

    #[test]
    fn side_menu_lists_visible_entries() {
        let names: Vec<_> = side_menu(Some("Frontend Developer")).map(|r| r.name).collect();
        assert_eq!(names, ["Home", "Profile", "Users"]);
    }
}
