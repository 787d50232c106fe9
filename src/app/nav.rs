#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        href: "/",
        icon: "▦",
    },
    NavItem {
        label: "Inbox",
        href: "/messages",
        icon: "✉",
    },
    NavItem {
        label: "Projects",
        href: "/projects",
        icon: "▤",
    },
];

/// The root item only matches itself; the others also match nested routes.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

/// Heading shown in the dashboard header for a route.
pub fn page_title(pathname: &str) -> &'static str {
    match pathname {
        "/" => "Dashboard",
        "/projects" => "Projects",
        p if p.starts_with("/projects/create") => "Create Project",
        p if p.starts_with("/projects/") => "Edit Project",
        _ => "Admin Panel",
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;
