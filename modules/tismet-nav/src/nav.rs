use serde::Serialize;

/// Fragment holding the top-level nav bar.
pub const NAVTOP_FRAGMENT: &str = "srv/navtop.html";
/// Fragment holding the admin sub-nav bar.
pub const NAVBAR_ADMIN_FRAGMENT: &str = "navbar-admin.html";
/// Project homepage shown in the chrome.
pub const SOURCE_HOST: &str = "http://github.com/gknowles/tismet";

/// Top-level entry every admin page is pinned to.
pub const ADMIN: &str = "Admin";

/// A named link in a nav bar. Entries without `href` mark the current
/// section and are rendered as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NavEntry {
    pub fn link(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: Some(href.to_string()),
        }
    }

    pub fn current(name: &str) -> Self {
        Self {
            name: name.to_string(),
            href: None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.href.is_some()
    }

    /// Exact, case-sensitive match against the page's selected name.
    pub fn is_selected(&self, selected: &str) -> bool {
        self.name == selected
    }
}

/// Top-level destinations, in display order.
pub fn nav_top_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::link(ADMIN, "admin-about.html"),
        NavEntry::current("Graph"),
        NavEntry::link("Debug", "srv/about-counters.html"),
    ]
}

/// Admin section destinations, in display order.
pub fn nav_sub_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::link("About", "admin-about.html"),
        NavEntry::current("Backup"),
        NavEntry::current("Graphite"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[NavEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn top_entries_in_order() {
        let top = nav_top_entries();
        assert_eq!(names(&top), ["Admin", "Graph", "Debug"]);
        assert_eq!(top[0].href.as_deref(), Some("admin-about.html"));
        assert!(!top[1].is_navigable());
        assert_eq!(top[2].href.as_deref(), Some("srv/about-counters.html"));
    }

    #[test]
    fn only_about_is_navigable_in_admin() {
        let sub = nav_sub_entries();
        assert_eq!(names(&sub), ["About", "Backup", "Graphite"]);
        let navigable: Vec<_> = sub.iter().filter(|e| e.is_navigable()).collect();
        assert_eq!(navigable.len(), 1);
        assert_eq!(navigable[0].href.as_deref(), Some("admin-about.html"));
    }

    #[test]
    fn lists_are_fresh_each_call() {
        let mut first = nav_top_entries();
        first.clear();
        assert_eq!(nav_top_entries().len(), 3);
    }

    #[test]
    fn selection_is_exact() {
        let entry = NavEntry::current("Backup");
        assert!(entry.is_selected("Backup"));
        assert!(!entry.is_selected("backup"));
    }

    #[test]
    fn current_entry_serializes_without_href() {
        let json = serde_json::to_value(NavEntry::current("Graph")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Graph" }));
    }
}
