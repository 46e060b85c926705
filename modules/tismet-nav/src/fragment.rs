use std::collections::HashMap;

use tracing::warn;

use crate::error::NavError;
use crate::nav::{NavEntry, NAVBAR_ADMIN_FRAGMENT, NAVTOP_FRAGMENT};
use crate::view::PageView;

/// Renders a fragment against a page's accessors. `None` when an accessor
/// the fragment binds to is missing.
pub type FragmentRenderer = fn(&PageView) -> Option<String>;

/// Fragment paths and the renderers that mount them.
pub struct FragmentRegistry {
    renderers: HashMap<String, FragmentRenderer>,
}

impl Default for FragmentRegistry {
    fn default() -> Self {
        Self::new()
            .register(NAVTOP_FRAGMENT, render_navtop)
            .register(NAVBAR_ADMIN_FRAGMENT, render_navbar_admin)
    }
}

impl FragmentRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn register(mut self, path: &str, renderer: FragmentRenderer) -> Self {
        self.renderers.insert(path.to_string(), renderer);
        self
    }

    pub fn render(&self, path: &str, page: &PageView) -> Result<String, NavError> {
        let renderer = self
            .renderers
            .get(path)
            .ok_or_else(|| NavError::UnknownFragment(path.to_string()))?;
        Ok(renderer(page).unwrap_or_default())
    }

    /// Render every fragment the page requested, in request order. Failed
    /// fragments are logged and leave an empty region.
    pub fn render_included(&self, page: &PageView) -> String {
        let mut out = String::new();
        for path in page.fragments() {
            match self.render(path, page) {
                Ok(html) => out.push_str(&html),
                Err(e) => warn!(page = %page.title(), error = %e, "Fragment not mounted"),
            }
        }
        out
    }
}

/// `srv/navtop.html`: binds `sourceHost`, `navTop`, `navTopSelected`.
pub fn render_navtop(page: &PageView) -> Option<String> {
    let host = page.source_host()?;
    let entries = page.nav_top()?;
    let selected = page.nav_top_selected()?;
    Some(format!(
        r#"<nav class="navbar navtop"><a class="navbar-brand" href="{host}">tismet</a><ul class="nav">{items}</ul></nav>"#,
        host = html_escape(&host),
        items = render_items(&entries, &selected),
    ))
}

/// `navbar-admin.html`: binds `navSub`, `navSubSelected`.
pub fn render_navbar_admin(page: &PageView) -> Option<String> {
    let entries = page.nav_sub()?;
    let selected = page.nav_sub_selected()?;
    Some(format!(
        r#"<nav class="navbar navsub"><ul class="nav">{}</ul></nav>"#,
        render_items(&entries, &selected),
    ))
}

fn render_items(entries: &[NavEntry], selected: &str) -> String {
    let mut items = String::new();
    for entry in entries {
        let class = if entry.is_selected(selected) {
            "nav-item active"
        } else {
            "nav-item"
        };
        let name = html_escape(&entry.name);
        match &entry.href {
            Some(href) => items.push_str(&format!(
                r#"<li class="{class}"><a class="nav-link" href="{}">{name}</a></li>"#,
                html_escape(href),
            )),
            None => items.push_str(&format!(
                r#"<li class="{class}"><span class="nav-link">{name}</span></li>"#
            )),
        }
    }
    items
}

/// Escaper for every piece of dynamic text, shared with the tismet-web pages.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::{admin_intro, nav_top_intro};
    use crate::view::PageHost;

    #[test]
    fn navtop_marks_selected_entry() {
        let mut page = PageView::new("counters");
        nav_top_intro(&mut page, "Debug").unwrap();
        let html = render_navtop(&page).unwrap();

        assert!(html.contains(r#"href="http://github.com/gknowles/tismet""#));
        assert!(html.contains(
            r#"<li class="nav-item active"><a class="nav-link" href="srv/about-counters.html">Debug</a></li>"#
        ));
        assert!(html.contains(
            r#"<li class="nav-item"><a class="nav-link" href="admin-about.html">Admin</a></li>"#
        ));
        assert!(html.contains(r#"<li class="nav-item"><span class="nav-link">Graph</span></li>"#));
    }

    #[test]
    fn unknown_selection_highlights_nothing() {
        let mut page = PageView::new("odd");
        nav_top_intro(&mut page, "Nowhere").unwrap();
        let html = render_navtop(&page).unwrap();
        assert!(!html.contains("active"));
    }

    #[test]
    fn admin_page_renders_both_bars() {
        let mut page = PageView::new("about");
        admin_intro(&mut page, "Backup").unwrap();
        let html = FragmentRegistry::default().render_included(&page);

        let top = html.find("navtop").unwrap();
        let sub = html.find("navsub").unwrap();
        assert!(top < sub);
        assert!(html.contains(r#"<li class="nav-item active"><span class="nav-link">Backup</span></li>"#));
        assert!(html.contains(
            r#"<li class="nav-item active"><a class="nav-link" href="admin-about.html">Admin</a></li>"#
        ));
    }

    #[test]
    fn missing_accessors_render_empty() {
        let mut page = PageView::new("bare");
        page.include_html_fragment(NAVBAR_ADMIN_FRAGMENT);
        assert_eq!(render_navbar_admin(&page), None);
        assert_eq!(FragmentRegistry::default().render_included(&page), "");
    }

    #[test]
    fn unknown_fragment_is_skipped() {
        let mut page = PageView::new("about");
        page.include_html_fragment("missing.html");
        nav_top_intro(&mut page, "Admin").unwrap();

        let registry = FragmentRegistry::default();
        assert_eq!(
            registry.render("missing.html", &page),
            Err(NavError::UnknownFragment("missing.html".to_string()))
        );
        let html = registry.render_included(&page);
        assert!(html.starts_with(r#"<nav class="navbar navtop">"#));
    }

    #[test]
    fn custom_renderer() {
        let registry = FragmentRegistry::new().register("title.html", |page| {
            Some(format!("<h1>{}</h1>", html_escape(page.title())))
        });
        let page = PageView::new("a<b");
        assert_eq!(registry.render("title.html", &page).unwrap(), "<h1>a&lt;b</h1>");
        assert!(registry.render(NAVTOP_FRAGMENT, &page).is_err());
    }

    #[test]
    fn escapes_html() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
