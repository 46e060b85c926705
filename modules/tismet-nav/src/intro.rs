use std::sync::Arc;

use tracing::debug;

use crate::error::NavError;
use crate::nav::{
    nav_sub_entries, nav_top_entries, ADMIN, NAVBAR_ADMIN_FRAGMENT, NAVTOP_FRAGMENT, SOURCE_HOST,
};
use crate::status::full_class;
use crate::view::{PageHost, ViewOpts};

const NAV_TOP_KEY: &str = "navTop";
const NAV_SUB_KEY: &str = "navSub";

/// Set up the top-level nav bar for a page, with `selected` as the active
/// entry. `selected` is not checked against the entry list; an unknown name
/// just highlights nothing.
pub fn nav_top_intro<H>(page: &mut H, selected: &str) -> Result<(), NavError>
where
    H: PageHost + ?Sized,
{
    if !page.begin_once(NAV_TOP_KEY) {
        return Err(NavError::AlreadyInitialized(NAV_TOP_KEY));
    }

    let selected = selected.to_string();
    debug!(selected = %selected, "Top nav intro");
    page.add_opts(ViewOpts {
        nav_top_selected: Some(Arc::new(move || selected.clone())),
        nav_top: Some(Arc::new(nav_top_entries)),
        source_host: Some(Arc::new(|| SOURCE_HOST.to_string())),
        ..Default::default()
    });
    page.include_html_fragment(NAVTOP_FRAGMENT);
    Ok(())
}

/// Set up an admin section page: top nav pinned to "Admin", `selected` as
/// the active admin entry, plus the `fullClass` status mapping.
pub fn admin_intro<H>(page: &mut H, selected: &str) -> Result<(), NavError>
where
    H: PageHost + ?Sized,
{
    nav_top_intro(page, ADMIN)?;
    if !page.begin_once(NAV_SUB_KEY) {
        return Err(NavError::AlreadyInitialized(NAV_SUB_KEY));
    }

    let selected = selected.to_string();
    debug!(selected = %selected, "Admin nav intro");
    page.add_opts(ViewOpts {
        nav_sub_selected: Some(Arc::new(move || selected.clone())),
        nav_sub: Some(Arc::new(nav_sub_entries)),
        full_class: Some(Arc::new(full_class)),
        ..Default::default()
    });
    page.include_html_fragment(NAVBAR_ADMIN_FRAGMENT);
    Ok(())
}
