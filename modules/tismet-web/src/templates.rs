use std::collections::BTreeMap;

use bytesize::ByteSize;
use tismet_nav::fragment::html_escape;
use tismet_nav::{FragmentRegistry, PageView};

use crate::about::{format_duration, About};

/// Render the admin about page.
pub fn render_about(page: &PageView, fragments: &FragmentRegistry, about: &About) -> String {
    let mut rows = String::new();
    for (label, info) in about.dirs() {
        let class = page
            .full_class(info.avail_fraction())
            .map(|c| c.as_str())
            .unwrap_or_default();
        let percent = info
            .avail_fraction()
            .map(|f| format!("{:.0}%", f * 100.0))
            .unwrap_or_else(|| "-".to_string());
        rows.push_str(&format!(
            r#"<tr><th>{label}</th><td>{path}</td><td class="{class}">{avail} of {total} free ({percent})</td></tr>"#,
            path = html_escape(&info.path.display().to_string()),
            avail = ByteSize(info.space_avail),
            total = ByteSize(info.space_total),
        ));
    }

    let content = format!(
        r#"<div class="container">
<h2>About</h2>
<table class="about">
<tr><th>Version</th><td colspan="2">{version}</td></tr>
<tr><th>Running as</th><td colspan="2">{mode}</td></tr>
<tr><th>Started</th><td colspan="2">{start}</td></tr>
<tr><th>Uptime</th><td colspan="2">{uptime}</td></tr>
<tr><th>Root</th><td colspan="2">{root}</td></tr>
{rows}
</table>
</div>"#,
        version = html_escape(about.version),
        mode = if about.service { "service" } else { "console" },
        start = about.start_time.format("%Y-%m-%d %H:%M:%S UTC"),
        uptime = format_duration(about.uptime()),
        root = html_escape(&about.root_dir.display().to_string()),
    );

    build_page(page, fragments, &content)
}

/// Render the request counters page.
pub fn render_counters(
    page: &PageView,
    fragments: &FragmentRegistry,
    counters: &BTreeMap<String, u64>,
) -> String {
    let mut rows = String::new();
    if counters.is_empty() {
        rows.push_str(r#"<tr><td colspan="2">No requests counted yet.</td></tr>"#);
    }
    for (route, count) in counters {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{count}</td></tr>",
            html_escape(route)
        ));
    }

    let content = format!(
        r#"<div class="container"><h2>Counters</h2><table class="counters"><tr><th>Route</th><th>Requests</th></tr>{rows}</table></div>"#
    );

    build_page(page, fragments, &content)
}

// --- Helpers ---

fn build_page(page: &PageView, fragments: &FragmentRegistry, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<base href="/admin/">
<title>{title} - tismet</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.navbar{{display:flex;align-items:center;padding:8px 24px;}}
.navtop{{background:#1a1a1a;}}
.navsub{{background:#e0e0e0;}}
.navbar-brand{{color:#fff;font-weight:600;text-decoration:none;margin-right:24px;}}
.nav{{display:flex;list-style:none;gap:16px;}}
.nav-link{{color:#888;text-decoration:none;font-size:14px;}}
.navtop .active .nav-link{{color:#fff;}}
.navsub .active .nav-link{{color:#1a1a1a;font-weight:600;}}
.container{{max-width:960px;margin:0 auto;padding:24px;}}
h2{{margin-bottom:16px;}}
table{{border-collapse:collapse;width:100%;font-size:14px;}}
th,td{{text-align:left;padding:6px 8px;border-bottom:1px solid #eee;}}
.bg-disabled{{background:#eee;color:#888;}}
.bg-error{{background:#fce4ec;}}
.bg-recent{{background:#e8f5e9;}}
.bg-old{{background:#e3f2fd;}}
</style>
</head>
<body>
{chrome}
{content}
</body>
</html>"#,
        title = html_escape(page.title()),
        chrome = fragments.render_included(page),
    )
}
