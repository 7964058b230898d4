//! HTML rendering of the report page

use std::fmt::Write;

use super::theme::Theme;
use super::view::ReportView;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: var(--background-color); color: var(--text-color); }
main { max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; }
header { display: flex; justify-content: space-between; align-items: center; }
#status strong { color: var(--data-color); }
#theme-toggle { text-decoration: none; font-size: 1.5rem; }
.card { display: flex; gap: 1rem; align-items: center; background: var(--panel-color); border-radius: 0.5rem; padding: 0.75rem; margin: 0.5rem 0; }
.card-icon { width: 64px; height: 64px; border-radius: 0.5rem; }
.card-title { color: var(--text-color); font-weight: 600; }
.card-time { color: var(--subtext-color); margin: 0.25rem 0 0; }
"#;

/// Escape text for use in element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete page.
///
/// `toggle_href` links the theme toggle; without it no toggle is drawn.
pub fn render_page(view: &ReportView, theme: Theme, toggle_href: Option<&str>) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Modrinth review time</title>\n<style>\n:root {");
    for (key, value) in theme.palette() {
        let _ = write!(page, " {}: {};", key, value);
    }
    page.push_str(" }");
    page.push_str(STYLE);
    page.push_str("</style>\n</head>\n<body>\n<main>\n<header>\n<h1>Modrinth review time</h1>\n");

    if let Some(href) = toggle_href {
        let _ = writeln!(
            page,
            "<a id=\"theme-toggle\" href=\"{}\">{}</a>",
            escape(href),
            theme.toggle_icon()
        );
    }
    page.push_str("</header>\n");

    let (before, emphasized, after) = view.status.segments();
    let _ = write!(page, "<p id=\"status\">{}", escape(&before));
    if let Some(text) = emphasized {
        let _ = write!(page, "<strong>{}</strong>", escape(text));
    }
    let _ = writeln!(page, "{}</p>", escape(after));

    page.push_str("<div id=\"mod-list\">\n");
    for record in &view.projects {
        let _ = writeln!(
            page,
            concat!(
                "<div class=\"card\"><img class=\"card-icon\" src=\"{icon}\" alt=\"\">",
                "<div class=\"card-text\"><a class=\"card-title\" href=\"{url}\" target=\"_blank\">{title}</a>",
                "<p class=\"card-time\">Approved in: {time}</p></div></div>"
            ),
            icon = escape(&record.icon_url),
            url = escape(&record.url),
            title = escape(&record.title),
            time = escape(&record.approved_in),
        );
    }
    page.push_str("</div>\n</main>\n</body>\n</html>\n");

    page
}
