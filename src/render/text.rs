//! Plain-text rendering for terminals

use std::fmt::Write;

use super::view::ReportView;

/// Status line, then one line per project
pub fn render_text(view: &ReportView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.status.text());

    if view.projects.is_empty() {
        return out;
    }

    out.push('\n');
    let width = view
        .projects
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0);

    for record in &view.projects {
        let _ = writeln!(
            out,
            "{:<width$}  Approved in: {:<28}  {}",
            record.title,
            record.approved_in,
            record.url,
            width = width
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{EnrichedProject, SampleSize};
    use chrono::{Duration, Utc};

    #[test]
    fn test_failed_is_single_line() {
        let out = render_text(&ReportView::failed(SampleSize::DEFAULT));
        assert_eq!(out, "Failed to load data. Please try again later.\n");
    }

    #[test]
    fn test_rows_follow_status() {
        let approved = Utc::now();
        let project = EnrichedProject {
            id: "abc".to_string(),
            title: "Lithium".to_string(),
            icon_url: String::new(),
            approved,
            queued: approved - Duration::days(2),
            delay_ms: 2 * 86_400_000,
        };
        let out = render_text(&ReportView::completed(SampleSize::DEFAULT, &[project]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Average review time: 2 days.");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Lithium  Approved in: 2 days"));
        assert!(lines[2].ends_with("https://modrinth.com/project/abc"));
    }
}
