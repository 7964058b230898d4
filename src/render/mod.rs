//! Presentation
//!
//! Turns a [`ReportView`] into text, JSON or an HTML page in a [`Theme`].
//! The served page carries its theme in the query string; the toggle links
//! to the same page with the next theme.

mod html;
mod text;
mod theme;
mod view;

pub use html::{escape, render_page};
pub use text::render_text;
pub use theme::Theme;
pub use view::{DisplayRecord, ReportView, Status, FAILURE_MESSAGE};

use crate::sample::SampleSize;

/// Output formats of the report command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

/// Renders views in the current theme
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    theme: Theme,
}

impl Presenter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Link to the served page for `size` in the next theme
    pub fn toggle_href(&self, size: SampleSize) -> String {
        format!("/?sample={}&theme={}", size, self.theme.next())
    }

    /// Render `view` in `format`
    pub fn render(
        &self,
        view: &ReportView,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(render_text(view)),
            OutputFormat::Json => serde_json::to_string_pretty(view),
            OutputFormat::Html => Ok(render_page(view, self.theme, None)),
        }
    }

    /// Render the served page, with a toggle linking to `toggle_href`
    pub fn render_page(&self, view: &ReportView, toggle_href: &str) -> String {
        render_page(view, self.theme, Some(toggle_href))
    }
}
