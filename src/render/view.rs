//! Report view model
//!
//! What the renderers draw: a status line and the ordered project list.

use serde::Serialize;

use crate::format::format_duration;
use crate::sample::{average_delay, EnrichedProject, SampleSize};

/// Shown in place of the status when a pass fails
pub const FAILURE_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Status line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    /// Pass in progress
    Analyzing { sample_size: SampleSize },
    /// Pass finished; `average` is the emphasized duration
    Average { average_ms: f64, average: String },
    /// Pass failed; the cause is only logged
    Failed,
}

impl Status {
    /// Status line with the duration emphasis split out.
    ///
    /// Returns `(before, emphasized, after)`; plain statuses have no
    /// emphasized part.
    pub fn segments(&self) -> (String, Option<&str>, &'static str) {
        match self {
            Status::Analyzing { sample_size } => (
                format!("Analyzing the {} newest mods...", sample_size),
                None,
                "",
            ),
            Status::Average { average, .. } => {
                ("Average review time: ".to_string(), Some(average.as_str()), ".")
            }
            Status::Failed => (FAILURE_MESSAGE.to_string(), None, ""),
        }
    }

    /// Status line as plain text
    pub fn text(&self) -> String {
        let (before, emphasized, after) = self.segments();
        format!("{}{}{}", before, emphasized.unwrap_or(""), after)
    }
}

/// One project row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub url: String,
    pub icon_url: String,
    pub delay_ms: i64,
    /// Formatted delay, e.g. "2 days and 3 hours"
    pub approved_in: String,
}

impl From<&EnrichedProject> for DisplayRecord {
    fn from(p: &EnrichedProject) -> Self {
        Self {
            title: p.title.clone(),
            url: p.project_url(),
            icon_url: p.icon_url.clone(),
            delay_ms: p.delay_ms,
            approved_in: format_duration(p.delay_ms as f64),
        }
    }
}

/// Everything one render needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub sample_size: SampleSize,
    pub status: Status,
    pub projects: Vec<DisplayRecord>,
}

impl ReportView {
    /// View shown while a pass is running
    pub fn analyzing(sample_size: SampleSize) -> Self {
        Self {
            sample_size,
            status: Status::Analyzing { sample_size },
            projects: Vec::new(),
        }
    }

    /// View of a finished pass
    pub fn completed(sample_size: SampleSize, projects: &[EnrichedProject]) -> Self {
        let average_ms = average_delay(projects);
        Self {
            sample_size,
            status: Status::Average {
                average_ms,
                average: format_duration(average_ms),
            },
            projects: projects.iter().map(DisplayRecord::from).collect(),
        }
    }

    /// View of a failed pass: fixed message, no list
    pub fn failed(sample_size: SampleSize) -> Self {
        Self {
            sample_size,
            status: Status::Failed,
            projects: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, Status::Failed)
    }
}
