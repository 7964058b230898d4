//! Sample data types
//!
//! Raw shapes returned by the listing and lookup endpoints, plus the
//! enriched record produced for each sampled project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Icon shown when a project has none
pub const PLACEHOLDER_ICON: &str = "https://placehold.co/64x64/d1d5db/374151?text=Mod";

/// Listing response of `GET /search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<ProjectSummary>,
}

/// One hit of the listing call
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummary {
    pub project_id: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// One element of the batch lookup `GET /projects`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub approved: DateTime<Utc>,
    pub queued: DateTime<Utc>,
}

/// A sampled project with its approval delay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedProject {
    pub id: String,
    pub title: String,
    pub icon_url: String,
    pub approved: DateTime<Utc>,
    pub queued: DateTime<Utc>,
    /// `approved - queued` in milliseconds; negative when the source
    /// timestamps are inconsistent
    pub delay_ms: i64,
}

impl EnrichedProject {
    /// Join a lookup record with its listing icon
    pub fn from_record(record: ProjectRecord, icon_url: Option<&str>) -> Self {
        let delay_ms = (record.approved - record.queued).num_milliseconds();
        Self {
            icon_url: icon_url.unwrap_or(PLACEHOLDER_ICON).to_string(),
            id: record.id,
            title: record.title,
            approved: record.approved,
            queued: record.queued,
            delay_ms,
        }
    }

    /// Public project page
    pub fn project_url(&self) -> String {
        format!("https://modrinth.com/project/{}", self.id)
    }
}
