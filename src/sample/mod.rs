//! Approval Sampling
//!
//! Builds the sample the report is computed from.
//!
//! ## Data Flow
//!
//! 1. Listing call: the N newest mods (identifiers and icons)
//! 2. Batch lookup: full records for every identifier, in one request
//! 3. Sort by approval time, newest first
//! 4. Enrich each record with its approval delay

mod aggregator;
mod size;
mod types;

pub use aggregator::{average_delay, projects_path, search_path, SampleAggregator};
pub use size::SampleSize;
pub use types::{EnrichedProject, ProjectRecord, ProjectSummary, SearchResponse, PLACEHOLDER_ICON};
