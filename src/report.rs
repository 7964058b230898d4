//! Report driver
//!
//! Runs one aggregation pass and turns its outcome into a [`ReportView`].
//! Pipeline failures stop here: they are logged and replaced with the fixed
//! failure status.

use tracing::Instrument;

use crate::render::ReportView;
use crate::sample::{SampleAggregator, SampleSize};

/// Run one pass and build the view of its outcome
pub async fn run_pass(aggregator: &SampleAggregator, size: SampleSize) -> ReportView {
    let pass_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("pass", pass_id = %pass_id, sample_size = %size);

    async move {
        tracing::info!("{}", ReportView::analyzing(size).status.text());

        match aggregator.collect(size).await {
            Ok(projects) => {
                let view = ReportView::completed(size, &projects);
                tracing::info!(projects = projects.len(), "{}", view.status.text());
                view
            }
            Err(e) => {
                tracing::error!(error = %e, "An error occurred while collecting the sample");
                ReportView::failed(size)
            }
        }
    }
    .instrument(span)
    .await
}
