//! Route handlers
//!
//! - GET / - Report page, one fresh pass per load
//! - GET /api/report - Same pass as JSON
//! - GET /health - Liveness

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::state::AppState;
use crate::render::{Presenter, ReportView, Theme};
use crate::report::run_pass;
use crate::sample::SampleSize;

/// Page query parameters.
///
/// Kept as raw strings so bad values fall back instead of rejecting.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub sample: Option<String>,
    pub theme: Option<String>,
}

impl PageParams {
    fn sample_size(&self) -> SampleSize {
        SampleSize::resolve(self.sample.as_deref())
    }
}

/// GET /?sample=<n>&theme=<light|dark>
pub async fn report_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let size = params.sample_size();
    let theme = params
        .theme
        .as_deref()
        .and_then(|t| t.parse::<Theme>().ok())
        .unwrap_or(state.default_theme);

    let view = run_pass(&state.aggregator, size).await;

    let presenter = Presenter::new(theme);
    Html(presenter.render_page(&view, &presenter.toggle_href(size)))
}

/// GET /api/report?sample=<n>
///
/// 502 when the upstream pass failed.
pub async fn report_json(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> (StatusCode, Json<ReportView>) {
    let view = run_pass(&state.aggregator, params.sample_size()).await;

    let status = if view.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Json(view))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
