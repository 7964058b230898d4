//! Sample Aggregator
//!
//! One pass: newest-mod listing, batch lookup of the full records, sort by
//! approval time and derive each project's approval delay.

use std::collections::HashMap;
use std::sync::Arc;

use crate::modrinth::{ModrinthResult, Transport};

use super::size::SampleSize;
use super::types::{EnrichedProject, ProjectRecord, SearchResponse};

/// `[["project_type:mod"]]`, percent-encoded
const MOD_FACETS: &str = "%5B%5B%22project_type%3Amod%22%5D%5D";

/// Collects and enriches a sample of the newest mods
pub struct SampleAggregator {
    transport: Arc<dyn Transport>,
}

impl SampleAggregator {
    /// Create a new aggregator over the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Run one aggregation pass.
    ///
    /// Returns the sampled projects, most recently approved first. Any
    /// failure aborts the pass; no partial result is returned.
    pub async fn collect(&self, size: SampleSize) -> ModrinthResult<Vec<EnrichedProject>> {
        let listing = self.transport.call(&search_path(size)).await?;
        let search: SearchResponse = serde_json::from_value(listing)?;

        let ids: Vec<String> = search.hits.iter().map(|h| h.project_id.clone()).collect();
        let icons: HashMap<String, String> = search
            .hits
            .into_iter()
            .filter_map(|h| {
                let icon = h.icon_url.filter(|url| !url.is_empty())?;
                Some((h.project_id, icon))
            })
            .collect();

        tracing::debug!(hits = ids.len(), "Listing received");

        let lookup = self.transport.call(&projects_path(&ids)?).await?;
        let mut records: Vec<ProjectRecord> = serde_json::from_value(lookup)?;

        // Stable: equal approval times keep lookup order.
        records.sort_by(|a, b| b.approved.cmp(&a.approved));

        Ok(records
            .into_iter()
            .map(|r| {
                let icon = icons.get(&r.id).map(String::as_str);
                EnrichedProject::from_record(r, icon)
            })
            .collect())
    }
}

/// Listing path for the `size` newest mods
pub fn search_path(size: SampleSize) -> String {
    format!("search?index=newest&limit={}&facets={}", size, MOD_FACETS)
}

/// Batch lookup path for `ids`
pub fn projects_path(ids: &[String]) -> ModrinthResult<String> {
    let json = serde_json::to_string(ids)?;
    Ok(format!("projects?ids={}", urlencoding::encode(&json)))
}

/// Mean approval delay in milliseconds; zero for an empty sample
pub fn average_delay(projects: &[EnrichedProject]) -> f64 {
    if projects.is_empty() {
        return 0.0;
    }

    let total: f64 = projects.iter().map(|p| p.delay_ms as f64).sum();
    total / projects.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modrinth::ModrinthError;
    use crate::sample::types::PLACEHOLDER_ICON;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Serves canned documents by path prefix and records every call
    struct FakeTransport {
        listing: ModrinthResult<Value>,
        lookup: ModrinthResult<Value>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn new(listing: Value, lookup: Value) -> Self {
            Self {
                listing: Ok(listing),
                lookup: Ok(lookup),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn replay(result: &ModrinthResult<Value>) -> ModrinthResult<Value> {
        match result {
            Ok(v) => Ok(v.clone()),
            Err(ModrinthError::RequestFailed(m)) => Err(ModrinthError::RequestFailed(m.clone())),
            Err(ModrinthError::MalformedResponse(m)) => {
                Err(ModrinthError::MalformedResponse(m.clone()))
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn call(&self, path: &str) -> ModrinthResult<Value> {
            self.calls.lock().unwrap().push(path.to_string());
            if path.starts_with("search") {
                replay(&self.listing)
            } else {
                replay(&self.lookup)
            }
        }
    }

    fn project(id: &str, approved: &str, queued: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Mod {id}"),
            "approved": approved,
            "queued": queued,
        })
    }

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn enriched(delay_ms: i64) -> EnrichedProject {
        EnrichedProject {
            id: "x".to_string(),
            title: "X".to_string(),
            icon_url: PLACEHOLDER_ICON.to_string(),
            approved: ts("2024-01-01T00:00:00Z"),
            queued: ts("2024-01-01T00:00:00Z"),
            delay_ms,
        }
    }

    #[tokio::test]
    async fn test_collect_sorts_and_enriches() {
        let listing = json!({"hits": [
            {"project_id": "a", "icon_url": "https://cdn/a.png"},
            {"project_id": "b", "icon_url": null},
            {"project_id": "c", "icon_url": ""},
        ]});
        let lookup = json!([
            project("a", "2024-03-01T10:00:00Z", "2024-03-01T08:00:00Z"),
            project("b", "2024-03-03T00:00:00Z", "2024-03-01T00:00:00Z"),
            project("c", "2024-03-02T00:00:00Z", "2024-03-02T00:00:30Z"),
        ]);
        let transport = Arc::new(FakeTransport::new(listing, lookup));
        let aggregator = SampleAggregator::new(transport.clone());

        let projects = aggregator.collect(SampleSize::DEFAULT).await.unwrap();

        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert!(projects.windows(2).all(|w| w[0].approved >= w[1].approved));

        assert_eq!(projects[0].delay_ms, 2 * 86_400_000);
        assert_eq!(projects[1].delay_ms, -30_000);
        assert_eq!(projects[2].delay_ms, 2 * 3_600_000);
        for p in &projects {
            assert_eq!(p.delay_ms, (p.approved - p.queued).num_milliseconds());
        }

        assert_eq!(projects[0].icon_url, PLACEHOLDER_ICON);
        assert_eq!(projects[1].icon_url, PLACEHOLDER_ICON);
        assert_eq!(projects[2].icon_url, "https://cdn/a.png");
        assert_eq!(projects[0].title, "Mod b");
    }

    #[tokio::test]
    async fn test_collect_issues_listing_then_one_lookup() {
        let listing = json!({"hits": [
            {"project_id": "a", "icon_url": null},
            {"project_id": "b", "icon_url": null},
        ]});
        let transport = Arc::new(FakeTransport::new(listing, json!([])));
        let aggregator = SampleAggregator::new(transport.clone());

        let size = SampleSize::new(2).unwrap();
        let projects = aggregator.collect(size).await.unwrap();
        assert!(projects.is_empty());

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            "search?index=newest&limit=2&facets=%5B%5B%22project_type%3Amod%22%5D%5D"
        );
        assert_eq!(calls[1], "projects?ids=%5B%22a%22%2C%22b%22%5D");
    }

    #[tokio::test]
    async fn test_equal_approval_keeps_lookup_order() {
        let listing = json!({"hits": []});
        let lookup = json!([
            project("first", "2024-03-01T00:00:00Z", "2024-02-01T00:00:00Z"),
            project("newer", "2024-03-05T00:00:00Z", "2024-02-01T00:00:00Z"),
            project("second", "2024-03-01T00:00:00Z", "2024-02-02T00:00:00Z"),
        ]);
        let aggregator = SampleAggregator::new(Arc::new(FakeTransport::new(listing, lookup)));

        let projects = aggregator.collect(SampleSize::DEFAULT).await.unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["newer", "first", "second"]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_last_icon_wins() {
        let listing = json!({"hits": [
            {"project_id": "dup", "icon_url": "https://cdn/old.png"},
            {"project_id": "dup", "icon_url": "https://cdn/new.png"},
        ]});
        let lookup = json!([project("dup", "2024-03-01T00:00:00Z", "2024-02-01T00:00:00Z")]);
        let transport = Arc::new(FakeTransport::new(listing, lookup));
        let aggregator = SampleAggregator::new(transport.clone());

        let projects = aggregator.collect(SampleSize::DEFAULT).await.unwrap();
        assert_eq!(projects[0].icon_url, "https://cdn/new.png");
        assert_eq!(transport.calls()[1], "projects?ids=%5B%22dup%22%2C%22dup%22%5D");
    }

    #[tokio::test]
    async fn test_failed_lookup_aborts_pass() {
        let transport = FakeTransport {
            listing: Ok(json!({"hits": [{"project_id": "a", "icon_url": null}]})),
            lookup: Err(ModrinthError::RequestFailed("503 Service Unavailable".to_string())),
            calls: Mutex::new(Vec::new()),
        };
        let aggregator = SampleAggregator::new(Arc::new(transport));

        let err = aggregator.collect(SampleSize::DEFAULT).await.unwrap_err();
        match err {
            ModrinthError::RequestFailed(msg) => assert_eq!(msg, "503 Service Unavailable"),
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_listing_skips_lookup() {
        let transport = Arc::new(FakeTransport {
            listing: Err(ModrinthError::RequestFailed("500 Internal Server Error".to_string())),
            lookup: Ok(json!([])),
            calls: Mutex::new(Vec::new()),
        });
        let aggregator = SampleAggregator::new(transport.clone());

        assert!(aggregator.collect(SampleSize::DEFAULT).await.is_err());
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_record_aborts_pass() {
        let listing = json!({"hits": [{"project_id": "a"}, {"project_id": "b"}]});
        let lookup = json!([
            project("a", "2024-03-01T00:00:00Z", "2024-02-01T00:00:00Z"),
            {"id": "b", "title": "Mod b", "queued": "2024-02-01T00:00:00Z"},
        ]);
        let aggregator = SampleAggregator::new(Arc::new(FakeTransport::new(listing, lookup)));

        let err = aggregator.collect(SampleSize::DEFAULT).await.unwrap_err();
        assert!(matches!(err, ModrinthError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_listing_without_hits_is_malformed() {
        let aggregator =
            SampleAggregator::new(Arc::new(FakeTransport::new(json!({"total": 0}), json!([]))));

        let err = aggregator.collect(SampleSize::DEFAULT).await.unwrap_err();
        assert!(matches!(err, ModrinthError::MalformedResponse(_)));
    }

    #[test]
    fn test_average_delay() {
        assert_eq!(average_delay(&[]), 0.0);
        assert_eq!(average_delay(&[enriched(1000), enriched(3000)]), 2000.0);
        assert_eq!(average_delay(&[enriched(-1000), enriched(0)]), -500.0);
    }
}
