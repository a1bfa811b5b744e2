//! The load cycle: fetch the three snapshot documents and hand them to the dashboard

use crate::errors::{DashboardError, Result};
use crate::models::{Meta, Repository, Service};
use crate::source::SnapshotSource;
use crate::state::AppState;
use actix_web::web;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

pub const SERVICES_PATH: &str = "data/services.json";
pub const REPOS_PATH: &str = "data/repos.json";
pub const META_PATH: &str = "data/meta.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub services: Vec<Service>,
    pub repos: Vec<Repository>,
    pub meta: Meta,
}

/// Fetch services, repositories and metadata one after another. The first
/// failure aborts the cycle.
pub async fn load_snapshot(source: &dyn SnapshotSource) -> Result<Snapshot> {
    let services = fetch_json(source, SERVICES_PATH).await?;
    let repos = fetch_json(source, REPOS_PATH).await?;
    let meta = fetch_json(source, META_PATH).await?;

    Ok(Snapshot { services, repos, meta })
}

async fn fetch_json<T: DeserializeOwned>(source: &dyn SnapshotSource, path: &str) -> Result<T> {
    let body = source.fetch(path).await?;
    debug!("Fetched {} ({} bytes)", path, body.len());

    serde_json::from_slice(&body).map_err(|source| DashboardError::Json {
        path: path.to_string(),
        source,
    })
}

/// Run one load cycle and publish the outcome. Cycles run one at a time; the
/// dashboard write lock is only taken once the fetches are done.
pub async fn refresh(state: &AppState) {
    let _cycle = state.load_cycle.lock().await;
    info!("Loading snapshots from {}", state.source.describe());
    let result = load_snapshot(state.source.as_ref()).await;

    state.dashboard.write().await.apply_load(result);
}

pub async fn refresh_loop(data: web::Data<AppState>, interval: Duration) {
    info!("Starting snapshot refresh task every {}s", interval.as_secs());

    loop {
        sleep(interval).await;
        refresh(&data).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::LoadStatus;
    use crate::source::{DirectorySource, HttpSource, SnapshotSource};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SERVICES: &str = r#"[
        {"name": "svc-a", "status": "True", "url": "u", "region": "r"},
        {"name": "svc-b", "status": "False", "url": "u", "region": "r", "repo": null}
    ]"#;
    const REPOS: &str = r#"[{"name": "KOMSA", "url": "https://github.com/mbrt26/KOMSA", "description": "", "updatedAt": "2024-01-15T10:30:00Z", "cloudRunService": "crm-komsa"}]"#;
    const META: &str = r#"{"lastUpdate": "2024-01-15T10:30:00.000001Z", "project": "appsindunnova"}"#;

    async fn mount(server: &MockServer, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_snapshot_over_http() {
        let server = MockServer::start().await;
        mount(&server, "/data/services.json", 200, SERVICES).await;
        mount(&server, "/data/repos.json", 200, REPOS).await;
        mount(&server, "/data/meta.json", 200, META).await;

        let source = HttpSource::new(&server.uri(), None).unwrap();
        let snapshot = load_snapshot(&source).await.unwrap();

        assert_eq!(snapshot.services.len(), 2);
        assert_eq!(snapshot.repos.len(), 1);
        assert_eq!(snapshot.meta.project.as_deref(), Some("appsindunnova"));
    }

    #[tokio::test]
    async fn test_failure_stops_remaining_fetches() {
        let server = MockServer::start().await;
        mount(&server, "/data/services.json", 200, SERVICES).await;
        mount(&server, "/data/repos.json", 500, "").await;
        Mock::given(method("GET"))
            .and(path("/data/meta.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(META))
            .expect(0)
            .mount(&server)
            .await;

        let source = HttpSource::new(&server.uri(), None).unwrap();
        let err = load_snapshot(&source).await.unwrap_err();
        assert!(matches!(err, DashboardError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_load_failure() {
        let server = MockServer::start().await;
        mount(&server, "/data/services.json", 200, SERVICES).await;
        mount(&server, "/data/repos.json", 200, REPOS).await;
        mount(&server, "/data/meta.json", 200, "<html>not json</html>").await;

        let source = HttpSource::new(&server.uri(), None).unwrap();
        match load_snapshot(&source).await.unwrap_err() {
            DashboardError::Json { path, .. } => assert_eq!(path, META_PATH),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_refresh_publishes_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(&Config::default(), Arc::new(DirectorySource::new(dir.path()))).unwrap();

        refresh(&state).await;
        assert_eq!(state.dashboard.read().await.status(), LoadStatus::Failed);

        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join(SERVICES_PATH), SERVICES).unwrap();
        std::fs::write(dir.path().join(REPOS_PATH), REPOS).unwrap();
        std::fs::write(dir.path().join(META_PATH), META).unwrap();

        refresh(&state).await;
        let dashboard = state.dashboard.read().await;
        assert_eq!(dashboard.status(), LoadStatus::Ready);
        assert_eq!(dashboard.summary().unwrap().healthy_services, 1);
    }

    /// First fetch stalls and then fails; every later fetch succeeds
    struct StallingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SnapshotSource for StallingSource {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                sleep(Duration::from_millis(300)).await;
                return Err(DashboardError::Status {
                    path: path.to_string(),
                    status: 503,
                });
            }

            let body = match path {
                SERVICES_PATH => SERVICES,
                REPOS_PATH => REPOS,
                _ => META,
            };
            Ok(body.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "stalling".to_string()
        }
    }

    #[tokio::test]
    async fn test_slow_initial_cycle_does_not_override_later_reload() {
        let source = Arc::new(StallingSource {
            calls: AtomicUsize::new(0),
        });
        let state = Arc::new(AppState::new(&Config::default(), source).unwrap());

        let initial = {
            let state = state.clone();
            tokio::spawn(async move { refresh(&state).await })
        };
        sleep(Duration::from_millis(50)).await;

        refresh(&state).await;
        initial.await.unwrap();

        let dashboard = state.dashboard.read().await;
        assert_eq!(dashboard.status(), LoadStatus::Ready);
        assert_eq!(dashboard.summary().unwrap().total_services, 2);
    }
}
