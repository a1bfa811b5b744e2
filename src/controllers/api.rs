use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::services::loader::refresh;
use crate::state::AppState;

// Counters as JSON; `summary` is null until a load cycle has succeeded
pub async fn get_summary(data: web::Data<AppState>) -> impl Responder {
    let dashboard = data.dashboard.read().await;

    HttpResponse::Ok().json(json!({
        "status": dashboard.status(),
        "summary": dashboard.summary(),
        "lastUpdate": dashboard.meta().last_update,
    }))
}

// Re-run the load cycle, the equivalent of reloading the page
pub async fn reload(data: web::Data<AppState>) -> impl Responder {
    info!("Reload requested");
    refresh(&data).await;

    let dashboard = data.dashboard.read().await;
    HttpResponse::Ok().json(json!({ "status": dashboard.status() }))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::controllers::configure;
    use crate::services::loader::{META_PATH, REPOS_PATH, SERVICES_PATH};
    use crate::source::DirectorySource;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_summary_before_and_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let data = web::Data::new(
            AppState::new(&Config::default(), Arc::new(DirectorySource::new(dir.path()))).unwrap(),
        );
        let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "pending");
        assert!(body["summary"].is_null());

        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(
            dir.path().join(SERVICES_PATH),
            r#"[{"name": "svc-a", "status": "True", "url": "u", "region": "r"},
                {"name": "svc-b", "status": "False", "url": "u", "region": "r"}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(REPOS_PATH), "[]").unwrap();
        std::fs::write(dir.path().join(META_PATH), r#"{"lastUpdate": "2024-01-15T10:30:00Z"}"#)
            .unwrap();

        let req = test::TestRequest::post().uri("/reload").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ready");

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["summary"]["totalServices"], 2);
        assert_eq!(body["summary"]["healthyServices"], 1);
        assert_eq!(body["summary"]["unhealthyServices"], 1);
        assert_eq!(body["lastUpdate"], "2024-01-15T10:30:00Z");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let data = web::Data::new(
            AppState::new(&Config::default(), Arc::new(DirectorySource::new(dir.path()))).unwrap(),
        );
        let app = test::init_service(App::new().app_data(data).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["dashboard"], "pending");
    }
}
