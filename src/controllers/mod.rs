pub mod api;
pub mod dashboard;

use actix_web::web;

use crate::services::health::health_check;

/// Register every route of the dashboard
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::index))
        .route("/partials/services", web::get().to(dashboard::services_partial))
        .route("/partials/repos", web::get().to(dashboard::repos_partial))
        .route("/api/summary", web::get().to(api::get_summary))
        .route("/reload", web::post().to(api::reload))
        .route("/health", web::get().to(health_check));
}
