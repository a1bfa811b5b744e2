use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::state::AppState;

// Liveness: the server answers even while the snapshots are still loading
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let status = data.dashboard.read().await.status();
    HttpResponse::Ok().json(json!({ "status": "OK", "dashboard": status }))
}
