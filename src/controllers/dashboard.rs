use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;
use crate::filter::ServiceFilter;
use crate::state::AppState;

/// Values of the status selector and the search box
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl FilterQuery {
    pub fn filter(&self) -> ServiceFilter {
        ServiceFilter::new(self.status.as_deref(), self.search.as_deref())
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

// Full page
pub async fn index(
    data: web::Data<AppState>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse> {
    let filter = query.filter();
    debug!("Rendering dashboard with filter {:?}", filter);

    let body = data.dashboard.read().await.page(&data.title, &filter).render()?;
    Ok(html(body))
}

// Services grid only, re-rendered from the held state
pub async fn services_partial(
    data: web::Data<AppState>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse> {
    let filter = query.filter();
    let body = data.dashboard.read().await.services_grid(&filter).render()?;
    Ok(html(body))
}

pub async fn repos_partial(data: web::Data<AppState>) -> Result<HttpResponse> {
    let body = data.dashboard.read().await.repos_grid().render()?;
    Ok(html(body))
}
