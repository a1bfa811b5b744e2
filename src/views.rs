//! View-models and templates. Everything interpolated from snapshot data is
//! HTML-escaped by askama.

use crate::format::{extract_repo_name, format_date};
use crate::models::{Repository, Service};
use askama::Template;
use chrono::FixedOffset;

pub const LOADING_SERVICES: &str = "Cargando servicios...";
pub const LOADING_REPOS: &str = "Cargando repositorios...";
pub const NO_SERVICES: &str = "No se encontraron servicios.";
pub const NO_REPOS: &str = "No se encontraron repositorios.";
pub const SERVICES_LOAD_ERROR: &str =
    "Error al cargar datos. Verifique que los archivos JSON existen.";
pub const REPOS_LOAD_ERROR: &str = "Error al cargar datos.";
pub const NO_DESCRIPTION: &str = "Sin descripción";
pub const COUNTER_PLACEHOLDER: &str = "-";
pub const LAST_UPDATE_PENDING: &str = "Cargando...";

pub fn last_update_label(formatted: &str) -> String {
    format!("Última actualización: {}", formatted)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoLink {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub name: String,
    pub healthy: bool,
    pub url: String,
    pub region: String,
    pub repo: Option<RepoLink>,
}

impl ServiceCard {
    pub fn card_class(&self) -> &'static str {
        if self.healthy { "" } else { "unhealthy" }
    }

    pub fn status_class(&self) -> &'static str {
        if self.healthy { "healthy" } else { "unhealthy" }
    }

    pub fn status_label(&self) -> &'static str {
        if self.healthy { "Activo" } else { "Inactivo" }
    }
}

impl From<&Service> for ServiceCard {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            healthy: service.is_healthy(),
            url: service.url.clone(),
            region: service.region.clone(),
            repo: service.repo.as_ref().map(|url| RepoLink {
                url: url.clone(),
                label: extract_repo_name(Some(url)),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub updated: String,
    pub cloud_run_service: Option<String>,
}

impl RepoCard {
    pub fn new(repo: &Repository, offset: &FixedOffset) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            updated: format_date(repo.updated_at.as_deref(), offset),
            cloud_run_service: repo.cloud_run_service.clone(),
        }
    }
}

/// Either a list of cards or a single placeholder message
#[derive(Template, Debug, Clone, PartialEq)]
#[template(path = "services_grid.html")]
pub struct ServicesGrid {
    pub cards: Vec<ServiceCard>,
    pub placeholder: Option<&'static str>,
}

impl ServicesGrid {
    pub fn with_cards(cards: Vec<ServiceCard>) -> Self {
        if cards.is_empty() {
            return Self::message(NO_SERVICES);
        }
        Self { cards, placeholder: None }
    }

    pub fn message(message: &'static str) -> Self {
        Self { cards: Vec::new(), placeholder: Some(message) }
    }
}

#[derive(Template, Debug, Clone, PartialEq)]
#[template(path = "repos_grid.html")]
pub struct ReposGrid {
    pub cards: Vec<RepoCard>,
    pub placeholder: Option<&'static str>,
}

impl ReposGrid {
    pub fn with_cards(cards: Vec<RepoCard>) -> Self {
        if cards.is_empty() {
            return Self::message(NO_REPOS);
        }
        Self { cards, placeholder: None }
    }

    pub fn message(message: &'static str) -> Self {
        Self { cards: Vec::new(), placeholder: Some(message) }
    }
}

/// Text of the four counter slots
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_services: String,
    pub healthy_services: String,
    pub unhealthy_services: String,
    pub total_repos: String,
}

impl Default for SummaryView {
    fn default() -> Self {
        Self {
            total_services: COUNTER_PLACEHOLDER.to_string(),
            healthy_services: COUNTER_PLACEHOLDER.to_string(),
            unhealthy_services: COUNTER_PLACEHOLDER.to_string(),
            total_repos: COUNTER_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: String,
    pub project: Option<String>,
    pub last_update: String,
    pub summary: SummaryView,
    pub status_filter: &'static str,
    pub search: String,
    pub services: ServicesGrid,
    pub repos: ReposGrid,
}
