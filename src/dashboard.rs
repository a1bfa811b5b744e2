//! Dashboard controller: owns the loaded snapshot and derives every view from it

use crate::errors::Result;
use crate::filter::ServiceFilter;
use crate::format::format_date;
use crate::models::{Meta, Repository, Service};
use crate::services::loader::Snapshot;
use crate::views::{
    self, DashboardPage, RepoCard, ReposGrid, ServiceCard, ServicesGrid, SummaryView,
};
use chrono::FixedOffset;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// No load cycle has finished yet
    Pending,
    /// The last load cycle succeeded
    Ready,
    /// The last load cycle failed
    Failed,
}

/// Aggregate counters. `healthy_services + unhealthy_services == total_services`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_services: usize,
    pub healthy_services: usize,
    pub unhealthy_services: usize,
    pub total_repos: usize,
}

impl From<Summary> for SummaryView {
    fn from(summary: Summary) -> Self {
        Self {
            total_services: summary.total_services.to_string(),
            healthy_services: summary.healthy_services.to_string(),
            unhealthy_services: summary.unhealthy_services.to_string(),
            total_repos: summary.total_repos.to_string(),
        }
    }
}

pub fn compute_summary(services: &[Service], repos: &[Repository]) -> Summary {
    let total_services = services.len();
    let healthy_services = services.iter().filter(|s| s.is_healthy()).count();

    Summary {
        total_services,
        healthy_services,
        unhealthy_services: total_services - healthy_services,
        total_repos: repos.len(),
    }
}

pub fn render_services(services: &[Service], filter: &ServiceFilter) -> ServicesGrid {
    ServicesGrid::with_cards(
        filter
            .apply(services)
            .into_iter()
            .map(ServiceCard::from)
            .collect(),
    )
}

pub fn render_repos(repos: &[Repository], offset: &FixedOffset) -> ReposGrid {
    ReposGrid::with_cards(repos.iter().map(|repo| RepoCard::new(repo, offset)).collect())
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    status: LoadStatus,
    services: Vec<Service>,
    repos: Vec<Repository>,
    meta: Meta,
    summary: Option<Summary>,
    last_update: Option<String>,
    offset: FixedOffset,
}

impl Dashboard {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            status: LoadStatus::Pending,
            services: Vec::new(),
            repos: Vec::new(),
            meta: Meta::default(),
            summary: None,
            last_update: None,
            offset,
        }
    }

    /// Apply the outcome of a load cycle. A failure never applies partial data
    /// and leaves the counters and the last-update label as they were.
    pub fn apply_load(&mut self, result: Result<Snapshot>) {
        match result {
            Ok(snapshot) => {
                self.last_update = Some(views::last_update_label(&format_date(
                    snapshot.meta.last_update.as_deref(),
                    &self.offset,
                )));
                self.summary = Some(compute_summary(&snapshot.services, &snapshot.repos));
                self.services = snapshot.services;
                self.repos = snapshot.repos;
                self.meta = snapshot.meta;
                self.status = LoadStatus::Ready;

                info!(
                    "Dashboard loaded: {} services, {} repositories",
                    self.services.len(),
                    self.repos.len()
                );
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                self.status = LoadStatus::Failed;
            }
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn last_update(&self) -> String {
        self.last_update
            .clone()
            .unwrap_or_else(|| views::LAST_UPDATE_PENDING.to_string())
    }

    pub fn summary_view(&self) -> SummaryView {
        self.summary.map(SummaryView::from).unwrap_or_default()
    }

    pub fn services_grid(&self, filter: &ServiceFilter) -> ServicesGrid {
        match self.status {
            LoadStatus::Pending => ServicesGrid::message(views::LOADING_SERVICES),
            LoadStatus::Failed => ServicesGrid::message(views::SERVICES_LOAD_ERROR),
            LoadStatus::Ready => render_services(&self.services, filter),
        }
    }

    pub fn repos_grid(&self) -> ReposGrid {
        match self.status {
            LoadStatus::Pending => ReposGrid::message(views::LOADING_REPOS),
            LoadStatus::Failed => ReposGrid::message(views::REPOS_LOAD_ERROR),
            LoadStatus::Ready => render_repos(&self.repos, &self.offset),
        }
    }

    pub fn page(&self, title: &str, filter: &ServiceFilter) -> DashboardPage {
        DashboardPage {
            title: title.to_string(),
            project: self.meta.project.clone(),
            last_update: self.last_update(),
            summary: self.summary_view(),
            status_filter: filter.status.as_str(),
            search: filter.search.clone(),
            services: self.services_grid(filter),
            repos: self.repos_grid(),
        }
    }
}
