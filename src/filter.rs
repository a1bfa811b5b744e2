//! Service filtering driven by the status selector and the search box

use crate::models::Service;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Healthy,
    Unhealthy,
}

impl StatusFilter {
    pub fn matches(&self, service: &Service) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Healthy => service.is_healthy(),
            StatusFilter::Unhealthy => !service.is_healthy(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Healthy => "healthy",
            StatusFilter::Unhealthy => "unhealthy",
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(s: &str) -> Self {
        match s {
            "healthy" => StatusFilter::Healthy,
            "unhealthy" => StatusFilter::Unhealthy,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceFilter {
    pub status: StatusFilter,
    pub search: String,
}

impl ServiceFilter {
    pub fn new(status: Option<&str>, search: Option<&str>) -> Self {
        Self {
            status: status.map(StatusFilter::from).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
        }
    }

    /// Status first, then case-insensitive substring match on the name
    pub fn apply<'a>(&self, services: &'a [Service]) -> Vec<&'a Service> {
        let needle = self.search.to_lowercase();

        services
            .iter()
            .filter(|service| self.status.matches(service))
            .filter(|service| needle.is_empty() || service.name.to_lowercase().contains(&needle))
            .collect()
    }
}
