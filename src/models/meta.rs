use serde::{Deserialize, Serialize};

/// Snapshot metadata. Only `last_update` drives the page; the counters are the
/// producer's own and are never trusted over the collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub last_update: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub total_services: Option<usize>,
    #[serde(default)]
    pub total_repos: Option<usize>,
    #[serde(default)]
    pub healthy_services: Option<usize>,
    #[serde(default)]
    pub unhealthy_services: Option<usize>,
}
