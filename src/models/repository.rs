use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub cloud_run_service: Option<String>,
}
