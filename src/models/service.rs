use serde::{Deserialize, Deserializer, Serialize};

/// Literal status value the producer writes for a ready service
pub const HEALTHY_STATUS: &str = "True";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(default, deserialize_with = "raw_status")]
    pub status: Option<String>,
    // Display-only fields: a missing one renders empty instead of failing the load
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub repo: Option<String>,
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub repo_name: Option<String>,
}

impl Service {
    /// Healthy means the status is exactly the string `"True"`; anything else,
    /// including a missing status, is unhealthy.
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some(HEALTHY_STATUS)
    }
}

// Keeps the status verbatim. Non-string values are stringified so that they
// never compare equal to the healthy marker.
fn raw_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
