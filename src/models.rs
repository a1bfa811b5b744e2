//! Snapshot data models as produced by the upstream data job

pub mod meta;
pub mod repository;
pub mod service;

pub use meta::Meta;
pub use repository::Repository;
pub use service::Service;

use serde::{Deserialize, Deserializer};

/// Treat `null` and `""` the same way: both mean the field is absent
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
