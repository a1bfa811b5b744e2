use chrono::FixedOffset;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::errors::{DashboardError, Result};
use crate::source::SnapshotSource;

// App state. The load cycle is the only writer of `dashboard`; `load_cycle`
// keeps cycles from overlapping so outcomes land in the order cycles start.
pub struct AppState {
    pub dashboard: RwLock<Dashboard>,
    pub load_cycle: Mutex<()>,
    pub source: Arc<dyn SnapshotSource>,
    pub title: String,
}

impl AppState {
    pub fn new(config: &Config, source: Arc<dyn SnapshotSource>) -> Result<Self> {
        let offset = FixedOffset::east_opt(config.display_offset_minutes * 60).ok_or_else(|| {
            DashboardError::Config(format!(
                "invalid display offset: {} minutes",
                config.display_offset_minutes
            ))
        })?;

        Ok(Self {
            dashboard: RwLock::new(Dashboard::new(offset)),
            load_cycle: Mutex::new(()),
            source,
            title: config.title.clone(),
        })
    }
}
