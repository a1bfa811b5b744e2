//! Status dashboard
//!
//! Loads the service, repository and metadata snapshots produced by an upstream
//! job, and serves a page with summary counters plus filterable service and
//! repository cards.

pub mod config;
pub mod controllers;
pub mod dashboard;
pub mod errors;
pub mod filter;
pub mod format;
pub mod models;
pub mod services;
pub mod source;
pub mod state;
pub mod views;

pub use config::Config;
pub use dashboard::{Dashboard, LoadStatus, Summary};
pub use errors::{DashboardError, Result};
pub use state::AppState;
