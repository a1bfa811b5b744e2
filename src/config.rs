//! Configuration management for the status dashboard

use std::env;
use std::time::Duration;

/// Longest offset accepted for timestamp display, in minutes (23:59)
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Base of the snapshot paths: an `http(s)://` URL or a local directory
    pub data_source: String,

    /// Optional timeout for snapshot requests over HTTP
    pub http_timeout: Option<Duration>,

    /// Re-run the load cycle at this interval when set
    pub refresh_interval: Option<Duration>,

    /// Fixed offset from UTC used to display timestamps, in minutes
    pub display_offset_minutes: i32,

    /// Page heading
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            data_source: ".".to_string(),
            http_timeout: None,
            refresh_interval: None,
            display_offset_minutes: 0,
            title: "Panel de Servicios".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(bind_address) = env::var("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Ok(data_source) = env::var("DATA_SOURCE") {
            config.data_source = data_source.trim().to_string();
        }

        if let Ok(timeout) = env::var("HTTP_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.http_timeout = Some(Duration::from_secs(seconds));
            }
        }

        if let Ok(interval) = env::var("REFRESH_INTERVAL_SECONDS") {
            if let Ok(seconds) = interval.parse::<u64>() {
                config.refresh_interval = (seconds > 0).then(|| Duration::from_secs(seconds));
            }
        }

        if let Ok(offset) = env::var("DISPLAY_UTC_OFFSET_MINUTES") {
            if let Ok(minutes) = offset.parse() {
                config.display_offset_minutes = minutes;
            }
        }

        if let Ok(title) = env::var("DASHBOARD_TITLE") {
            config.title = title;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.data_source.is_empty() {
            return Err("data_source cannot be empty".to_string());
        }

        if self.http_timeout == Some(Duration::ZERO) {
            return Err("http_timeout must be greater than 0".to_string());
        }

        if self.display_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(format!(
                "display_offset_minutes must be within ±{}",
                MAX_OFFSET_MINUTES
            ));
        }

        Ok(())
    }

    /// Whether snapshots are fetched over HTTP rather than read from disk
    pub fn is_remote_source(&self) -> bool {
        self.data_source.starts_with("http://") || self.data_source.starts_with("https://")
    }
}
