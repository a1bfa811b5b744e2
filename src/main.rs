//! Status dashboard server binary

use actix_web::{web, App, HttpServer};
use status_dashboard::controllers::configure;
use status_dashboard::services::loader::{refresh, refresh_loop};
use status_dashboard::{source, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    initialize_tracing();

    info!("Starting status dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let state = match source::from_config(&config).and_then(|src| AppState::new(&config, src)) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("Failed to initialise dashboard: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Dashboard configuration - Source: {}, Refresh: {:?}, Offset: {} min",
        config.data_source, config.refresh_interval, config.display_offset_minutes
    );

    // Initial load runs in the background; requests meanwhile see the loading placeholders
    let initial = state.clone();
    tokio::spawn(async move {
        refresh(&initial).await;
    });

    if let Some(interval) = config.refresh_interval {
        tokio::spawn(refresh_loop(state.clone(), interval));
    }

    info!("Server is live at http://{}:{}", config.bind_address, config.port);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((config.bind_address.as_str(), config.port))?
        .run()
        .await
}

/// Initialize structured logging
fn initialize_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
