mod action;
mod app;
mod app_state;
mod component;
mod components;
mod fetch;
mod mpv;
mod theme;
mod widgets;

use tracing::{error, info, warn};

use zap_core::catalog::{self, Country};
use zap_core::config::Config;

/// Starter catalog shipped with the binary; used when no user catalog is
/// configured or the configured one fails to load.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = zap_core::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("zapper.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress
    // noisy connection-level DEBUG from HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("zapper log: {}", log_path.display());

    info!("zapper starting…");

    let config = Config::load().unwrap_or_default();
    let catalog = load_catalog(&config);

    let app = app::App::new(config, catalog);
    app.run().await
}

fn load_catalog(config: &Config) -> Vec<Country> {
    if let Some(path) = &config.catalog.path {
        match catalog::load_catalog_from_file(path) {
            Ok(countries) => {
                info!("catalog: {} countries from {}", countries.len(), path.display());
                return countries;
            }
            Err(e) => warn!("catalog: {}; falling back to bundled catalog", e),
        }
    }
    catalog::parse_catalog(BUNDLED_CATALOG).unwrap_or_else(|e| {
        error!("bundled catalog failed to parse: {}", e);
        Vec::new()
    })
}
