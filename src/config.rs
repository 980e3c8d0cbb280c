use anyhow::{Context, Result};
use catalog::ProductCatalog;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Server configuration, layered from defaults, an optional config file and
/// `STOREFRONT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the web server (IP:PORT)
    pub bind_address: String,
    /// Directory holding the built frontend (index.html and wasm bundle)
    pub static_dir: PathBuf,
    /// Catalog JSON file; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration, reading `.env` first.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(config_file, Environment::with_prefix("STOREFRONT"))
    }

    /// Layer defaults, the optional config file and `environment`, in that order.
    fn from_sources(config_file: Option<&Path>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .set_default("request_timeout_secs", 30)?;

        if let Some(path) = config_file {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(environment)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize::<ServerConfig>()
            .context("Invalid configuration")?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Load the catalog from `path`, or the bundled one.
pub fn load_catalog(path: Option<&Path>) -> Result<ProductCatalog> {
    let catalog = match path {
        Some(path) => ProductCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => ProductCatalog::builtin().context("Bundled catalog is invalid")?,
    };
    info!("Catalog loaded with {} categories", catalog.slugs().count());
    Ok(catalog)
}

/// Initialize application state
pub fn initialize_app_state(config: &ServerConfig) -> Result<AppState> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    Ok(AppState {
        catalog: Arc::new(catalog),
    })
}
