#[cfg(test)]
pub mod test_utils {
    use crate::config::ServerConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use catalog::ProductCatalog;
    use std::sync::{Arc, Once};
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>storefront-index</body></html>";
    pub const APP_JS: &str = "console.log('storefront');";

    /// A frontend build directory with an index page and one asset.
    pub fn setup_static_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        std::fs::write(dir.path().join("app.js"), APP_JS).expect("Failed to write app.js");
        dir
    }

    pub fn test_config(static_dir: &TempDir) -> ServerConfig {
        ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: static_dir.path().to_path_buf(),
            catalog_path: None,
            request_timeout_secs: 5,
        }
    }

    /// Create AppState over the bundled catalog
    pub fn setup_test_app_state() -> AppState {
        let catalog = ProductCatalog::builtin().expect("Bundled catalog should parse");
        AppState {
            catalog: Arc::new(catalog),
        }
    }

    static TRACING: Once = Once::new();

    /// Install the test subscriber once for the whole test binary, writing to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() {
        TRACING.call_once(|| {
            let subscriber = test_subscriber();
            if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
                eprintln!("Test tracing already installed: {}", e);
            }
        });
    }

    fn test_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish()
    }

    /// Create axum app for testing over `state`.
    ///
    /// The returned directory must outlive the router.
    pub fn setup_test_app_with_state(state: AppState) -> (Router, TempDir) {
        init_test_tracing();

        let static_dir = setup_static_dir();
        let router = create_router(state, &test_config(&static_dir));
        (router, static_dir)
    }

    /// Create axum app for testing over the bundled catalog
    pub fn setup_test_app() -> (Router, TempDir) {
        setup_test_app_with_state(setup_test_app_state())
    }
}
