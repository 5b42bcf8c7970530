//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Build the dispatcher and bind the listener
//! - Serve until SIGINT/SIGTERM
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{self, schema::parse_listen_address, ConfigError, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("could not load config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },

    #[error("invalid listen address '{0}'")]
    ListenAddress(String),

    #[error("could not start metrics endpoint: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("http server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load the config file and apply a command-line listen override.
pub fn load(path: &Path, listen_override: Option<&str>) -> Result<ServiceConfig, StartupError> {
    let mut config = config::load_config(path).map_err(|source| StartupError::Config {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(listen) = listen_override {
        parse_listen_address(listen).map_err(|_| StartupError::ListenAddress(listen.to_string()))?;
        config.http.listen = listen.to_string();
    }

    Ok(config)
}

/// Run the service with an already loaded config.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    logging::init(&config.observability.log_level);

    tracing::info!(
        listen = %config.http.listen,
        templates_directory = %config.http.templates_directory.display(),
        module_data_directory = %config.freeswitch.module_data_directory.display(),
        "Configuration loaded"
    );

    for (name, dir) in [
        ("templates_directory", &config.http.templates_directory),
        ("module_data_directory", &config.freeswitch.module_data_directory),
    ] {
        if !dir.is_dir() {
            tracing::warn!(setting = name, path = %dir.display(), "Directory does not exist yet");
        }
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::ListenAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let addr = config
        .http
        .bind_address()
        .map_err(|_| StartupError::ListenAddress(config.http.listen.clone()))?;

    let server = HttpServer::new(&config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger("signal");
    });

    server.run(listener, server_shutdown).await.map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
