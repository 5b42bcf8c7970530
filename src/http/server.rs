//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the configuration endpoint
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Run dispatch on the blocking pool
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{HttpConfig, ServiceConfig};
use crate::dispatch::Dispatcher;
use crate::http::request::{ConfigurationRequest, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::XmlResponse;
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics::{self, UNSUPPORTED_KEY};

/// Endpoint `mod_xml_curl` posts configuration requests to.
pub const CONFIGURATION_PATH: &str = "/fs/configuration";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// HTTP server for configuration requests.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the standard modules registered.
    pub fn new(config: &ServiceConfig) -> Self {
        let dispatcher = Dispatcher::standard(config.module_paths());
        Self::with_dispatcher(dispatcher, &config.http)
    }

    pub fn with_dispatcher(dispatcher: Dispatcher, http: &HttpConfig) -> Self {
        let state = AppState {
            dispatcher: Arc::new(dispatcher),
        };
        Self {
            router: Self::build_router(http, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(http: &HttpConfig, state: AppState) -> Router {
        Router::new()
            .route(CONFIGURATION_PATH, post(configuration_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
                    .layer(RequestBodyLimitLayer::new(http.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(http.request_timeout_secs))),
            )
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, path = CONFIGURATION_PATH, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answer one configuration request.
///
/// Always `200 OK`: either the module configuration or the not-found envelope.
async fn configuration_handler(
    State(state): State<AppState>,
    form: Result<Form<ConfigurationRequest>, FormRejection>,
) -> XmlResponse {
    let start = Instant::now();

    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Could not parse configuration request form");
            ConfigurationRequest::default()
        }
    };

    tracing::debug!(
        hostname = %request.hostname,
        section = %request.section,
        tag_name = %request.tag_name,
        key_name = %request.key_name,
        key_value = %request.key_value,
        "Configuration request"
    );

    let dispatcher = state.dispatcher.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut body = Vec::new();
        let outcome = dispatcher.dispatch(&request.key_value, &request.hostname, &mut body);
        let key = dispatcher
            .resolve_key(&request.key_value)
            .unwrap_or(UNSUPPORTED_KEY);
        (key, outcome, body)
    })
    .await;

    match result {
        Ok((key, outcome, body)) => {
            metrics::record_request(key, outcome, start);
            XmlResponse(body)
        }
        Err(e) => {
            tracing::error!(error = %e, "Configuration task failed");
            XmlResponse(Vec::new())
        }
    }
}
