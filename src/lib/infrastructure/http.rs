//! HTTP Server

use std::time::Duration;

use anyhow::Result;
use axum::{
    async_trait,
    extract::Request,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info_span};
use crate::domain::contact::ContactService;

use handlers::{contact, panic_handler, uptime};
use open_api::api_docs;
use state::AppState;

mod errors;
mod handlers;
mod open_api;

pub mod servers;
pub mod state;

pub use errors::{ApiError, MessageResponse};

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value = "3001")]
    pub port: u16,

    /// The path contact forms are submitted to
    #[arg(long, env = "CONTACT_PATH", default_value = "/api/contact")]
    pub contact_path: String,

    /// Origins allowed to call the API; any origin when empty
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<HeaderValue>,
}

/// A way of hosting the application's router
#[async_trait]
pub trait Server: Send + Sized {
    /// Serves requests until the host shuts the server down.
    async fn run(self) -> Result<()>;
}

/// Create the application's router
pub fn router<C: ContactService>(state: AppState<C>, config: &HttpServerConfig) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route(
            &config.contact_path,
            post(contact::handler::<C>).fallback(contact::method_not_allowed),
        )
        .route("/api/uptime", get(uptime::handler::<C>))
        .route("/api/openapi.json", get(Json(api_docs(&config.contact_path))))
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(trace_layer)
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
    }
}

#[mutants::skip]
pub(crate) async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
