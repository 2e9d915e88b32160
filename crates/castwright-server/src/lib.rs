//! HTTP server for Castwright
//!
//! Assembles the endpoint router, auth and error middleware, CORS, and
//! request tracing from a loaded [`Config`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod auth;
mod cors;
mod error;
mod extract;
mod health;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::Next;
use castwright_config::Config;
use castwright_content::ContentService;
use castwright_trends::TrendsService;
use tower_http::trace::TraceLayer;
use tts::SpeechService;

pub use error::{ErrorBody, ErrorResponse};
use state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// External clients are constructed here once; a missing credential
    /// leaves the matching service in fallback mode rather than failing.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let listen_address = config.server.listen_address_or_default();

        let llm = castwright_llm::from_config(&config.openai)?;
        let trends = TrendsService::from_config(&config)?;
        let speech = SpeechService::from_config(&config.openai)?;
        let auth_provider = castwright_auth::from_config(&config.auth)?;

        let state = Arc::new(AppState {
            config: Arc::clone(&config),
            content: ContentService::new(llm),
            trends,
            speech,
            auth_mode: auth_provider.mode(),
        });

        let mut app = routes::router()
            .route(&config.server.health.path, axum::routing::get(health::health_handler))
            .with_state(state);

        // Apply middleware layers (innermost first)

        // Caller identity
        app = app.layer(axum::middleware::from_fn(move |req: Request, next: Next| {
            let provider = Arc::clone(&auth_provider);
            async move { auth::auth_middleware(provider, req, next).await }
        }));

        // Error details
        let expose_details = config.app.expose_error_details();
        app = app.layer(axum::middleware::from_fn(move |req: Request, next: Next| {
            error::error_details_middleware(expose_details, req, next)
        }));

        app = app.layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        tracing::debug!(
            environment = %config.app.environment,
            openai = config.openai.is_configured(),
            news = config.news.api_key.is_some(),
            discussions = config.discussions.enabled,
            "server initialized"
        );

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
