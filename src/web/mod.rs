//! Web layer - HTTP interface for the storefront
//!
//! Handlers only translate requests into [`UiEvent`]s and [`UiOutcome`]s into
//! responses; every decision is made in [`crate::core`].

/// Storefront and admin route handlers
pub mod handlers;
/// Outcome and error to HTTP response mapping
pub mod response;

use crate::{
    config::AppConfig,
    core::{
        events::{AppContext, UiEvent, UiOutcome},
        ocr::OcrEngine,
    },
    errors::Result,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, instrument};

/// Shared state available to all handlers.
/// The context is the storefront's page memory; the OCR engine is called
/// without holding its lock.
#[derive(Clone)]
pub struct AppState {
    /// Session state behind a lock
    pub context: Arc<RwLock<AppContext>>,
    /// Engine used for admin image uploads
    pub ocr: Arc<dyn OcrEngine>,
}

impl AppState {
    /// Creates a new `AppState` owning `context`.
    #[must_use]
    pub fn new(context: AppContext, ocr: Arc<dyn OcrEngine>) -> Self {
        Self {
            context: Arc::new(RwLock::new(context)),
            ocr,
        }
    }

    /// Runs `event` against the context.
    ///
    /// # Errors
    /// Propagates the error of the event's handler.
    pub async fn dispatch(&self, event: UiEvent) -> Result<UiOutcome> {
        self.context.write().await.dispatch(event)
    }
}

/// Builds the storefront router. Request bodies are capped at `max_body_bytes`.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::storefront::index))
        .route("/products/{id}", get(handlers::storefront::details))
        .route(
            "/products/{id}/quick-request",
            post(handlers::storefront::quick_request),
        )
        .route(
            "/products/{id}/templates/{number}",
            post(handlers::storefront::template_message),
        )
        .route(
            "/products/{id}/message",
            post(handlers::storefront::custom_message),
        )
        .route("/inquiry", post(handlers::storefront::inquiry))
        .route("/contact", get(handlers::storefront::contact))
        .route("/admin", get(handlers::admin::show))
        .route("/admin/products", post(handlers::admin::submit_product))
        .route("/admin/products/{id}/edit", post(handlers::admin::begin_edit))
        .route("/admin/draft/cancel", post(handlers::admin::cancel_edit))
        .route(
            "/admin/products/{id}/delete",
            post(handlers::admin::delete_product),
        )
        .route("/admin/export", get(handlers::admin::export))
        .route("/admin/import", post(handlers::admin::import))
        .route("/admin/ocr", post(handlers::admin::upload_image))
        .route("/admin/ocr/reset", post(handlers::admin::reset_upload))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the listen address is invalid or the socket cannot be bound.
#[instrument(skip(config, state))]
pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Storefront listening on http://{addr}");

    axum::serve(listener, router(state, config.ocr.max_upload_bytes))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
