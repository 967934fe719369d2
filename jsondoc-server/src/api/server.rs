//! HTTP server implementation for the document API

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use jsondoc::backend::StoreBackend;
use std::{future::Future, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, SharedService};

/// Creates the main application router with all routes and middleware
pub fn create_app<B: StoreBackend + 'static>(service: SharedService<B>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // System routes
        .route("/health", get(handlers::health_check))

        // Document routes
        .route(
            "/documents",
            get(handlers::list_documents::<B>).post(handlers::create_document::<B>),
        )
        .route(
            "/documents/{id}",
            get(handlers::get_document::<B>)
                .put(handlers::update_document::<B>)
                .delete(handlers::delete_document::<B>),
        )

        // Apply middleware to ALL routes
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
        )
        .with_state(service)
}

/// Serves the API on an already bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<B, F>(
    listener: TcpListener,
    service: SharedService<B>,
    shutdown: F,
) -> std::io::Result<()>
where
    B: StoreBackend + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_app(service);

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    tracing::info!("Health check available at http://{}/health", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Binds `addr` and serves the API until Ctrl-C or SIGTERM.
pub async fn start_server<B: StoreBackend + 'static>(
    addr: SocketAddr,
    service: SharedService<B>,
) -> std::io::Result<()> {
    tracing::info!("Starting jsondoc API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, service, shutdown_signal()).await
}

/// Resolves on the first Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}
