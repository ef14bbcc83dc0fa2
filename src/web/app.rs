use super::state::AppState;
use crate::web::handlers::gifs::{
    autocomplete, categories, featured, search, search_suggestions, select, trending_terms,
};
use crate::web::handlers::handler_404;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn router(&self) -> Router {
        let tenor_router = Router::new()
            .route("/search", get(search))
            .route("/featured", get(featured))
            .route("/categories", get(categories))
            .route("/search-suggestions", get(search_suggestions))
            .route("/autocomplete", get(autocomplete))
            .route("/trending-terms", get(trending_terms));

        Router::new()
            .nest("/gifs/tenor", tenor_router)
            .route("/gifs/select", post(select))
            .fallback(handler_404)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.state.config.bind_addr.parse()?;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("listening on {}", addr);

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
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

    tracing::info!("shutting down");
}
