use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::actions::ActionPolicy;
use crate::directory::CardDirectory;
use crate::errors::CardError;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub policy: Arc<ActionPolicy>,
    pub directory: Arc<dyn CardDirectory>,
}

/// Assemble the full application router: the card-actions API plus the
/// cross-cutting CORS and request-tracing layers.
pub fn app(state: AppState) -> Router {
    crate::actions::web::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    settings: Settings,
    directory: Arc<dyn CardDirectory>,
    policy: ActionPolicy,
) -> Result<(), CardError> {
    let state = AppState {
        settings: Arc::new(settings),
        policy: Arc::new(policy),
        directory,
    };

    let addr: SocketAddr = state
        .settings
        .listen_addr()
        .parse()
        .map_err(|e| CardError::Other(format!("bad listen addr: {e}")))?;

    let router = app(state);

    tracing::info!(%addr, "Card actions API listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(CardError::Io)?;
    axum::serve(listener, router).await.map_err(CardError::Io)?;
    Ok(())
}
