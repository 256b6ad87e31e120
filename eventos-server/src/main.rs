mod routes;
mod singleton;
mod state;

use anyhow::{Context, Result};
use eventos_core::{EventStore, EventosConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

const ROUTES: &[(&str, &str)] = &[
    ("GET    /api/eventos", "list all events"),
    ("GET    /api/eventos/:id", "show one event"),
    ("POST   /api/eventos", "create an event"),
    ("PUT    /api/eventos/:id", "update an event"),
    ("DELETE /api/eventos/:id", "delete an event"),
    ("GET    /", "card page"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EventosConfig::load()?;

    // Ensure only one instance writes the data file
    let _lock = singleton::acquire_lock(&config.lock_path())?;

    let data_path = config.data_path();
    let store = EventStore::open(&data_path)
        .with_context(|| format!("Failed to load events from {}", data_path.display()))?;
    let state = AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("eventos-server listening on http://{}", addr);
    for (route, what) in ROUTES {
        tracing::info!("  {route:<28} {what}");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
