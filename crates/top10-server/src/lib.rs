//! USA Top 10 Server Library
//!
//! Read-only HTTP surface over the destinations table, plus an admin route
//! that re-runs the seeder against the same store.
//!
//! # Routes
//!
//! - `GET /` welcome message
//! - `GET /destinations` all destinations ordered by id
//! - `GET /admin/refresh` rebuild the table from the encyclopedia
//! - `GET /health` database connectivity

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use top10_seeder::{Pipeline, SeedOutcome, SeederConfig};
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::config::CorsConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub seeder: Arc<SeederConfig>,
    refresh_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: SqlitePool, seeder: SeederConfig) -> Self {
        Self {
            db,
            seeder: Arc::new(seeder),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run the seeding pipeline against `db`. Concurrent calls queue up;
    /// only one run touches the store at a time.
    pub async fn refresh(&self) -> top10_seeder::Result<SeedOutcome> {
        let _guard = self.refresh_lock.lock().await;
        info!("Refresh started");

        let pipeline = Pipeline::from_config(&self.seeder)?.with_store(self.db.clone());
        pipeline.run().await
    }
}

/// Build the application router with all routes and middleware
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/destinations", get(routes::list_destinations))
        .route("/admin/refresh", get(routes::refresh))
        .route("/health", get(routes::health_check))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(cors))
}

/// Serve `app` until `shutdown` resolves. In-flight requests are drained and
/// the call returns as soon as the last connection closes.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
