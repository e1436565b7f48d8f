use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lunch_api::api::{self, AppState};
use lunch_api::application::PlaceService;
use lunch_api::config::{Config, StorageBackend};
use lunch_api::domain::clock::SystemClock;
use lunch_api::domain::place::RandomSelector;
use lunch_api::domain::repositories::PlaceRepository;
use lunch_api::infrastructure::repositories::{InMemoryPlaceRepository, PostgresPlaceRepository};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let repo: Arc<dyn PlaceRepository> = match config.storage {
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            // Connect to database
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(&database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database connected successfully");
            Arc::new(PostgresPlaceRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, places are lost on restart");
            Arc::new(InMemoryPlaceRepository::new())
        }
    };

    let places = PlaceService::new(
        repo,
        Arc::new(SystemClock),
        Arc::new(RandomSelector::from_entropy()),
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(AppState::new(places))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
