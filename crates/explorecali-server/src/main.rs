use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{PgTourRatingRepository, PgTourRepository};
use application::TourRatingService;
use config::ServerConfig;
use explorecali::{TourRatingRepository, TourRepository};

/// Rating service over whichever repositories the server was started with
pub type AppTourRatingService = TourRatingService<dyn TourRatingRepository, dyn TourRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub tour_rating_service: Arc<AppTourRatingService>,
    pub config: ServerConfig,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Explore California API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::tour_rating::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🌴 Explore California API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));
    tracing::info!(
        "📄 Page size {} (max {})",
        config.page.size,
        config.page.max_size
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let ratings: Arc<dyn TourRatingRepository> =
        Arc::new(PgTourRatingRepository::new(pool.clone()));
    let tours: Arc<dyn TourRepository> = Arc::new(PgTourRepository::new(pool));
    let tour_rating_service = Arc::new(TourRatingService::new(ratings, tours));

    let router = app(AppState {
        tour_rating_service,
        config,
    });

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Explore California API ready");

    Ok(router.into())
}
