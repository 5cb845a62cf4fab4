use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{PgCharacterRepository, PgContactManager, PgOrganizationRepository};
use application::ComplianceService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub compliance_service: Arc<ComplianceService>,
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "APS API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::compliance::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🩺 APS API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;
    tracing::info!("📄 Admin compliance agreement: {}", config.admin_compliance_number);

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let characters = Arc::new(PgCharacterRepository::new(pool.clone()));
    let organizations = Arc::new(PgOrganizationRepository::new(pool.clone()));
    let contacts = Arc::new(PgContactManager::new(pool));
    let compliance_service = Arc::new(ComplianceService::new(
        characters,
        organizations,
        contacts,
        config.admin_compliance_number,
    ));

    let router = build_router(AppState { compliance_service });

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ APS API ready");

    Ok(router.into())
}
