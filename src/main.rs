use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use maf_analyzer::{AnalyzerService, MafRepoClient, StaticCatalogue};
use maf_core::VariantSource;
use maf_types::VariantEnvelope;

/// Application state shared across REST API handlers
///
/// Holds the analyzer service backing the plugin-method dispatch endpoint.
#[derive(Clone)]
struct AppState {
    analyzer: Arc<AnalyzerService>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Request body for the `requestSimpleVariants` plugin method
#[derive(Deserialize, ToSchema)]
struct SimpleVariantsReq {
    #[serde(rename = "sampleId")]
    sample_id: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, request_simple_variants),
    components(schemas(HealthRes, SimpleVariantsReq))
)]
struct ApiDoc;

/// Main entry point for the MAF analyzer service
///
/// Serves the plugin-method dispatch surface that documentation form scripts
/// call to import simple genetic variants.
///
/// # Environment Variables
/// - `MAF_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MAFREPO_URL`: Base URL of the MAF repository (required)
/// - `MAF_CATALOGUE_FILE`: JSON file mapping property catalogue names to
///   versions (optional; unknown catalogues resolve to version 0)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("maf=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MAF_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let mafrepo_url = std::env::var("MAFREPO_URL")
        .map_err(|_| anyhow::anyhow!("MAFREPO_URL must be set to the MAF repository base URL"))?;

    let catalogue = match std::env::var("MAF_CATALOGUE_FILE") {
        Ok(path) => StaticCatalogue::from_json_file(Path::new(&path))?,
        Err(_) => StaticCatalogue::default(),
    };

    let analyzer = AnalyzerService::new(MafRepoClient::new(mafrepo_url), Arc::new(catalogue));

    tracing::info!("++ Starting MAF analyzer REST on {}", addr);

    let app = Router::new()
        .route("/health", get(health))
        .route(
            "/methods/requestSimpleVariants",
            post(request_simple_variants),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            analyzer: Arc::new(analyzer),
        });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "MAF analyzer is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/methods/requestSimpleVariants",
    request_body = SimpleVariantsReq,
    responses(
        (status = 200, description = "Variant response envelope; status.code 1 on success")
    )
)]
/// Plugin-method dispatch: fetch simple variants for a sample
///
/// Mirrors the host's `executePluginMethod` call shape: form scripts send the
/// sample id and receive a `{status, result}` envelope. A blank sample id
/// yields a failure envelope rather than an HTTP error.
async fn request_simple_variants(
    State(state): State<AppState>,
    Json(req): Json<SimpleVariantsReq>,
) -> Json<VariantEnvelope> {
    Json(dispatch_simple_variants(state.analyzer.as_ref(), &req.sample_id).await)
}

/// Guards the plugin method against a blank sample id, then delegates.
async fn dispatch_simple_variants<S>(source: &S, sample_id: &str) -> VariantEnvelope
where
    S: VariantSource + ?Sized,
{
    if sample_id.trim().is_empty() {
        return VariantEnvelope::failure("No sampleId given!");
    }
    source.request_simple_variants(sample_id).await
}
