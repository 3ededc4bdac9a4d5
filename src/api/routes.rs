use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
    response::Html,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Result, AppError};
use crate::api::models::{
    ExtractRequest, ExtractResponse, HealthResponse, PageSnapshot, ScrapeRequest,
};
use crate::{extract, snapshot, AppState};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/health", get(health))
        .route("/api/scrape", post(scrape_handler))
        .route("/api/extract", post(extract_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// The demo page is compiled into the binary so the server stays a single
/// artifact with no runtime asset directory.
async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn scrape_handler(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<PageSnapshot>> {
    let url = match req.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::MissingField("URL is required in the JSON payload".to_string())),
    };

    info!(%url, use_selenium = req.use_selenium, "Processing scrape request");

    // Simulated processing time, standing in for a real fetch-and-parse pass
    tokio::time::sleep(state.config.scrape_delay).await;

    Ok(Json(snapshot::build(&url, req.use_selenium)))
}

async fn extract_handler(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>> {
    let (Some(document), Some(query)) = (req.scraped_data, req.query.filter(|q| !q.is_empty()))
    else {
        return Err(AppError::MissingField("Both scraped data and query are required".to_string()));
    };

    info!(%query, "Processing extraction request");

    // Simulated processing time, standing in for a real language-model call
    tokio::time::sleep(state.config.extract_delay).await;

    let extracted_content = extract::extract_content(&document, &query);

    Ok(Json(ExtractResponse {
        success: true,
        query,
        extracted_content,
    }))
}
