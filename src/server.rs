//! HTTP layer: a thin axum front-end over the recommender.
//!
//! The recommender itself is transport-unaware; handlers pass the raw query
//! string through and return whatever display strings come back, sentinel
//! entries included.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::recommend::Recommender;

const INDEX_HTML: &str = include_str!("ui/index.html");

/// Shared state for all handlers. The catalog never changes after startup,
/// so concurrent requests only ever read.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        AppState {
            recommender: Arc::new(recommender),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/recommend", get(recommend))
        .route("/health", get(health_check))
        .with_state(state)
}

/// GET /
///
/// Serves the query form page.
async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub results: Vec<String>,
}

/// GET /api/recommend?query=...
async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Json<RecommendResponse> {
    let results = state.recommender.recommend(&params.query);
    log::debug!("query {:?} -> {} result(s)", params.query, results.len());
    Json(RecommendResponse {
        query: params.query,
        results,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub catalog_size: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.recommender.catalog().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Catalog, Song};

    fn state() -> AppState {
        let catalog = Catalog::from_songs(vec![Song::new(
            "Song A".into(),
            "M1".into(),
            "Rock".into(),
            8.0,
        )]);
        AppState::new(Recommender::new(catalog))
    }

    #[tokio::test]
    async fn recommend_endpoint_passes_query_through() {
        let Json(body) = recommend(
            State(state()),
            Query(RecommendParams {
                query: "rock".into(),
            }),
        )
        .await;
        assert_eq!(body.query, "rock");
        assert_eq!(body.results, vec!["Song A by M1 (Rock, Rating: 8)"]);
    }

    #[tokio::test]
    async fn health_reports_module_and_catalog_size() {
        let Json(body) = health_check(State(state())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.module, "tune-scout");
        assert_eq!(body.catalog_size, 1);
    }

    #[tokio::test]
    async fn recommend_response_serializes_to_expected_json_shape() {
        let Json(body) = recommend(
            State(state()),
            Query(RecommendParams {
                query: "rock".into(),
            }),
        )
        .await;
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "query": "rock",
                "results": ["Song A by M1 (Rock, Rating: 8)"],
            })
        );
    }
}
