//! HTTP request handlers

use super::state::AppState;
use crate::search::{ResultPage, SearchError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Query parameters for `/books`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw keyword expression
    pub search: Option<String>,
    /// Raw page number
    pub page: Option<String>,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Book search handler: `/books/:search/:page`
pub async fn search_books(
    State(state): State<AppState>,
    Path((search, page)): Path<(String, String)>,
) -> Result<Json<ResultPage>, SearchError> {
    let result = state.search.search(&search, &page).await?;
    Ok(Json(result))
}

/// Book search handler: `/books?search=..&page=..`
pub async fn search_books_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ResultPage>, SearchError> {
    let search = params.search.unwrap_or_default();
    let page = params.page.unwrap_or_default();

    let result = state.search.search(&search, &page).await?;
    Ok(Json(result))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
