use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use thiserror::Error;

use crate::server::page;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("search request failed: {0}")]
    SearchFailed(String),
    #[error("chat completion failed: {0}")]
    ChatFailed(String),
}

impl ApiError {
    pub fn search<E: std::fmt::Display>(err: E) -> Self {
        ApiError::SearchFailed(err.to_string())
    }

    pub fn chat<E: std::fmt::Display>(err: E) -> Self {
        ApiError::ChatFailed(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let stage = match &self {
            ApiError::SearchFailed(_) => "search",
            ApiError::ChatFailed(_) => "chat",
        };

        tracing::error!("{}", self);
        let body = Html(page::render_error(stage, &self.to_string()));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
