use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::server::page::{self, PageData};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub query: Option<String>,
}

pub async fn show_form(State(_state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&PageData::default()))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, ApiError> {
    let data = run_query(&state, form.query).await?;
    Ok(Html(page::render(&data)))
}

/// Retrieve then respond. An absent or empty query skips both remote calls
/// and renders the empty page; a remote failure aborts the whole request.
async fn run_query(state: &AppState, query: Option<String>) -> Result<PageData, ApiError> {
    let query = query.unwrap_or_default();
    if query.is_empty() {
        return Ok(PageData::default());
    }

    let results = state.retriever.fetch(&query).await?;
    let answer = state.responder.answer(&query, &results).await?;

    Ok(PageData {
        query,
        results,
        answer,
    })
}
