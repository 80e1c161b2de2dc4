//! Rendered document handlers

use super::AppState;
use crate::core::error::DocsError;
use crate::documents::RenderedDocument;
use crate::entities::DocumentKind;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

/// `?kind=invoice|receipt`, defaulting to invoice
#[derive(Debug, Default, Deserialize)]
pub struct DocumentQuery {
    pub kind: Option<DocumentKind>,
}

impl DocumentQuery {
    fn kind(&self) -> DocumentKind {
        self.kind.unwrap_or(DocumentKind::Invoice)
    }
}

/// The rendered HTML fragment with template metadata
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<RenderedDocument>, DocsError> {
    Ok(Json(state.generator.document(id, query.kind()).await?))
}

/// The rendered document as a standalone, styled HTML page
pub async fn preview_document(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<DocumentQuery>,
) -> Result<Html<String>, DocsError> {
    let document = state.generator.document(id, query.kind()).await?;
    Ok(Html(document.to_page()))
}
