//! Template management handlers

use super::AppState;
use crate::core::error::{DocsError, TemplateError};
use crate::core::extractors::Validated;
use crate::documents::unresolved_placeholders;
use crate::entities::{CreateTemplate, Template, TemplateFilter, UpdateTemplate};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A stored template with the placeholder paths its kind cannot resolve
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    #[serde(flatten)]
    pub template: Template,
    pub warnings: Vec<String>,
}

impl From<Template> for TemplateResponse {
    fn from(template: Template) -> Self {
        let warnings = unresolved_placeholders(&template.content, template.kind);
        Self { template, warnings }
    }
}

/// Request body for `POST /templates/preview`
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewRequest {
    #[validate(length(min = 1))]
    pub content: String,
    /// Sample data the placeholders resolve against
    #[serde(default)]
    pub data: serde_json::Value,
}

pub async fn list_templates(
    State(state): State<AppState>,
    Query(filter): Query<TemplateFilter>,
) -> Result<Json<Vec<Template>>, DocsError> {
    Ok(Json(state.templates.list(&filter).await?))
}

pub async fn create_template(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateTemplate>,
) -> Result<(StatusCode, Json<TemplateResponse>), DocsError> {
    let template = state.templates.create(payload.into_template()).await?;

    tracing::info!(
        template_id = %template.id,
        organization_id = %template.organization_id,
        kind = %template.kind,
        active = template.is_active,
        "template created"
    );

    Ok((StatusCode::CREATED, Json(template.into())))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, DocsError> {
    let template = state
        .templates
        .get(&id)
        .await?
        .ok_or(TemplateError::NotFound { id })?;

    Ok(Json(template))
}

pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Validated(payload): Validated<UpdateTemplate>,
) -> Result<Json<TemplateResponse>, DocsError> {
    let template = state.templates.update(&id, payload).await?;

    Ok(Json(template.into()))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, DocsError> {
    state.templates.delete(&id).await?;

    tracing::info!(template_id = %id, "template deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn activate_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, DocsError> {
    let template = state.templates.activate(&id).await?;

    tracing::info!(
        template_id = %template.id,
        organization_id = %template.organization_id,
        kind = %template.kind,
        "template activated"
    );

    Ok(Json(template))
}

pub async fn deactivate_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, DocsError> {
    Ok(Json(state.templates.deactivate(&id).await?))
}

/// Render arbitrary content against sample data, for the template editor
pub async fn preview_template(
    State(state): State<AppState>,
    Validated(payload): Validated<PreviewRequest>,
) -> Html<String> {
    Html(state.generator.preview_template(&payload.content, &payload.data))
}
