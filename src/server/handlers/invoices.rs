//! Invoice handlers

use super::AppState;
use crate::core::error::{DocsError, InvoiceError};
use crate::core::extractors::Validated;
use crate::documents::InvoiceUpdate;
use crate::entities::{CreateInvoice, Invoice, InvoiceFilter, Receipt, StatusChange, UpdateInvoice};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(filter): Query<InvoiceFilter>,
) -> Result<Json<Vec<Invoice>>, DocsError> {
    Ok(Json(state.invoices.list(&filter).await?))
}

/// Submit an invoice
///
/// Receipts are only issued on a transition into `paid`, so an invoice
/// created as paid has none.
pub async fn create_invoice(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateInvoice>,
) -> Result<(StatusCode, Json<Invoice>), DocsError> {
    let invoice = state.invoices.create(payload.into_invoice()).await?;

    tracing::info!(
        invoice_id = invoice.id,
        organization_id = %invoice.organization_id,
        status = %invoice.status,
        "invoice created"
    );

    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Invoice>, DocsError> {
    let invoice = state
        .invoices
        .get(id)
        .await?
        .ok_or(InvoiceError::NotFound { id })?;

    Ok(Json(invoice))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Validated(payload): Validated<UpdateInvoice>,
) -> Result<Json<InvoiceUpdate>, DocsError> {
    Ok(Json(state.generator.update_invoice(id, payload).await?))
}

pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Validated(payload): Validated<StatusChange>,
) -> Result<Json<InvoiceUpdate>, DocsError> {
    Ok(Json(state.generator.change_status(id, payload.status).await?))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, DocsError> {
    state.invoices.delete(id).await?;

    tracing::info!(invoice_id = id, "invoice deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Archived receipts for an invoice, oldest first
pub async fn list_receipts(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Receipt>>, DocsError> {
    if state.invoices.get(id).await?.is_none() {
        return Err(InvoiceError::NotFound { id }.into());
    }

    Ok(Json(state.receipts.list_for_invoice(id).await?))
}
