//! Router builder utilities for template and invoice routes

use super::handlers::{AppState, documents, invoices, templates};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Build template routes
///
/// - GET|POST /templates - List (filter by organization_id, kind, active) or create
/// - POST /templates/preview - Render content against sample data
/// - GET|PUT|DELETE /templates/{id}
/// - POST /templates/{id}/activate, POST /templates/{id}/deactivate
pub fn build_template_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/templates/preview", post(templates::preview_template))
        .route(
            "/templates/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/templates/{id}/activate", post(templates::activate_template))
        .route(
            "/templates/{id}/deactivate",
            post(templates::deactivate_template),
        )
        .with_state(state)
}

/// Build invoice and document routes
///
/// - GET|POST /invoices - List (filter by organization_id, status) or create
/// - GET|PUT|DELETE /invoices/{id}
/// - PUT /invoices/{id}/status - Change status, issuing a receipt on `paid`
/// - GET /invoices/{id}/document?kind= - Rendered fragment and metadata
/// - GET /invoices/{id}/preview?kind= - Standalone HTML page
/// - GET /invoices/{id}/receipts - Archived receipts
pub fn build_invoice_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        .route("/invoices/{id}/status", put(invoices::change_status))
        .route("/invoices/{id}/document", get(documents::get_document))
        .route("/invoices/{id}/preview", get(documents::preview_document))
        .route("/invoices/{id}/receipts", get(invoices::list_receipts))
        .with_state(state)
}
