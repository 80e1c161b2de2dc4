//! HTTP handlers for templates, invoices and rendered documents
//!
//! Handlers return `DocsError`, which renders as `{ code, message, details }`.

pub mod documents;
pub mod invoices;
pub mod templates;

use crate::core::service::{InvoiceService, ReceiptService, TemplateService};
use crate::documents::DocumentGenerator;
use crate::server::host::ServerHost;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<dyn TemplateService>,
    pub invoices: Arc<dyn InvoiceService>,
    pub receipts: Arc<dyn ReceiptService>,
    pub generator: DocumentGenerator,
}

impl AppState {
    pub fn from_host(host: &ServerHost) -> Self {
        Self {
            templates: host.templates.clone(),
            invoices: host.invoices.clone(),
            receipts: host.receipts.clone(),
            generator: host.generator.clone(),
        }
    }
}
