//! Server host holding the shared application state
//!
//! The host owns the services, the document generator and the merged
//! configuration. Exposures build their routers from it.

use crate::config::DocsConfig;
use crate::core::service::{InvoiceService, ReceiptService, TemplateService};
use crate::documents::{DocumentGenerator, FallbackTemplates};
use crate::render::Renderer;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    pub config: Arc<DocsConfig>,

    pub templates: Arc<dyn TemplateService>,

    pub invoices: Arc<dyn InvoiceService>,

    pub receipts: Arc<dyn ReceiptService>,

    /// Renders documents and applies invoice status transitions
    pub generator: DocumentGenerator,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Loads fallback template overrides named in `config`.
    pub fn from_builder_components(
        config: DocsConfig,
        templates: Arc<dyn TemplateService>,
        invoices: Arc<dyn InvoiceService>,
        receipts: Arc<dyn ReceiptService>,
    ) -> Result<Self> {
        let fallbacks = FallbackTemplates::from_config(&config.rendering.fallback_templates)?;
        let renderer = Renderer::new(config.rendering.escape);

        let generator = DocumentGenerator::new(
            templates.clone(),
            invoices.clone(),
            receipts.clone(),
            fallbacks,
            renderer,
        );

        Ok(Self {
            config: Arc::new(config),
            templates,
            invoices,
            receipts,
            generator,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.config.server.service_name
    }
}
