//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::DocsConfig;
use crate::core::service::{InvoiceService, ReceiptService, TemplateService};
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the document service HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(DocsConfig::from_yaml_file("leasedoc.yaml")?)
///     .with_template_service(InMemoryTemplateService::new())
///     .with_invoice_service(InMemoryInvoiceService::new())
///     .with_receipt_service(InMemoryReceiptService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: DocsConfig,
    template_service: Option<Arc<dyn TemplateService>>,
    invoice_service: Option<Arc<dyn InvoiceService>>,
    receipt_service: Option<Arc<dyn ReceiptService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: DocsConfig::default(),
            template_service: None,
            invoice_service: None,
            receipt_service: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DocsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the template service (required)
    pub fn with_template_service(mut self, service: impl TemplateService + 'static) -> Self {
        self.template_service = Some(Arc::new(service));
        self
    }

    /// Set the invoice service (required)
    pub fn with_invoice_service(mut self, service: impl InvoiceService + 'static) -> Self {
        self.invoice_service = Some(Arc::new(service));
        self
    }

    /// Set the receipt service (required)
    pub fn with_receipt_service(mut self, service: impl ReceiptService + 'static) -> Self {
        self.receipt_service = Some(Arc::new(service));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the host holding services, generator and configuration
    pub fn build_host(mut self) -> Result<ServerHost> {
        let templates = self
            .template_service
            .take()
            .ok_or_else(|| anyhow!("TemplateService is required. Call .with_template_service()"))?;
        let invoices = self
            .invoice_service
            .take()
            .ok_or_else(|| anyhow!("InvoiceService is required. Call .with_invoice_service()"))?;
        let receipts = self
            .receipt_service
            .take()
            .ok_or_else(|| anyhow!("ReceiptService is required. Call .with_receipt_service()"))?;

        ServerHost::from_builder_components(self.config, templates, invoices, receipts)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve on the configured bind address with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(%addr, "server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        },
    }
}
