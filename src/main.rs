//! Document service binary
//!
//! Reads configuration from the YAML file named by `LEASEDOC_CONFIG` (defaults
//! otherwise) and serves the REST API with in-memory stores.

use anyhow::Result;
use leasedoc::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "LEASEDOC_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => DocsConfig::from_yaml_file(path)?,
        None => DocsConfig::default_config(),
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        service = %config.server.service_name,
        escape = ?config.rendering.escape,
        "starting document service"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_template_service(InMemoryTemplateService::new())
        .with_invoice_service(InMemoryInvoiceService::new())
        .with_receipt_service(InMemoryReceiptService::new())
        .serve()
        .await
}
