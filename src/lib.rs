//! # leasedoc
//!
//! Invoice and receipt documents for property management.
//!
//! ## Features
//!
//! - **Placeholder templates**: `{{invoice.tenant_name}}` style dotted paths, HTML-escaped
//!   by default, `{{{raw}}}` for trusted values
//! - **Typed contexts**: structs expose their fields to templates through the
//!   `Placeholders` trait, generated by `impl_placeholders!`
//! - **Per-organization templates**: at most one active template per organization and
//!   document kind, with built-in fallbacks when none is active
//! - **Receipts**: a transition into `paid` renders and archives exactly one receipt
//! - **REST API**: template management, invoices, rendered documents and HTML previews
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leasedoc::prelude::*;
//!
//! let html = render_with_data(
//!     "Hello {{invoice.tenant_name}}, amount due: {{invoice.amount}}",
//!     &serde_json::json!({"invoice": {"tenant_name": "Acme Corp", "amount": 500}}),
//! );
//! assert_eq!(html, "Hello Acme Corp, amount due: 500");
//!
//! ServerBuilder::new()
//!     .with_template_service(InMemoryTemplateService::new())
//!     .with_invoice_service(InMemoryInvoiceService::new())
//!     .with_receipt_service(InMemoryReceiptService::new())
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod documents;
pub mod entities;
pub mod render;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        error::{DocsError, InvoiceError, TemplateError, ValidationError},
        field::FieldValue,
        placeholders::Placeholders,
        service::{InvoiceService, ReceiptService, TemplateService},
    };

    // === Macros ===
    pub use crate::impl_placeholders;

    // === Entities ===
    pub use crate::entities::{
        DocumentKind, Invoice, InvoiceStatus, Receipt, Styling, Template, TemplateFilter,
    };

    // === Rendering ===
    pub use crate::documents::{DocumentContext, DocumentGenerator, RenderedDocument};
    pub use crate::render::{EscapeMode, Renderer, render_with_data};

    // === Storage ===
    pub use crate::storage::{InMemoryInvoiceService, InMemoryReceiptService, InMemoryTemplateService};

    // === Config ===
    pub use crate::config::DocsConfig;

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
