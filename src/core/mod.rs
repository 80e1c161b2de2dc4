//! Core module containing fundamental traits and types

pub mod error;
pub mod extractors;
pub mod field;
pub mod placeholders;
pub mod service;

pub use error::{ConfigError, DocsError, InvoiceError, TemplateError, ValidationError};
pub use extractors::Validated;
pub use field::FieldValue;
pub use placeholders::Placeholders;
pub use service::{InvoiceService, ReceiptService, TemplateService};
