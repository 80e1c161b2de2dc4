//! Document generation: template selection, rendering context and receipts

pub mod context;
pub mod fallback;
pub mod generator;
pub mod page;
pub mod selector;

pub use context::{DocumentContext, ReceiptDetails, unresolved_placeholders};
pub use fallback::FallbackTemplates;
pub use generator::{DocumentGenerator, InvoiceUpdate, RenderedDocument};
pub use page::preview_page;
pub use selector::{SelectedTemplate, TemplateSelector};
