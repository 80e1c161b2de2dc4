//! Domain records: document kinds, templates, invoices and receipts

pub mod invoice;
pub mod kind;
pub mod macros;
pub mod receipt;
pub mod template;

pub use invoice::{CreateInvoice, Invoice, InvoiceFilter, InvoiceStatus, StatusChange, UpdateInvoice};
pub use kind::DocumentKind;
pub use receipt::Receipt;
pub use template::{CreateTemplate, Styling, Template, TemplateFilter, UpdateTemplate};
