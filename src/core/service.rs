//! Service traits for templates, invoices and receipts

use crate::entities::{
    DocumentKind, Invoice, InvoiceFilter, Receipt, Template, TemplateFilter, UpdateTemplate,
};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing templates
///
/// Implementations must enforce that at most one template is active per
/// (organization, kind) pair, atomically with respect to concurrent calls.
#[async_trait]
pub trait TemplateService: Send + Sync {
    /// Create a new template
    ///
    /// Fails with `TemplateError::ActiveConflict` when the template is active
    /// and another template already holds its slot.
    async fn create(&self, template: Template) -> Result<Template>;

    /// Get a template by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Template>>;

    /// List templates matching the filter, oldest first
    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<Template>>;

    /// Apply a partial update to an existing template
    ///
    /// The read, merge and write happen atomically, so fields the update
    /// leaves unset (including `is_active`) keep their current stored value.
    /// Same conflict rule as [`create`](Self::create).
    async fn update(&self, id: &Uuid, update: UpdateTemplate) -> Result<Template>;

    /// Delete a template
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Make a template the active one for its slot, deactivating the others
    async fn activate(&self, id: &Uuid) -> Result<Template>;

    /// Clear a template's active flag
    async fn deactivate(&self, id: &Uuid) -> Result<Template>;

    /// Find the active template for an organization and kind
    async fn find_active(
        &self,
        organization_id: &Uuid,
        kind: DocumentKind,
    ) -> Result<Option<Template>>;
}

/// Service trait for managing invoices
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// Store a new invoice, assigning the next numeric id
    async fn create(&self, invoice: Invoice) -> Result<Invoice>;

    /// Get an invoice by ID
    async fn get(&self, id: u64) -> Result<Option<Invoice>>;

    /// List invoices matching the filter, by ascending id
    async fn list(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>>;

    /// Replace an existing invoice
    async fn update(&self, id: u64, invoice: Invoice) -> Result<Invoice>;

    /// Delete an invoice
    async fn delete(&self, id: u64) -> Result<()>;
}

/// Service trait for the receipt archive
#[async_trait]
pub trait ReceiptService: Send + Sync {
    /// Archive a rendered receipt
    async fn archive(&self, receipt: Receipt) -> Result<Receipt>;

    /// Get a receipt by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Receipt>>;

    /// All receipts for an invoice, oldest first
    async fn list_for_invoice(&self, invoice_id: u64) -> Result<Vec<Receipt>>;
}
