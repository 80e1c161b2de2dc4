//! Invoice and receipt generation

use super::context::{DocumentContext, ReceiptDetails};
use super::fallback::FallbackTemplates;
use super::page::preview_page;
use super::selector::TemplateSelector;
use crate::core::error::InvoiceError;
use crate::core::service::{InvoiceService, ReceiptService, TemplateService};
use crate::entities::{
    DocumentKind, Invoice, InvoiceStatus, Receipt, Styling, UpdateInvoice,
};
use crate::render::Renderer;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// A rendered document fragment and where it came from
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub invoice_id: u64,
    pub organization_id: Uuid,
    /// `None` when the built-in fallback was used
    pub template_id: Option<Uuid>,
    pub used_fallback: bool,
    pub styling: Styling,
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderedDocument {
    /// Title used for the preview page
    pub fn title(&self) -> String {
        match self.kind {
            DocumentKind::Invoice => format!("Invoice #{}", self.invoice_id),
            DocumentKind::Receipt => format!("Receipt for invoice #{}", self.invoice_id),
        }
    }

    /// The fragment wrapped in a standalone HTML page
    pub fn to_page(&self) -> String {
        preview_page(&self.title(), &self.html, &self.styling)
    }
}

/// Result of an invoice update, with the receipt it triggered if any
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceUpdate {
    pub invoice: Invoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

/// Renders invoices and receipts and applies status transitions
#[derive(Clone)]
pub struct DocumentGenerator {
    invoices: Arc<dyn InvoiceService>,
    receipts: Arc<dyn ReceiptService>,
    selector: TemplateSelector,
    renderer: Renderer,
    // Serializes read-modify-write on invoices so a paid transition is seen once
    transitions: Arc<Mutex<()>>,
}

impl DocumentGenerator {
    pub fn new(
        templates: Arc<dyn TemplateService>,
        invoices: Arc<dyn InvoiceService>,
        receipts: Arc<dyn ReceiptService>,
        fallbacks: FallbackTemplates,
        renderer: Renderer,
    ) -> Self {
        Self {
            invoices,
            receipts,
            selector: TemplateSelector::new(templates, fallbacks),
            renderer,
            transitions: Arc::new(Mutex::new(())),
        }
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Render `invoice` as a `kind` document
    pub async fn render(
        &self,
        invoice: &Invoice,
        kind: DocumentKind,
        receipt: Option<ReceiptDetails>,
    ) -> Result<RenderedDocument> {
        let selected = self.selector.select(&invoice.organization_id, kind).await?;

        let mut context = DocumentContext::for_invoice(invoice.clone());
        if let Some(details) = receipt {
            context = context.with_receipt(details);
        }
        let html = self.renderer.render(selected.content(), &context);

        Ok(RenderedDocument {
            kind,
            invoice_id: invoice.id,
            organization_id: invoice.organization_id,
            template_id: selected.template_id(),
            used_fallback: selected.is_fallback(),
            styling: selected.styling(),
            html,
            generated_at: context.generated_at,
        })
    }

    /// Render a stored invoice
    ///
    /// Receipt documents pick up the most recent archived receipt, if any.
    pub async fn document(&self, invoice_id: u64, kind: DocumentKind) -> Result<RenderedDocument> {
        let invoice = self.load_invoice(invoice_id).await?;

        let receipt = match kind {
            DocumentKind::Invoice => None,
            DocumentKind::Receipt => self
                .receipts
                .list_for_invoice(invoice_id)
                .await?
                .last()
                .map(|r| ReceiptDetails {
                    id: r.id,
                    issued_at: r.issued_at,
                }),
        };

        self.render(&invoice, kind, receipt).await
    }

    /// Apply a partial update; a transition into `paid` issues a receipt
    pub async fn update_invoice(&self, id: u64, update: UpdateInvoice) -> Result<InvoiceUpdate> {
        let _guard = self.transitions.lock().await;

        let mut invoice = self.load_invoice(id).await?;
        let previous = invoice.apply(update);
        let invoice = self.invoices.update(id, invoice).await?;

        let receipt = if previous != InvoiceStatus::Paid && invoice.status == InvoiceStatus::Paid {
            Some(self.issue_receipt(&invoice).await?)
        } else {
            None
        };

        Ok(InvoiceUpdate { invoice, receipt })
    }

    /// Change only the status of an invoice
    pub async fn change_status(&self, id: u64, status: InvoiceStatus) -> Result<InvoiceUpdate> {
        self.update_invoice(
            id,
            UpdateInvoice {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Render and archive a receipt for `invoice`
    pub async fn issue_receipt(&self, invoice: &Invoice) -> Result<Receipt> {
        let details = ReceiptDetails {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
        };
        let document = self
            .render(invoice, DocumentKind::Receipt, Some(details))
            .await?;

        let receipt = self
            .receipts
            .archive(Receipt {
                id: details.id,
                invoice_id: invoice.id,
                organization_id: invoice.organization_id,
                template_id: document.template_id,
                html: document.html,
                issued_at: details.issued_at,
            })
            .await?;

        tracing::info!(
            invoice_id = invoice.id,
            receipt_id = %receipt.id,
            fallback = document.used_fallback,
            "receipt issued"
        );

        Ok(receipt)
    }

    /// Render arbitrary template content against ad-hoc JSON data
    pub fn preview_template(&self, content: &str, data: &serde_json::Value) -> String {
        self.renderer.render(content, data)
    }

    async fn load_invoice(&self, id: u64) -> Result<Invoice> {
        Ok(self
            .invoices
            .get(id)
            .await?
            .ok_or(InvoiceError::NotFound { id })?)
    }
}
