//! Typed rendering context for invoice and receipt documents

use crate::entities::{DocumentKind, Invoice, InvoiceStatus};
use crate::render::{placeholders, resolve_expression};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Receipt section of the context, present when rendering a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptDetails {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
}

/// Everything a document template can reference
///
/// Paths: `invoice.*` (every invoice field), `receipt.id`,
/// `receipt.issued_at` and `generated_at`.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub invoice: Invoice,
    pub receipt: Option<ReceiptDetails>,
    pub generated_at: DateTime<Utc>,
}

crate::impl_placeholders!(ReceiptDetails { id, issued_at });
crate::impl_placeholders!(DocumentContext {
    invoice,
    receipt,
    generated_at,
});

impl DocumentContext {
    pub fn for_invoice(invoice: Invoice) -> Self {
        Self {
            invoice,
            receipt: None,
            generated_at: Utc::now(),
        }
    }

    pub fn with_receipt(mut self, receipt: ReceiptDetails) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// A context with every field populated, used to check template paths
    pub fn sample(kind: DocumentKind) -> Self {
        let now = Utc::now();
        let invoice = Invoice {
            id: 1,
            organization_id: Uuid::nil(),
            contract_id: Some(1),
            property_id: Some(1),
            amount: 0.0,
            due_date: NaiveDate::default(),
            status: InvoiceStatus::Pending,
            tenant_name: String::new(),
            merchant: Some(String::new()),
            frequency: Some(String::new()),
            external_id: Some(String::new()),
            created_at: now,
            updated_at: now,
        };

        let context = Self::for_invoice(invoice);
        match kind {
            DocumentKind::Invoice => context,
            DocumentKind::Receipt => context.with_receipt(ReceiptDetails {
                id: Uuid::nil(),
                issued_at: now,
            }),
        }
    }
}

/// Placeholder paths in `content` that a `kind` document can never resolve
///
/// Each path is reported once, in order of first appearance.
pub fn unresolved_placeholders(content: &str, kind: DocumentKind) -> Vec<String> {
    let sample = DocumentContext::sample(kind);
    let mut unresolved: Vec<String> = Vec::new();
    for path in placeholders(content) {
        if resolve_expression(&sample, &path).is_none() && !unresolved.contains(&path) {
            unresolved.push(path);
        }
    }
    unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::invoice::fixtures;
    use crate::render::render_with_data;

    #[test]
    fn test_typed_context_renders_acme_example() {
        let mut invoice = fixtures::invoice(Uuid::new_v4());
        invoice.amount = 500.0;
        let context = DocumentContext::for_invoice(invoice);

        assert_eq!(
            render_with_data(
                "Hello {{invoice.tenant_name}}, amount due: {{invoice.amount}}",
                &context
            ),
            "Hello Acme Corp, amount due: 500"
        );
    }

    #[test]
    fn test_receipt_section_empty_without_receipt() {
        let context = DocumentContext::for_invoice(fixtures::invoice(Uuid::new_v4()));
        assert_eq!(render_with_data("[{{receipt.id}}]", &context), "[]");
    }

    #[test]
    fn test_receipt_section_resolves_with_receipt() {
        let id = Uuid::new_v4();
        let context = DocumentContext::for_invoice(fixtures::invoice(Uuid::new_v4()))
            .with_receipt(ReceiptDetails {
                id,
                issued_at: Utc::now(),
            });
        assert_eq!(render_with_data("{{receipt.id}}", &context), id.to_string());
    }

    #[test]
    fn test_unresolved_placeholders() {
        let content = "{{invoice.amount}} {{invoice.tenant}} {{ receipt.id }} {{invoice.tenant}}";
        assert_eq!(
            unresolved_placeholders(content, DocumentKind::Invoice),
            vec!["invoice.tenant", "receipt.id"]
        );
        assert_eq!(
            unresolved_placeholders(content, DocumentKind::Receipt),
            vec!["invoice.tenant"]
        );
    }

    #[test]
    fn test_builtin_fallbacks_fully_resolve() {
        let fallbacks = crate::documents::FallbackTemplates::builtin();
        for kind in DocumentKind::ALL {
            assert!(unresolved_placeholders(&fallbacks.get(kind), kind).is_empty());
        }
    }
}
