//! In-memory implementations of the service traits for testing and development

use crate::core::error::{InvoiceError, TemplateError};
use crate::core::service::{InvoiceService, ReceiptService, TemplateService};
use crate::entities::{
    DocumentKind, Invoice, InvoiceFilter, Receipt, Template, TemplateFilter, UpdateTemplate,
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory template service
///
/// Every check-then-write sequence runs under a single write lock, which is
/// what makes the one-active-template rule atomic.
#[derive(Clone, Default)]
pub struct InMemoryTemplateService {
    templates: Arc<RwLock<HashMap<Uuid, Template>>>,
}

impl InMemoryTemplateService {
    /// Create a new in-memory template service
    pub fn new() -> Self {
        Self::default()
    }
}

fn active_conflict(
    templates: &HashMap<Uuid, Template>,
    candidate: &Template,
) -> Option<TemplateError> {
    if !candidate.is_active {
        return None;
    }
    templates
        .values()
        .find(|other| other.is_active && other.shares_slot_with(candidate))
        .map(|other| TemplateError::ActiveConflict {
            organization_id: candidate.organization_id,
            kind: candidate.kind,
            active_id: other.id,
        })
}

#[async_trait]
impl TemplateService for InMemoryTemplateService {
    async fn create(&self, template: Template) -> Result<Template> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if let Some(conflict) = active_conflict(&templates, &template) {
            return Err(conflict.into());
        }

        templates.insert(template.id, template.clone());

        Ok(template)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Template>> {
        let templates = self
            .templates
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(templates.get(id).cloned())
    }

    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<Template>> {
        let templates = self
            .templates
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<Template> = templates
            .values()
            .filter(|template| filter.matches(template))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(matching)
    }

    async fn update(&self, id: &Uuid, update: UpdateTemplate) -> Result<Template> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let mut template = templates
            .get(id)
            .cloned()
            .ok_or(TemplateError::NotFound { id: *id })?;
        template.apply(update);

        if let Some(conflict) = active_conflict(&templates, &template) {
            return Err(conflict.into());
        }

        templates.insert(*id, template.clone());

        Ok(template)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound { id: *id }.into())
    }

    async fn activate(&self, id: &Uuid) -> Result<Template> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let target = templates
            .get(id)
            .cloned()
            .ok_or(TemplateError::NotFound { id: *id })?;

        for other in templates.values_mut() {
            if other.is_active && other.shares_slot_with(&target) {
                other.is_active = false;
                other.touch();
                tracing::debug!(
                    template_id = %other.id,
                    replaced_by = %target.id,
                    "template deactivated"
                );
            }
        }

        let activated = templates
            .get_mut(id)
            .ok_or(TemplateError::NotFound { id: *id })?;
        if !activated.is_active {
            activated.is_active = true;
            activated.touch();
        }

        Ok(activated.clone())
    }

    async fn deactivate(&self, id: &Uuid) -> Result<Template> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let template = templates
            .get_mut(id)
            .ok_or(TemplateError::NotFound { id: *id })?;
        if template.is_active {
            template.is_active = false;
            template.touch();
        }

        Ok(template.clone())
    }

    async fn find_active(
        &self,
        organization_id: &Uuid,
        kind: DocumentKind,
    ) -> Result<Option<Template>> {
        let templates = self
            .templates
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(templates
            .values()
            .find(|t| t.is_active && t.organization_id == *organization_id && t.kind == kind)
            .cloned())
    }
}

#[derive(Default)]
struct InvoiceTable {
    rows: BTreeMap<u64, Invoice>,
    last_id: u64,
}

/// In-memory invoice service with sequential ids starting at 1
#[derive(Clone, Default)]
pub struct InMemoryInvoiceService {
    table: Arc<RwLock<InvoiceTable>>,
}

impl InMemoryInvoiceService {
    /// Create a new in-memory invoice service
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceService for InMemoryInvoiceService {
    async fn create(&self, mut invoice: Invoice) -> Result<Invoice> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table.last_id += 1;
        invoice.id = table.last_id;
        table.rows.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn get(&self, id: u64) -> Result<Option<Invoice>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table
            .rows
            .values()
            .filter(|invoice| filter.matches(invoice))
            .cloned()
            .collect())
    }

    async fn update(&self, id: u64, mut invoice: Invoice) -> Result<Invoice> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = table
            .rows
            .get_mut(&id)
            .ok_or(InvoiceError::NotFound { id })?;
        invoice.id = id;
        *slot = invoice.clone();

        Ok(invoice)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| InvoiceError::NotFound { id }.into())
    }
}

/// In-memory receipt archive
#[derive(Clone, Default)]
pub struct InMemoryReceiptService {
    receipts: Arc<RwLock<Vec<Receipt>>>,
}

impl InMemoryReceiptService {
    /// Create a new in-memory receipt archive
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptService for InMemoryReceiptService {
    async fn archive(&self, receipt: Receipt) -> Result<Receipt> {
        let mut receipts = self
            .receipts
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        receipts.push(receipt.clone());

        Ok(receipt)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Receipt>> {
        let receipts = self
            .receipts
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(receipts.iter().find(|r| r.id == *id).cloned())
    }

    async fn list_for_invoice(&self, invoice_id: u64) -> Result<Vec<Receipt>> {
        let receipts = self
            .receipts
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(receipts
            .iter()
            .filter(|r| r.invoice_id == invoice_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DocsError;
    use crate::entities::invoice::fixtures;
    use crate::entities::InvoiceStatus;
    use chrono::Utc;

    fn active(org: Uuid, kind: DocumentKind, name: &str) -> Template {
        let mut template = Template::new(org, kind, name, "<p>{{invoice.amount}}</p>");
        template.is_active = true;
        template
    }

    #[tokio::test]
    async fn test_create_and_get_template() {
        let service = InMemoryTemplateService::new();
        let template = Template::new(Uuid::new_v4(), DocumentKind::Invoice, "Plain", "<p></p>");

        service.create(template.clone()).await.unwrap();

        let retrieved = service.get(&template.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Plain");
    }

    #[tokio::test]
    async fn test_second_active_template_conflicts() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();
        let first = service
            .create(active(org, DocumentKind::Invoice, "First"))
            .await
            .unwrap();

        let err = service
            .create(active(org, DocumentKind::Invoice, "Second"))
            .await
            .unwrap_err();

        match DocsError::from(err) {
            DocsError::Template(TemplateError::ActiveConflict { active_id, .. }) => {
                assert_eq!(active_id, first.id);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_active_templates_in_other_slots_do_not_conflict() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();

        service.create(active(org, DocumentKind::Invoice, "Invoice")).await.unwrap();
        service.create(active(org, DocumentKind::Receipt, "Receipt")).await.unwrap();
        service
            .create(active(Uuid::new_v4(), DocumentKind::Invoice, "Other org"))
            .await
            .unwrap();

        let all_active = service
            .list(&TemplateFilter {
                active: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all_active.len(), 3);
    }

    #[tokio::test]
    async fn test_update_keeping_own_active_flag_is_allowed() {
        let service = InMemoryTemplateService::new();
        let template = service
            .create(active(Uuid::new_v4(), DocumentKind::Invoice, "Only"))
            .await
            .unwrap();

        let updated = service
            .update(
                &template.id,
                UpdateTemplate {
                    name: Some("Renamed".to_string()),
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert!(updated.is_active);
    }

    #[tokio::test]
    async fn test_update_after_activation_keeps_template_active() {
        let service = InMemoryTemplateService::new();
        let template = service
            .create(Template::new(Uuid::new_v4(), DocumentKind::Invoice, "Draft", "x"))
            .await
            .unwrap();

        // A rename prepared before the activation must not undo it
        let rename = UpdateTemplate {
            name: Some("Final".to_string()),
            ..Default::default()
        };
        service.activate(&template.id).await.unwrap();
        let updated = service.update(&template.id, rename).await.unwrap();

        assert_eq!(updated.name, "Final");
        assert!(updated.is_active);
        let stored = service.get(&template.id).await.unwrap().unwrap();
        assert!(stored.is_active);
    }

    #[tokio::test]
    async fn test_update_into_taken_slot_conflicts() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();
        service.create(active(org, DocumentKind::Receipt, "Active")).await.unwrap();
        let draft = service
            .create(Template::new(org, DocumentKind::Receipt, "Draft", "x"))
            .await
            .unwrap();

        let err = service
            .update(
                &draft.id,
                UpdateTemplate {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            DocsError::from(err),
            DocsError::Template(TemplateError::ActiveConflict { .. })
        ));

        let stored = service.get(&draft.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn test_update_missing_template_is_not_found() {
        let err = InMemoryTemplateService::new()
            .update(&Uuid::new_v4(), UpdateTemplate::default())
            .await
            .unwrap_err();
        assert!(matches!(
            DocsError::from(err),
            DocsError::Template(TemplateError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_activate_leaves_single_active_template() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();
        let first = service
            .create(active(org, DocumentKind::Receipt, "First"))
            .await
            .unwrap();
        let second = service
            .create(Template::new(org, DocumentKind::Receipt, "Second", "<p></p>"))
            .await
            .unwrap();

        let activated = service.activate(&second.id).await.unwrap();
        assert!(activated.is_active);

        let first = service.get(&first.id).await.unwrap().unwrap();
        assert!(!first.is_active);

        let found = service
            .find_active(&org, DocumentKind::Receipt)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, second.id);
    }

    #[tokio::test]
    async fn test_concurrent_activation_keeps_one_active() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();
        let mut ids = Vec::new();
        for i in 0..8 {
            let template = service
                .create(Template::new(org, DocumentKind::Invoice, format!("T{i}"), "x"))
                .await
                .unwrap();
            ids.push(template.id);
        }

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let service = service.clone();
                let id = *id;
                tokio::spawn(async move { service.activate(&id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let active = service
            .list(&TemplateFilter {
                organization_id: Some(org),
                active: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn test_deactivate_and_delete() {
        let service = InMemoryTemplateService::new();
        let org = Uuid::new_v4();
        let template = service
            .create(active(org, DocumentKind::Invoice, "Only"))
            .await
            .unwrap();

        let deactivated = service.deactivate(&template.id).await.unwrap();
        assert!(!deactivated.is_active);
        assert!(service.find_active(&org, DocumentKind::Invoice).await.unwrap().is_none());

        service.delete(&template.id).await.unwrap();
        assert!(service.get(&template.id).await.unwrap().is_none());
        assert!(service.delete(&template.id).await.is_err());
    }

    #[tokio::test]
    async fn test_invoice_ids_are_sequential() {
        let service = InMemoryInvoiceService::new();
        let org = Uuid::new_v4();

        let first = service.create(fixtures::invoice(org)).await.unwrap();
        let second = service.create(fixtures::invoice(org)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        service.delete(first.id).await.unwrap();
        let third = service.create(fixtures::invoice(org)).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_invoice_update_and_filter() {
        let service = InMemoryInvoiceService::new();
        let org = Uuid::new_v4();
        let mut invoice = service.create(fixtures::invoice(org)).await.unwrap();
        service.create(fixtures::invoice(Uuid::new_v4())).await.unwrap();

        invoice.status = InvoiceStatus::Overdue;
        service.update(invoice.id, invoice.clone()).await.unwrap();

        let overdue = service
            .list(&InvoiceFilter {
                organization_id: Some(org),
                status: Some(InvoiceStatus::Overdue),
            })
            .await
            .unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, invoice.id);
    }

    #[tokio::test]
    async fn test_update_missing_invoice_is_not_found() {
        let service = InMemoryInvoiceService::new();
        let err = service
            .update(99, fixtures::invoice(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(
            DocsError::from(err),
            DocsError::Invoice(InvoiceError::NotFound { id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_receipts_listed_per_invoice() {
        let service = InMemoryReceiptService::new();
        let org = Uuid::new_v4();
        for invoice_id in [1, 1, 2] {
            service
                .archive(Receipt {
                    id: Uuid::new_v4(),
                    invoice_id,
                    organization_id: org,
                    template_id: None,
                    html: "<p>paid</p>".to_string(),
                    issued_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        assert_eq!(service.list_for_invoice(1).await.unwrap().len(), 2);
        assert_eq!(service.list_for_invoice(2).await.unwrap().len(), 1);
        assert!(service.list_for_invoice(3).await.unwrap().is_empty());
    }
}
