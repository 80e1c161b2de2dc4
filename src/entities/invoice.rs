//! Invoice record and request payloads

use crate::core::field::FieldValue;
use crate::core::placeholders::Placeholders;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Placeholders for InvoiceStatus {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        path.is_empty().then(|| FieldValue::from(self.as_str()))
    }
}

/// A rent or service invoice issued to a tenant
///
/// `id` is assigned by the invoice store on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u64,
    pub organization_id: Uuid,
    pub contract_id: Option<u64>,
    pub property_id: Option<u64>,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub tenant_name: String,
    pub merchant: Option<String>,
    /// Billing frequency label (e.g. "monthly")
    pub frequency: Option<String>,
    /// Identifier in an external billing system
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_placeholders!(Invoice {
    id,
    organization_id,
    contract_id,
    property_id,
    amount,
    due_date,
    status,
    tenant_name,
    merchant,
    frequency,
    external_id,
    created_at,
    updated_at,
});

impl Invoice {
    /// Update the updated_at timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Apply a partial update, returning the previous status
    pub fn apply(&mut self, update: UpdateInvoice) -> InvoiceStatus {
        let previous = self.status;
        if let Some(contract_id) = update.contract_id {
            self.contract_id = Some(contract_id);
        }
        if let Some(property_id) = update.property_id {
            self.property_id = Some(property_id);
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(tenant_name) = update.tenant_name {
            self.tenant_name = tenant_name;
        }
        if let Some(merchant) = update.merchant {
            self.merchant = Some(merchant);
        }
        if let Some(frequency) = update.frequency {
            self.frequency = Some(frequency);
        }
        if let Some(external_id) = update.external_id {
            self.external_id = Some(external_id);
        }
        self.touch();
        previous
    }
}

/// Payload for submitting an invoice
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoice {
    pub organization_id: Uuid,
    pub contract_id: Option<u64>,
    pub property_id: Option<u64>,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[validate(length(min = 1, max = 200))]
    pub tenant_name: String,
    #[validate(length(max = 200))]
    pub merchant: Option<String>,
    #[validate(length(max = 64))]
    pub frequency: Option<String>,
    #[validate(length(max = 128))]
    pub external_id: Option<String>,
}

impl CreateInvoice {
    /// Build the record; the store replaces the placeholder id
    pub fn into_invoice(self) -> Invoice {
        let now = Utc::now();
        Invoice {
            id: 0,
            organization_id: self.organization_id,
            contract_id: self.contract_id,
            property_id: self.property_id,
            amount: self.amount,
            due_date: self.due_date,
            status: self.status,
            tenant_name: self.tenant_name,
            merchant: self.merchant,
            frequency: self.frequency,
            external_id: self.external_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for updating an invoice; every field is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInvoice {
    pub contract_id: Option<u64>,
    pub property_id: Option<u64>,
    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    #[validate(length(min = 1, max = 200))]
    pub tenant_name: Option<String>,
    #[validate(length(max = 200))]
    pub merchant: Option<String>,
    #[validate(length(max = 64))]
    pub frequency: Option<String>,
    #[validate(length(max = 128))]
    pub external_id: Option<String>,
}

/// Payload for `PUT /invoices/{id}/status`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StatusChange {
    pub status: InvoiceStatus,
}

/// Query filter for listing invoices
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceFilter {
    pub organization_id: Option<Uuid>,
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        self.organization_id
            .is_none_or(|org| invoice.organization_id == org)
            && self.status.is_none_or(|status| invoice.status == status)
    }
}
