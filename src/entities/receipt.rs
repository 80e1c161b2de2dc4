//! Archived receipts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A receipt rendered when an invoice was marked paid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub invoice_id: u64,
    pub organization_id: Uuid,
    /// Template used, `None` when the built-in fallback rendered it
    pub template_id: Option<Uuid>,
    pub html: String,
    pub issued_at: DateTime<Utc>,
}

