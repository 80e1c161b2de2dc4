//! Document kinds a template can produce

use crate::core::field::FieldValue;
use crate::core::placeholders::Placeholders;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of document a template renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Receipt,
}

impl DocumentKind {
    /// All kinds, in display order
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Invoice, DocumentKind::Receipt];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Receipt => "receipt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Placeholders for DocumentKind {
    fn resolve(&self, path: &[&str]) -> Option<FieldValue> {
        path.is_empty().then(|| FieldValue::from(self.as_str()))
    }
}
