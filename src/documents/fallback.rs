//! Built-in templates used when an organization has no active template

use crate::config::FallbackTemplatePaths;
use crate::core::error::ConfigError;
use crate::entities::DocumentKind;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_INVOICE: &str = include_str!("../../assets/templates/invoice.html");
const BUILTIN_RECEIPT: &str = include_str!("../../assets/templates/receipt.html");

/// The full-page wrapper used for browser previews
pub(crate) const PREVIEW_PAGE: &str = include_str!("../../assets/templates/page.html");

/// Fallback template content per document kind
#[derive(Debug, Clone)]
pub struct FallbackTemplates {
    invoice: Arc<str>,
    receipt: Arc<str>,
}

impl FallbackTemplates {
    /// The templates compiled into the binary
    pub fn builtin() -> Self {
        Self {
            invoice: Arc::from(BUILTIN_INVOICE),
            receipt: Arc::from(BUILTIN_RECEIPT),
        }
    }

    /// Built-in templates, replaced by any override files named in config
    pub fn from_config(paths: &FallbackTemplatePaths) -> Result<Self, ConfigError> {
        let mut templates = Self::builtin();
        if let Some(path) = &paths.invoice {
            templates.invoice = read_override(DocumentKind::Invoice, path)?;
        }
        if let Some(path) = &paths.receipt {
            templates.receipt = read_override(DocumentKind::Receipt, path)?;
        }
        Ok(templates)
    }

    pub fn get(&self, kind: DocumentKind) -> Arc<str> {
        match kind {
            DocumentKind::Invoice => self.invoice.clone(),
            DocumentKind::Receipt => self.receipt.clone(),
        }
    }
}

impl Default for FallbackTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_override(kind: DocumentKind, path: &Path) -> Result<Arc<str>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::info!(%kind, path = %path.display(), "loaded fallback template override");
    Ok(Arc::from(content))
}
