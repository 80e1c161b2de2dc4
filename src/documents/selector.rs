//! Template selection with built-in fallback

use super::fallback::FallbackTemplates;
use crate::core::service::TemplateService;
use crate::entities::{DocumentKind, Styling, Template};
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

/// The template chosen for a document
#[derive(Debug, Clone)]
pub enum SelectedTemplate {
    /// The organization's active template
    Stored(Template),
    /// No active template; the built-in one for the kind
    Fallback { kind: DocumentKind, content: Arc<str> },
}

impl SelectedTemplate {
    pub fn content(&self) -> &str {
        match self {
            SelectedTemplate::Stored(template) => &template.content,
            SelectedTemplate::Fallback { content, .. } => content,
        }
    }

    pub fn template_id(&self) -> Option<Uuid> {
        match self {
            SelectedTemplate::Stored(template) => Some(template.id),
            SelectedTemplate::Fallback { .. } => None,
        }
    }

    pub fn styling(&self) -> Styling {
        match self {
            SelectedTemplate::Stored(template) => template.styling.clone(),
            SelectedTemplate::Fallback { .. } => Styling::default(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SelectedTemplate::Fallback { .. })
    }
}

/// Picks the active template for an (organization, kind) pair
#[derive(Clone)]
pub struct TemplateSelector {
    templates: Arc<dyn TemplateService>,
    fallbacks: FallbackTemplates,
}

impl TemplateSelector {
    pub fn new(templates: Arc<dyn TemplateService>, fallbacks: FallbackTemplates) -> Self {
        Self {
            templates,
            fallbacks,
        }
    }

    /// Select the active template, or the built-in fallback when there is none
    ///
    /// Only a missing template falls back; storage errors propagate.
    pub async fn select(
        &self,
        organization_id: &Uuid,
        kind: DocumentKind,
    ) -> Result<SelectedTemplate> {
        match self.templates.find_active(organization_id, kind).await? {
            Some(template) => Ok(SelectedTemplate::Stored(template)),
            None => {
                tracing::debug!(
                    organization_id = %organization_id,
                    %kind,
                    "no active template, using built-in fallback"
                );
                Ok(SelectedTemplate::Fallback {
                    kind,
                    content: self.fallbacks.get(kind),
                })
            }
        }
    }
}
