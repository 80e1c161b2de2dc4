//! Template record and request payloads

use super::kind::DocumentKind;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;
use validator::Validate;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

// Styling values are written into a <style> block unescaped
static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z0-9 ,'"-]{1,200}$"#).expect("font family pattern is valid")
});

/// Presentation metadata applied around a rendered document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Styling {
    /// CSS font-family list
    #[validate(regex(path = *FONT_FAMILY))]
    pub font_family: Option<String>,

    /// Primary text color as `#rgb` or `#rrggbb`
    #[validate(regex(path = *HEX_COLOR))]
    pub primary_color: Option<String>,

    /// Free-form layout name (e.g. "classic", "compact")
    #[validate(length(min = 1, max = 64))]
    pub layout: Option<String>,
}

/// An HTML template owned by an organization for one document kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub kind: DocumentKind,
    pub name: String,
    /// HTML with `{{dotted.path}}` placeholders
    pub content: String,
    #[serde(default)]
    pub styling: Styling,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Update the updated_at timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn new(
        organization_id: Uuid,
        kind: DocumentKind,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            organization_id,
            kind,
            name: name.into(),
            content: content.into(),
            styling: Styling::default(),
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this template competes with `other` for the active slot
    pub fn shares_slot_with(&self, other: &Template) -> bool {
        self.id != other.id
            && self.organization_id == other.organization_id
            && self.kind == other.kind
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: UpdateTemplate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(styling) = update.styling {
            self.styling = styling;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.touch();
    }
}

/// Payload for creating a template
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTemplate {
    pub organization_id: Uuid,
    pub kind: DocumentKind,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    #[validate(nested)]
    pub styling: Styling,
    #[serde(default)]
    pub is_active: bool,
}

impl CreateTemplate {
    pub fn into_template(self) -> Template {
        let mut template = Template::new(self.organization_id, self.kind, self.name, self.content);
        template.styling = self.styling;
        template.is_active = self.is_active;
        template
    }
}

/// Payload for updating a template; every field is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTemplate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(nested)]
    pub styling: Option<Styling>,
    pub is_active: Option<bool>,
}

/// Query filter for listing templates
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFilter {
    pub organization_id: Option<Uuid>,
    pub kind: Option<DocumentKind>,
    pub active: Option<bool>,
}

impl TemplateFilter {
    pub fn matches(&self, template: &Template) -> bool {
        self.organization_id
            .is_none_or(|org| template.organization_id == org)
            && self.kind.is_none_or(|kind| template.kind == kind)
            && self.active.is_none_or(|active| template.is_active == active)
    }
}
