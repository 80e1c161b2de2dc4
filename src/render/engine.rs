//! The `{{dotted.path}}` substitution engine

use super::escape::{EscapeMode, escape_html};
use crate::core::field::FieldValue;
use crate::core::placeholders::Placeholders;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `{{{path}}}` (raw) or `{{path}}` (escaped), single line, non-greedy
///
/// A raw path contains no braces, so `{{{` never spans a neighbouring `{{path}}`.
const PLACEHOLDER_PATTERN: &str = r"\{\{\{([^{}\n]*?)\}\}\}|\{\{(.*?)\}\}";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// Substitutes placeholders in HTML templates
///
/// Every `{{path}}` is replaced by the value found at `path` in the context,
/// or the empty string when any segment is missing. Whitespace inside the
/// braces is ignored. Text outside placeholders is copied unchanged, and
/// unbalanced braces never match.
///
/// Values are HTML-escaped unless the renderer was built with
/// [`EscapeMode::None`] or the placeholder uses triple braces
/// (`{{{path}}}`), which always inserts the value verbatim.
///
/// # Example
///
/// ```rust,ignore
/// let data = serde_json::json!({"invoice": {"tenant_name": "Acme Corp", "amount": 500}});
/// let html = Renderer::default().render("Hello {{invoice.tenant_name}}, due: {{ invoice.amount }}", &data);
/// assert_eq!(html, "Hello Acme Corp, due: 500");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    escape: EscapeMode,
}

impl Renderer {
    pub fn new(escape: EscapeMode) -> Self {
        Self { escape }
    }

    /// A renderer that never escapes
    pub fn trusted() -> Self {
        Self::new(EscapeMode::None)
    }

    pub fn escape_mode(&self) -> EscapeMode {
        self.escape
    }

    /// Render `template` against `context`
    pub fn render<C>(&self, template: &str, context: &C) -> String
    where
        C: Placeholders + ?Sized,
    {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| {
                let (expression, raw) = match (caps.get(1), caps.get(2)) {
                    (Some(inner), _) => (inner.as_str(), true),
                    (None, Some(inner)) => (inner.as_str(), false),
                    (None, None) => return String::new(),
                };

                let value = resolve_expression(context, expression)
                    .map(|value| value.to_string())
                    .unwrap_or_default();

                if raw || self.escape == EscapeMode::None {
                    value
                } else {
                    escape_html(&value).into_owned()
                }
            })
            .into_owned()
    }
}

/// Resolve one placeholder expression (the text between the braces)
pub fn resolve_expression<C>(context: &C, expression: &str) -> Option<FieldValue>
where
    C: Placeholders + ?Sized,
{
    let path: Vec<&str> = expression.trim().split('.').collect();
    context.resolve(&path)
}

/// Render with the default renderer (HTML escaping on)
pub fn render_with_data<C>(template: &str, context: &C) -> String
where
    C: Placeholders + ?Sized,
{
    Renderer::default().render(template, context)
}

/// The trimmed paths referenced by `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|inner| inner.as_str().trim().to_string())
        .collect()
}
