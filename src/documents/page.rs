//! Full-page HTML wrapper for browser previews

use super::fallback::PREVIEW_PAGE;
use crate::entities::Styling;
use crate::render::Renderer;

const DEFAULT_FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const DEFAULT_PRIMARY_COLOR: &str = "#222222";
const DEFAULT_LAYOUT: &str = "classic";

struct PageContext<'a> {
    title: &'a str,
    font_family: &'a str,
    primary_color: &'a str,
    layout: &'a str,
    body: &'a str,
}

crate::impl_placeholders!(PageContext<'_> {
    title,
    font_family,
    primary_color,
    layout,
    body,
});

/// Wrap a rendered fragment in a standalone HTML page
///
/// `body` is inserted verbatim; the title is escaped. Styling values are
/// validated on input and fall back to defaults when unset.
pub fn preview_page(title: &str, body: &str, styling: &Styling) -> String {
    let context = PageContext {
        title,
        font_family: styling.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY),
        primary_color: styling.primary_color.as_deref().unwrap_or(DEFAULT_PRIMARY_COLOR),
        layout: styling.layout.as_deref().unwrap_or(DEFAULT_LAYOUT),
        body,
    };
    Renderer::default().render(PREVIEW_PAGE, &context)
}
