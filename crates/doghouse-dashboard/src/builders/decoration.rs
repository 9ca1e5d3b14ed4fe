//! Decoration builders: notes, text, images, embeds.
//!
//! These are the string-content widgets. Unlike the structured kinds,
//! their options carry an `extra` map whose keys pass through into the
//! definition opaquely (last write wins over recognized keys).

use serde_json::{Map, Value};

use crate::defaults;
use crate::widget::{Widget, WidgetKind};

use super::untitled;

/// Recognized note options plus opaque pass-through keys.
#[derive(Debug, Clone, Default)]
pub struct NoteOptions {
    /// Background color. Defaults to white.
    pub background_color: Option<String>,
    /// Font size. Defaults to 14.
    pub font_size: Option<String>,
    /// Text alignment. Defaults to left.
    pub text_align: Option<String>,
    /// Extra definition keys forwarded verbatim.
    pub extra: Map<String, Value>,
}

/// Builds a markdown note.
#[must_use]
pub fn note(content: impl Into<String>, options: &NoteOptions) -> Widget {
    let options = options.clone();
    let mut def = untitled(WidgetKind::Note);
    def.insert("content".to_string(), Value::String(content.into()));
    def.insert(
        "background_color".to_string(),
        Value::String(
            options
                .background_color
                .unwrap_or_else(|| defaults::NOTE_BACKGROUND.to_string()),
        ),
    );
    def.insert(
        "font_size".to_string(),
        Value::String(
            options
                .font_size
                .unwrap_or_else(|| defaults::NOTE_FONT_SIZE.to_string()),
        ),
    );
    def.insert(
        "text_align".to_string(),
        Value::String(
            options
                .text_align
                .unwrap_or_else(|| defaults::TEXT_ALIGN.to_string()),
        ),
    );
    for (key, value) in options.extra {
        def.insert(key, value);
    }
    Widget::new(WidgetKind::Note, def)
}

/// Recognized free-text options plus opaque pass-through keys.
#[derive(Debug, Clone, Default)]
pub struct FreeTextOptions {
    /// Text color. Omitted unless set.
    pub color: Option<String>,
    /// Font size. Defaults to auto-fit.
    pub font_size: Option<String>,
    /// Text alignment. Defaults to left.
    pub text_align: Option<String>,
    /// Extra definition keys forwarded verbatim.
    pub extra: Map<String, Value>,
}

/// Builds an unboxed text widget.
#[must_use]
pub fn free_text(text: impl Into<String>, options: &FreeTextOptions) -> Widget {
    let options = options.clone();
    let mut def = untitled(WidgetKind::FreeText);
    def.insert("text".to_string(), Value::String(text.into()));
    if let Some(color) = options.color {
        def.insert("color".to_string(), Value::String(color));
    }
    def.insert(
        "font_size".to_string(),
        Value::String(
            options
                .font_size
                .unwrap_or_else(|| defaults::FREE_TEXT_FONT_SIZE.to_string()),
        ),
    );
    def.insert(
        "text_align".to_string(),
        Value::String(
            options
                .text_align
                .unwrap_or_else(|| defaults::TEXT_ALIGN.to_string()),
        ),
    );
    for (key, value) in options.extra {
        def.insert(key, value);
    }
    Widget::new(WidgetKind::FreeText, def)
}

/// Recognized image options.
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Sizing mode. Defaults to cover.
    pub sizing: Option<String>,
}

/// Builds an embedded image.
#[must_use]
pub fn image(url: impl Into<String>, options: &ImageOptions) -> Widget {
    let options = options.clone();
    let mut def = untitled(WidgetKind::Image);
    def.insert("url".to_string(), Value::String(url.into()));
    def.insert(
        "sizing".to_string(),
        Value::String(
            options
                .sizing
                .unwrap_or_else(|| defaults::IMAGE_SIZING.to_string()),
        ),
    );
    Widget::new(WidgetKind::Image, def)
}

/// Builds an embedded page.
#[must_use]
pub fn iframe(url: impl Into<String>) -> Widget {
    let mut def = untitled(WidgetKind::Iframe);
    def.insert("url".to_string(), Value::String(url.into()));
    Widget::new(WidgetKind::Iframe, def)
}
