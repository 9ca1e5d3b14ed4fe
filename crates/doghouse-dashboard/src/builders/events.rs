//! Event and log stream builders.

use serde_json::{json, Value};

use crate::defaults;
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// Recognized event-stream options.
#[derive(Debug, Clone, Default)]
pub struct EventStreamOptions {
    /// Display size of each event. Defaults to small.
    pub event_size: Option<String>,
}

/// Builds a stream of matching events.
#[must_use]
pub fn event_stream(
    title: impl Into<String>,
    query: impl Into<String>,
    options: &EventStreamOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::EventStream, title);
    def.insert("query".to_string(), Value::String(query.into()));
    def.insert(
        "event_size".to_string(),
        Value::String(
            options
                .event_size
                .unwrap_or_else(|| defaults::EVENT_SIZE.to_string()),
        ),
    );
    Widget::new(WidgetKind::EventStream, def)
}

/// Builds an event timeline.
#[must_use]
pub fn event_timeline(title: impl Into<String>, query: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::EventTimeline, title);
    def.insert("query".to_string(), Value::String(query.into()));
    Widget::new(WidgetKind::EventTimeline, def)
}

/// Recognized log-stream options.
#[derive(Debug, Clone, Default)]
pub struct LogStreamOptions {
    /// Columns to display. Omitted entirely when empty.
    pub columns: Vec<String>,
    /// Show the date column. Omitted unless set.
    pub show_date_column: Option<bool>,
}

/// Builds a live log tail.
#[must_use]
pub fn log_stream(
    title: impl Into<String>,
    query: impl Into<String>,
    options: &LogStreamOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::LogStream, title);
    def.insert("query".to_string(), Value::String(query.into()));
    if !options.columns.is_empty() {
        def.insert("columns".to_string(), json!(options.columns));
    }
    if let Some(show) = options.show_date_column {
        def.insert("show_date_column".to_string(), Value::Bool(show));
    }
    Widget::new(WidgetKind::LogStream, def)
}

/// Builds an item-list widget over the given data source.
///
/// Serializes with the `list_stream` wire type. `item_type` selects the
/// backing stream (e.g. `issue`, `logs`) and is passed through verbatim.
#[must_use]
pub fn list(
    title: impl Into<String>,
    query: impl Into<String>,
    item_type: impl Into<String>,
) -> Widget {
    let mut def = titled(WidgetKind::List, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "query": {
                "data_source": item_type.into(),
                "query_string": query.into(),
            },
            "response_format": "event_list",
            "columns": [],
        }]),
    );
    Widget::new(WidgetKind::List, def)
}
