//! View command implementation.
//!
//! Loads a dashboard source locally and summarizes it without touching
//! the API.

use std::io::Write;

use serde_json::Value;

use crate::cli::ViewArgs;
use crate::error::CliError;
use crate::output::{DashboardPreview, OutputFormat, WidgetSummary};
use crate::template;

/// Handler for the view command.
#[derive(Debug, Default)]
pub struct ViewCommand;

impl ViewCommand {
    /// Creates a new view command handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the view command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading the source fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &ViewArgs,
    ) -> Result<(), CliError> {
        let document = template::load_dashboard(&args.source)?;
        format.write(out, &preview(&document))
    }
}

fn preview(document: &Value) -> DashboardPreview {
    let widgets: Vec<WidgetSummary> = document
        .get("widgets")
        .and_then(Value::as_array)
        .map(|widgets| {
            widgets
                .iter()
                .map(|widget| {
                    let definition = &widget["definition"];
                    WidgetSummary {
                        widget_type: definition
                            .get("type")
                            .and_then(Value::as_str)
                            .unwrap_or("unknown")
                            .to_string(),
                        title: definition
                            .get("title")
                            .and_then(Value::as_str)
                            .unwrap_or("Untitled")
                            .to_string(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    DashboardPreview {
        title: document
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string(),
        description: document
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        layout_type: document
            .get("layout_type")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string(),
        widget_count: widgets.len(),
        widgets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_extracts_widget_summaries() {
        let document = json!({
            "title": "Basic Dashboard",
            "description": "A test",
            "layout_type": "ordered",
            "widgets": [
                { "definition": { "type": "timeseries", "title": "CPU" } },
                { "definition": { "type": "note", "content": "# Header" } },
            ],
        });

        let preview = preview(&document);
        assert_eq!(preview.title, "Basic Dashboard");
        assert_eq!(preview.layout_type, "ordered");
        assert_eq!(preview.widget_count, 2);
        assert_eq!(preview.widgets[0].widget_type, "timeseries");
        assert_eq!(preview.widgets[0].title, "CPU");
        assert_eq!(preview.widgets[1].widget_type, "note");
        assert_eq!(preview.widgets[1].title, "Untitled");
    }

    #[test]
    fn preview_tolerates_missing_fields() {
        let document = json!({});
        let preview = preview(&document);

        assert_eq!(preview.title, "Unknown");
        assert!(preview.description.is_none());
        assert_eq!(preview.layout_type, "Unknown");
        assert_eq!(preview.widget_count, 0);
    }
}
