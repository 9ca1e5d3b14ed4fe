//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// One dashboard row in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow {
    /// Dashboard ID.
    pub id: String,
    /// Dashboard title.
    pub title: String,
    /// Relative URL of the dashboard.
    pub url: String,
}

/// List of dashboards for display.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardList {
    /// Dashboards upstream.
    pub dashboards: Vec<DashboardRow>,
}

impl TableDisplay for DashboardList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.dashboards.is_empty() {
            writeln!(writer, "No dashboards found")?;
            return Ok(());
        }

        // Header
        writeln!(
            writer,
            "{:<12}  {:<44}  {}",
            "ID", "TITLE", "URL"
        )?;
        writeln!(writer, "{}", "─".repeat(96))?;

        // Rows
        for dashboard in &self.dashboards {
            writeln!(
                writer,
                "{:<12}  {:<44}  {}",
                dashboard.id,
                truncate(&dashboard.title, 44),
                dashboard.url
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} dashboard(s)", self.dashboards.len())?;
        Ok(())
    }
}

/// The action a push resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PushAction {
    /// A new dashboard was created.
    Created,
    /// An existing dashboard was updated.
    Updated,
    /// Dry run: a create was reported but not performed.
    WouldCreate,
    /// Dry run: an update was reported but not performed.
    WouldUpdate,
}

/// Outcome of a push command.
#[derive(Debug, Clone, Serialize)]
pub struct PushOutcome {
    /// What happened (or would happen).
    pub action: PushAction,
    /// Dashboard title.
    pub title: String,
    /// Dashboard ID, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl TableDisplay for PushOutcome {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let id_suffix = self
            .id
            .as_ref()
            .map(|id| format!(" (ID: {id})"))
            .unwrap_or_default();
        match self.action {
            PushAction::Created => writeln!(writer, "✓ Created: {}{id_suffix}", self.title)?,
            PushAction::Updated => writeln!(writer, "✓ Updated: {}{id_suffix}", self.title)?,
            PushAction::WouldCreate => {
                writeln!(writer, "[DRY RUN] Would CREATE: {}{id_suffix}", self.title)?;
            }
            PushAction::WouldUpdate => {
                writeln!(writer, "[DRY RUN] Would UPDATE: {}{id_suffix}", self.title)?;
            }
        }
        Ok(())
    }
}

/// One widget line in a local preview.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetSummary {
    /// The widget's `definition.type`.
    pub widget_type: String,
    /// The widget's title, when it has one.
    pub title: String,
}

/// Local preview of a dashboard document.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPreview {
    /// Dashboard title.
    pub title: String,
    /// Dashboard description, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Layout mode.
    pub layout_type: String,
    /// Number of top-level widgets.
    pub widget_count: usize,
    /// Per-widget type and title.
    pub widgets: Vec<WidgetSummary>,
}

impl TableDisplay for DashboardPreview {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Dashboard Preview")?;
        writeln!(writer, "══════════════════════════════════")?;
        writeln!(writer, "Title:        {}", self.title)?;
        writeln!(
            writer,
            "Description:  {}",
            self.description.as_deref().unwrap_or("N/A")
        )?;
        writeln!(writer, "Layout:       {}", self.layout_type)?;
        writeln!(writer, "Widgets:      {}", self.widget_count)?;

        if !self.widgets.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Widget Summary:")?;
            for (i, widget) in self.widgets.iter().enumerate() {
                writeln!(
                    writer,
                    "  {}. [{}] {}",
                    i + 1,
                    widget.widget_type,
                    widget.title
                )?;
            }
        }
        Ok(())
    }
}

/// Simple message output.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
    /// Whether this is a success message.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create an informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.success {
            writeln!(writer, "✓ {}", self.message)?;
        } else {
            writeln!(writer, "{}", self.message)?;
        }
        Ok(())
    }
}

/// Truncate a string to a maximum length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_default_is_table() {
        let fmt = OutputFormat::default();
        assert_eq!(fmt.format(), Format::Table);
        assert!(!fmt.is_json());
    }

    #[test]
    fn dashboard_list_empty() {
        let list = DashboardList { dashboards: vec![] };
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&list).expect("should format");

        assert!(output.contains("No dashboards found"));
    }

    #[test]
    fn dashboard_list_with_rows() {
        let list = DashboardList {
            dashboards: vec![
                DashboardRow {
                    id: "abc-123".into(),
                    title: "Host Overview".into(),
                    url: "/dashboard/abc-123".into(),
                },
                DashboardRow {
                    id: "def-456".into(),
                    title: "Service Health".into(),
                    url: "/dashboard/def-456".into(),
                },
            ],
        };

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&list).expect("should format");

        assert!(output.contains("abc-123"));
        assert!(output.contains("Host Overview"));
        assert!(output.contains("/dashboard/def-456"));
        assert!(output.contains("Total: 2 dashboard(s)"));
    }

    #[test]
    fn dashboard_list_json_output() {
        let list = DashboardList {
            dashboards: vec![DashboardRow {
                id: "abc".into(),
                title: "A".into(),
                url: "/dashboard/abc".into(),
            }],
        };

        let fmt = OutputFormat::new(Format::Json);
        let output = fmt.to_string(&list).expect("should format");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(parsed["dashboards"][0]["id"], "abc");
    }

    #[test]
    fn push_outcome_created() {
        let outcome = PushOutcome {
            action: PushAction::Created,
            title: "Host Overview".into(),
            id: Some("abc-123".into()),
        };

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&outcome).expect("should format");

        assert!(output.contains("✓ Created: Host Overview (ID: abc-123)"));
    }

    #[test]
    fn push_outcome_dry_run_without_id() {
        let outcome = PushOutcome {
            action: PushAction::WouldCreate,
            title: "Host Overview".into(),
            id: None,
        };

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&outcome).expect("should format");

        assert!(output.contains("[DRY RUN] Would CREATE: Host Overview"));
        assert!(!output.contains("ID:"));
    }

    #[test]
    fn push_outcome_json_omits_absent_id() {
        let outcome = PushOutcome {
            action: PushAction::WouldCreate,
            title: "A".into(),
            id: None,
        };

        let fmt = OutputFormat::new(Format::Json);
        let output = fmt.to_string(&outcome).expect("should format");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(parsed["action"], "would_create");
        assert!(parsed.get("id").is_none());
    }

    #[test]
    fn preview_table_output() {
        let preview = DashboardPreview {
            title: "Basic Dashboard".into(),
            description: Some("A test".into()),
            layout_type: "ordered".into(),
            widget_count: 2,
            widgets: vec![
                WidgetSummary {
                    widget_type: "timeseries".into(),
                    title: "CPU".into(),
                },
                WidgetSummary {
                    widget_type: "note".into(),
                    title: "Untitled".into(),
                },
            ],
        };

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&preview).expect("should format");

        assert!(output.contains("Dashboard Preview"));
        assert!(output.contains("Title:        Basic Dashboard"));
        assert!(output.contains("Layout:       ordered"));
        assert!(output.contains("1. [timeseries] CPU"));
        assert!(output.contains("2. [note] Untitled"));
    }

    #[test]
    fn preview_without_description() {
        let preview = DashboardPreview {
            title: "Bare".into(),
            description: None,
            layout_type: "grid".into(),
            widget_count: 0,
            widgets: vec![],
        };

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&preview).expect("should format");

        assert!(output.contains("Description:  N/A"));
        assert!(!output.contains("Widget Summary"));
    }

    #[test]
    fn message_success() {
        let msg = Message::success("Deleted: Host Overview");
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&msg).expect("should format");

        assert!(output.contains("✓ Deleted: Host Overview"));
    }

    #[test]
    fn message_info() {
        let msg = Message::info("Cancelled");
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&msg).expect("should format");

        assert!(output.contains("Cancelled"));
        assert!(!output.contains("✓"));
    }

    #[test]
    fn truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }
}
