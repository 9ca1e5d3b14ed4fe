//! The dashboard document assembler.
//!
//! [`Dashboard::new`] is where the one document-level invariant is
//! enforced: a grid document must carry a layout cell on every top-level
//! widget, an ordered document on none. Optional metadata attaches by
//! chaining and is omitted from the wire document when absent.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{DashboardError, Result};
use crate::widget::Widget;

/// Dashboard layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutType {
    /// Widgets auto-flow; no explicit coordinates.
    Ordered,
    /// Every widget carries an explicit `(x, y, width, height)` cell.
    Grid,
}

impl LayoutType {
    /// Returns the wire-schema string for this layout mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::Grid => "grid",
        }
    }
}

/// How a grid document reflows when the screen narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowType {
    /// The consuming system reflows widgets automatically.
    Auto,
    /// Positions are fixed.
    Fixed,
}

impl ReflowType {
    /// Returns the wire-schema string for this reflow mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fixed => "fixed",
        }
    }
}

/// A template variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    name: String,
    prefix: Option<String>,
    default: Option<String>,
    available_values: Vec<String>,
}

impl TemplateVariable {
    /// Creates a template variable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            default: None,
            available_values: Vec::new(),
        }
    }

    /// Sets the tag prefix and returns self for chaining.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the default value and returns self for chaining.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restricts the selectable values and returns self for chaining.
    #[must_use]
    pub fn available_values(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.available_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Serializes the declaration; unset fields are omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(prefix) = &self.prefix {
            obj.insert("prefix".to_string(), Value::String(prefix.clone()));
        }
        if let Some(default) = &self.default {
            obj.insert("default".to_string(), Value::String(default.clone()));
        }
        if !self.available_values.is_empty() {
            obj.insert(
                "available_values".to_string(),
                Value::Array(
                    self.available_values
                        .iter()
                        .map(|v| Value::String(v.clone()))
                        .collect(),
                ),
            );
        }
        Value::Object(obj)
    }
}

/// A complete dashboard document.
#[derive(Debug, Clone)]
pub struct Dashboard {
    title: String,
    layout_type: LayoutType,
    widgets: Vec<Widget>,
    description: Option<String>,
    tags: Vec<String>,
    notify_list: Vec<String>,
    template_variables: Vec<TemplateVariable>,
    reflow_type: Option<ReflowType>,
}

impl Dashboard {
    /// Assembles a document from a title, a layout mode, and positioned
    /// widgets.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::LayoutMismatch` if any widget's
    /// coordinate presence disagrees with the layout mode.
    pub fn new(
        title: impl Into<String>,
        layout_type: LayoutType,
        widgets: Vec<Widget>,
    ) -> Result<Self> {
        for (i, widget) in widgets.iter().enumerate() {
            match layout_type {
                LayoutType::Grid if widget.layout().is_none() => {
                    return Err(DashboardError::LayoutMismatch {
                        reason: format!(
                            "widget {i} ({}) has no layout cell in a grid dashboard",
                            widget.kind().wire_type()
                        ),
                    });
                }
                LayoutType::Ordered if widget.layout().is_some() => {
                    return Err(DashboardError::LayoutMismatch {
                        reason: format!(
                            "widget {i} ({}) carries a layout cell in an ordered dashboard",
                            widget.kind().wire_type()
                        ),
                    });
                }
                _ => {}
            }
        }
        Ok(Self {
            title: title.into(),
            layout_type,
            widgets,
            description: None,
            tags: Vec::new(),
            notify_list: Vec::new(),
            template_variables: Vec::new(),
            reflow_type: None,
        })
    }

    /// Sets the description and returns self for chaining.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags and returns self for chaining.
    #[must_use]
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the notification list and returns self for chaining.
    #[must_use]
    pub fn notify(mut self, handles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.notify_list = handles.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a template variable and returns self for chaining.
    #[must_use]
    pub fn template_variable(mut self, variable: TemplateVariable) -> Self {
        self.template_variables.push(variable);
        self
    }

    /// Sets the reflow mode and returns self for chaining.
    #[must_use]
    pub const fn reflow(mut self, reflow_type: ReflowType) -> Self {
        self.reflow_type = Some(reflow_type);
        self
    }

    /// Returns the document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the layout mode.
    #[must_use]
    pub const fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    /// Returns the positioned widgets.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Serializes the document into its wire form.
    ///
    /// Required keys are always present; optional metadata is omitted
    /// entirely when absent rather than emitted as null or empty.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("title".to_string(), Value::String(self.title.clone()));
        obj.insert(
            "layout_type".to_string(),
            Value::String(self.layout_type.as_str().to_string()),
        );
        obj.insert(
            "widgets".to_string(),
            Value::Array(self.widgets.iter().map(Widget::to_value).collect()),
        );
        if let Some(description) = &self.description {
            obj.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        if !self.tags.is_empty() {
            obj.insert(
                "tags".to_string(),
                Value::Array(self.tags.iter().map(|t| Value::String(t.clone())).collect()),
            );
        }
        if !self.notify_list.is_empty() {
            obj.insert(
                "notify_list".to_string(),
                Value::Array(
                    self.notify_list
                        .iter()
                        .map(|h| Value::String(h.clone()))
                        .collect(),
                ),
            );
        }
        if !self.template_variables.is_empty() {
            obj.insert(
                "template_variables".to_string(),
                Value::Array(
                    self.template_variables
                        .iter()
                        .map(TemplateVariable::to_value)
                        .collect(),
                ),
            );
        }
        if let Some(reflow) = self.reflow_type {
            obj.insert(
                "reflow_type".to_string(),
                Value::String(reflow.as_str().to_string()),
            );
        }
        Value::Object(obj)
    }
}

impl Serialize for Dashboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::core::{timeseries, TimeseriesOptions};
    use crate::builders::decoration::{note, NoteOptions};
    use crate::layout::{grid, ordered, Row};

    fn sample_widgets(n: usize) -> Vec<Widget> {
        (0..n)
            .map(|i| {
                timeseries(
                    format!("Graph {i}"),
                    "avg:system.cpu{*}",
                    &TimeseriesOptions::default(),
                )
            })
            .collect()
    }

    #[test]
    fn ordered_document_never_emits_coordinates() {
        let rows = vec![Row::new(0, 2, sample_widgets(3)).unwrap()];
        let doc = Dashboard::new("Ordered", LayoutType::Ordered, ordered(rows)).unwrap();
        let value = doc.to_value();

        assert_eq!(value["layout_type"], "ordered");
        for widget in value["widgets"].as_array().unwrap() {
            assert!(widget.get("layout").is_none());
        }
    }

    #[test]
    fn grid_document_emits_all_four_coordinates() {
        let rows = vec![Row::new(0, 2, sample_widgets(3)).unwrap()];
        let doc = Dashboard::new("Grid", LayoutType::Grid, grid(rows)).unwrap();
        let value = doc.to_value();

        assert_eq!(value["layout_type"], "grid");
        for widget in value["widgets"].as_array().unwrap() {
            let layout = widget["layout"].as_object().unwrap();
            for key in ["x", "y", "width", "height"] {
                assert!(layout.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn grid_rejects_widget_without_cell() {
        let result = Dashboard::new("Grid", LayoutType::Grid, sample_widgets(1));
        match result {
            Err(DashboardError::LayoutMismatch { reason }) => {
                assert!(reason.contains("no layout cell"));
            }
            _ => panic!("expected LayoutMismatch error"),
        }
    }

    #[test]
    fn ordered_rejects_widget_with_cell() {
        let rows = vec![Row::new(0, 2, sample_widgets(1)).unwrap()];
        let result = Dashboard::new("Ordered", LayoutType::Ordered, grid(rows));
        match result {
            Err(DashboardError::LayoutMismatch { reason }) => {
                assert!(reason.contains("carries a layout cell"));
            }
            _ => panic!("expected LayoutMismatch error"),
        }
    }

    #[test]
    fn metadata_omitted_when_absent() {
        let doc = Dashboard::new("Bare", LayoutType::Ordered, sample_widgets(1)).unwrap();
        let value = doc.to_value();

        assert!(value.get("description").is_none());
        assert!(value.get("tags").is_none());
        assert!(value.get("notify_list").is_none());
        assert!(value.get("template_variables").is_none());
        assert!(value.get("reflow_type").is_none());
    }

    #[test]
    fn metadata_emitted_when_supplied() {
        let doc = Dashboard::new("Full", LayoutType::Ordered, sample_widgets(1))
            .unwrap()
            .description("System health at a glance")
            .tags(["team:platform", "env:prod"])
            .notify(["@ops-team"])
            .template_variable(
                TemplateVariable::new("env")
                    .prefix("env")
                    .default_value("prod"),
            )
            .reflow(ReflowType::Fixed);
        let value = doc.to_value();

        assert_eq!(value["description"], "System health at a glance");
        assert_eq!(value["tags"][1], "env:prod");
        assert_eq!(value["notify_list"][0], "@ops-team");
        assert_eq!(value["template_variables"][0]["name"], "env");
        assert_eq!(value["template_variables"][0]["prefix"], "env");
        assert_eq!(value["template_variables"][0]["default"], "prod");
        assert_eq!(value["reflow_type"], "fixed");
    }

    #[test]
    fn template_variable_omits_unset_fields() {
        let value = TemplateVariable::new("host").to_value();
        assert_eq!(value["name"], "host");
        assert!(value.get("prefix").is_none());
        assert!(value.get("default").is_none());
        assert!(value.get("available_values").is_none());
    }

    #[test]
    fn template_variable_available_values() {
        let value = TemplateVariable::new("env")
            .available_values(["prod", "staging"])
            .to_value();
        assert_eq!(value["available_values"][0], "prod");
        assert_eq!(value["available_values"][1], "staging");
    }

    #[test]
    fn widget_order_survives_assembly() {
        let first = note("first", &NoteOptions::default());
        let second = note("second", &NoteOptions::default());
        let doc = Dashboard::new("Order", LayoutType::Ordered, vec![first, second]).unwrap();
        let widgets = doc.to_value()["widgets"].as_array().unwrap().clone();

        assert_eq!(widgets[0]["definition"]["content"], "first");
        assert_eq!(widgets[1]["definition"]["content"], "second");
    }

    #[test]
    fn assembly_is_deterministic() {
        let build = || {
            Dashboard::new("Same", LayoutType::Ordered, sample_widgets(2))
                .unwrap()
                .tags(["a", "b"])
                .to_value()
        };
        let a = serde_json::to_string(&build()).unwrap();
        let b = serde_json::to_string(&build()).unwrap();
        assert_eq!(a, b);
    }
}
