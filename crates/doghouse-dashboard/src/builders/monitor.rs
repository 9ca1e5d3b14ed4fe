//! Monitoring and alerting builders.

use serde_json::{json, Value};

use crate::defaults;
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// Builds a graph attached to a monitor.
#[must_use]
pub fn alert_graph(title: impl Into<String>, alert_id: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::AlertGraph, title);
    def.insert("alert_id".to_string(), Value::String(alert_id.into()));
    def.insert(
        "viz_type".to_string(),
        Value::String(defaults::ALERT_VIZ_TYPE.to_string()),
    );
    Widget::new(WidgetKind::AlertGraph, def)
}

/// Recognized alert-value options.
#[derive(Debug, Clone)]
pub struct AlertValueOptions {
    /// Displayed decimal places. Defaults to the shared precision.
    pub precision: u32,
}

impl Default for AlertValueOptions {
    fn default() -> Self {
        Self {
            precision: defaults::PRECISION,
        }
    }
}

/// Builds a single-value readout attached to a monitor.
#[must_use]
pub fn alert_value(
    title: impl Into<String>,
    alert_id: impl Into<String>,
    options: &AlertValueOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::AlertValue, title);
    def.insert("alert_id".to_string(), Value::String(alert_id.into()));
    def.insert("precision".to_string(), json!(options.precision));
    Widget::new(WidgetKind::AlertValue, def)
}

/// Recognized check-status options.
#[derive(Debug, Clone, Default)]
pub struct CheckStatusOptions {
    /// How check results are grouped. Defaults to `cluster`.
    pub grouping: Option<String>,
    /// Tags restricting the check set. Omitted entirely when empty.
    pub tags: Vec<String>,
}

/// Builds a service-check status widget.
#[must_use]
pub fn check_status(
    title: impl Into<String>,
    check: impl Into<String>,
    options: &CheckStatusOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::CheckStatus, title);
    def.insert("check".to_string(), Value::String(check.into()));
    def.insert(
        "grouping".to_string(),
        Value::String(
            options
                .grouping
                .unwrap_or_else(|| defaults::CHECK_GROUPING.to_string()),
        ),
    );
    if !options.tags.is_empty() {
        def.insert("tags".to_string(), json!(options.tags));
    }
    Widget::new(WidgetKind::CheckStatus, def)
}

/// Builds a monitor triage summary.
///
/// Serializes with the `manage_status` wire type.
#[must_use]
pub fn monitor_summary(title: impl Into<String>, query: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::MonitorSummary, title);
    def.insert("query".to_string(), Value::String(query.into()));
    def.insert(
        "summary_type".to_string(),
        Value::String("monitors".to_string()),
    );
    Widget::new(WidgetKind::MonitorSummary, def)
}

/// Builds a service-level-objective summary.
#[must_use]
pub fn slo(title: impl Into<String>, slo_id: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::Slo, title);
    def.insert("slo_id".to_string(), Value::String(slo_id.into()));
    def.insert(
        "view_type".to_string(),
        Value::String(defaults::SLO_VIEW_TYPE.to_string()),
    );
    def.insert(
        "time_windows".to_string(),
        json!([defaults::SLO_TIME_WINDOW]),
    );
    def.insert(
        "view_mode".to_string(),
        Value::String(defaults::SLO_VIEW_MODE.to_string()),
    );
    Widget::new(WidgetKind::Slo, def)
}

/// Builds a workflow trigger widget.
#[must_use]
pub fn run_workflow(title: impl Into<String>, workflow_id: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::RunWorkflow, title);
    def.insert("workflow_id".to_string(), Value::String(workflow_id.into()));
    def.insert("inputs".to_string(), json!([]));
    Widget::new(WidgetKind::RunWorkflow, def)
}
