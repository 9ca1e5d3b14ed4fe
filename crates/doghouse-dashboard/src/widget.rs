//! The widget value type and the kind to wire-type table.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::layout::LayoutCell;

/// Every widget kind the builders can produce.
///
/// The kind is the library-side name; the wire schema's `definition.type`
/// string comes from [`WidgetKind::wire_type`]. The two are not always the
/// same (e.g. [`WidgetKind::PieChart`] serializes as `sunburst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Time-series graph.
    Timeseries,
    /// Single aggregated value.
    QueryValue,
    /// Ranked list of tag values.
    Toplist,
    /// Markdown note.
    Note,
    /// Heatmap of value distribution over time.
    Heatmap,
    /// Value change over a comparison window.
    Change,
    /// Latency distribution.
    Distribution,
    /// Multi-column query table.
    Table,
    /// Container of child widgets.
    Group,
    /// Two-dimensional scatter plot.
    Scatterplot,
    /// Proportional ring chart.
    PieChart,
    /// Nested-rectangle proportions.
    Treemap,
    /// Values on a world map.
    Geomap,
    /// Infrastructure host map.
    Hostmap,
    /// Graph attached to a monitor.
    AlertGraph,
    /// Value attached to a monitor.
    AlertValue,
    /// Service check status grid.
    CheckStatus,
    /// Monitor triage summary.
    MonitorSummary,
    /// Service level objective summary.
    Slo,
    /// APM service dependency map.
    ServiceMap,
    /// APM service health summary.
    ServiceSummary,
    /// Stream of matching events.
    EventStream,
    /// Events plotted on a timeline.
    EventTimeline,
    /// Live log tail.
    LogStream,
    /// Item list (issues, RUM sessions, logs).
    List,
    /// Unboxed text.
    FreeText,
    /// Embedded image.
    Image,
    /// Embedded page.
    Iframe,
    /// Conversion funnel.
    Funnel,
    /// Shared widget pack reference.
    Powerpack,
    /// Categorical bar chart.
    BarChart,
    /// Custom vega visualization.
    Wildcard,
    /// One graph per tag value.
    SplitGraph,
    /// Service topology graph.
    TopologyMap,
    /// Flow volume diagram.
    Sankey,
    /// Cohort retention grid.
    Retention,
    /// Workflow trigger button.
    RunWorkflow,
    /// Profiler flame graph.
    ProfilingFlameGraph,
}

impl WidgetKind {
    /// All 38 kinds, in the order the wire table documents them.
    pub const ALL: [Self; 38] = [
        Self::Timeseries,
        Self::QueryValue,
        Self::Toplist,
        Self::Note,
        Self::Heatmap,
        Self::Change,
        Self::Distribution,
        Self::Table,
        Self::Group,
        Self::Scatterplot,
        Self::PieChart,
        Self::Treemap,
        Self::Geomap,
        Self::Hostmap,
        Self::AlertGraph,
        Self::AlertValue,
        Self::CheckStatus,
        Self::MonitorSummary,
        Self::Slo,
        Self::ServiceMap,
        Self::ServiceSummary,
        Self::EventStream,
        Self::EventTimeline,
        Self::LogStream,
        Self::List,
        Self::FreeText,
        Self::Image,
        Self::Iframe,
        Self::Funnel,
        Self::Powerpack,
        Self::BarChart,
        Self::Wildcard,
        Self::SplitGraph,
        Self::TopologyMap,
        Self::Sankey,
        Self::Retention,
        Self::RunWorkflow,
        Self::ProfilingFlameGraph,
    ];

    /// Returns the canonical `definition.type` string for this kind.
    ///
    /// This table is ported verbatim from the upstream API mapping; the
    /// aliases (`sunburst`, `query_table`, `manage_status`, `servicemap`,
    /// `trace_service`, `list_stream`, `split_group`) are intentional and
    /// must not be "corrected" to match the kind name.
    #[must_use]
    pub const fn wire_type(self) -> &'static str {
        match self {
            Self::Timeseries => "timeseries",
            Self::QueryValue => "query_value",
            Self::Toplist => "toplist",
            Self::Note => "note",
            Self::Heatmap => "heatmap",
            Self::Change => "change",
            Self::Distribution => "distribution",
            Self::Table => "query_table",
            Self::Group => "group",
            Self::Scatterplot => "scatterplot",
            Self::PieChart => "sunburst",
            Self::Treemap => "treemap",
            Self::Geomap => "geomap",
            Self::Hostmap => "hostmap",
            Self::AlertGraph => "alert_graph",
            Self::AlertValue => "alert_value",
            Self::CheckStatus => "check_status",
            Self::MonitorSummary => "manage_status",
            Self::Slo => "slo",
            Self::ServiceMap => "servicemap",
            Self::ServiceSummary => "trace_service",
            Self::EventStream => "event_stream",
            Self::EventTimeline => "event_timeline",
            Self::LogStream => "log_stream",
            Self::List => "list_stream",
            Self::FreeText => "free_text",
            Self::Image => "image",
            Self::Iframe => "iframe",
            Self::Funnel => "funnel",
            Self::Powerpack => "powerpack",
            Self::BarChart => "bar_chart",
            Self::Wildcard => "wildcard",
            Self::SplitGraph => "split_group",
            Self::TopologyMap => "topology_map",
            Self::Sankey => "sankey",
            Self::Retention => "retention",
            Self::RunWorkflow => "run_workflow",
            Self::ProfilingFlameGraph => "profiling_flame_graph",
        }
    }
}

/// A built widget: its definition object plus, for grid documents, a
/// layout cell.
///
/// Widgets are immutable once built. The definition is an ordered map so
/// structurally identical inputs serialize to identical documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    kind: WidgetKind,
    definition: Map<String, Value>,
    layout: Option<LayoutCell>,
}

impl Widget {
    /// Wraps a finished definition map. Builders are the only callers.
    pub(crate) const fn new(kind: WidgetKind, definition: Map<String, Value>) -> Self {
        Self {
            kind,
            definition,
            layout: None,
        }
    }

    /// Returns the widget's kind.
    #[must_use]
    pub const fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Returns the definition object.
    #[must_use]
    pub const fn definition(&self) -> &Map<String, Value> {
        &self.definition
    }

    /// Returns the layout cell, if one has been assigned.
    #[must_use]
    pub const fn layout(&self) -> Option<LayoutCell> {
        self.layout
    }

    /// Attaches an explicit layout cell and returns self.
    ///
    /// The layout engine assigns cells for whole rows; this is the manual
    /// override for callers placing a widget by hand.
    #[must_use]
    pub const fn with_layout(mut self, cell: LayoutCell) -> Self {
        self.layout = Some(cell);
        self
    }

    pub(crate) const fn set_layout(&mut self, cell: LayoutCell) {
        self.layout = Some(cell);
    }

    /// Serializes the widget into its wire form: a `definition` object
    /// plus a `layout` object when a cell is present.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "definition".to_string(),
            Value::Object(self.definition.clone()),
        );
        if let Some(cell) = self.layout {
            obj.insert("layout".to_string(), cell.to_value());
        }
        Value::Object(obj)
    }
}

impl Serialize for Widget {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(WidgetKind::Timeseries, "timeseries")]
    #[test_case(WidgetKind::QueryValue, "query_value")]
    #[test_case(WidgetKind::Toplist, "toplist")]
    #[test_case(WidgetKind::Note, "note")]
    #[test_case(WidgetKind::Heatmap, "heatmap")]
    #[test_case(WidgetKind::Change, "change")]
    #[test_case(WidgetKind::Distribution, "distribution")]
    #[test_case(WidgetKind::Table, "query_table")]
    #[test_case(WidgetKind::Group, "group")]
    #[test_case(WidgetKind::Scatterplot, "scatterplot")]
    #[test_case(WidgetKind::PieChart, "sunburst")]
    #[test_case(WidgetKind::Treemap, "treemap")]
    #[test_case(WidgetKind::Geomap, "geomap")]
    #[test_case(WidgetKind::Hostmap, "hostmap")]
    #[test_case(WidgetKind::AlertGraph, "alert_graph")]
    #[test_case(WidgetKind::AlertValue, "alert_value")]
    #[test_case(WidgetKind::CheckStatus, "check_status")]
    #[test_case(WidgetKind::MonitorSummary, "manage_status")]
    #[test_case(WidgetKind::Slo, "slo")]
    #[test_case(WidgetKind::ServiceMap, "servicemap")]
    #[test_case(WidgetKind::ServiceSummary, "trace_service")]
    #[test_case(WidgetKind::EventStream, "event_stream")]
    #[test_case(WidgetKind::EventTimeline, "event_timeline")]
    #[test_case(WidgetKind::LogStream, "log_stream")]
    #[test_case(WidgetKind::List, "list_stream")]
    #[test_case(WidgetKind::FreeText, "free_text")]
    #[test_case(WidgetKind::Image, "image")]
    #[test_case(WidgetKind::Iframe, "iframe")]
    #[test_case(WidgetKind::Funnel, "funnel")]
    #[test_case(WidgetKind::Powerpack, "powerpack")]
    #[test_case(WidgetKind::BarChart, "bar_chart")]
    #[test_case(WidgetKind::Wildcard, "wildcard")]
    #[test_case(WidgetKind::SplitGraph, "split_group")]
    #[test_case(WidgetKind::TopologyMap, "topology_map")]
    #[test_case(WidgetKind::Sankey, "sankey")]
    #[test_case(WidgetKind::Retention, "retention")]
    #[test_case(WidgetKind::RunWorkflow, "run_workflow")]
    #[test_case(WidgetKind::ProfilingFlameGraph, "profiling_flame_graph")]
    fn wire_type_table(kind: WidgetKind, expected: &str) {
        assert_eq!(kind.wire_type(), expected);
    }

    #[test]
    fn all_covers_every_kind_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in WidgetKind::ALL {
            assert!(seen.insert(kind), "{kind:?} listed twice");
        }
        assert_eq!(seen.len(), 38);
    }

    #[test]
    fn wire_types_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in WidgetKind::ALL {
            assert!(
                seen.insert(kind.wire_type()),
                "wire type {} mapped twice",
                kind.wire_type()
            );
        }
    }

    #[test]
    fn widget_without_cell_serializes_definition_only() {
        let mut def = Map::new();
        def.insert("type".to_string(), Value::String("note".to_string()));
        let widget = Widget::new(WidgetKind::Note, def);

        let value = widget.to_value();
        assert_eq!(value["definition"]["type"], "note");
        assert!(value.get("layout").is_none());
    }

    #[test]
    fn widget_with_cell_serializes_layout() {
        let mut def = Map::new();
        def.insert("type".to_string(), Value::String("note".to_string()));
        let cell = LayoutCell::new(0, 2, 6, 3).unwrap();
        let widget = Widget::new(WidgetKind::Note, def).with_layout(cell);

        let value = widget.to_value();
        assert_eq!(value["layout"]["x"], 0);
        assert_eq!(value["layout"]["y"], 2);
        assert_eq!(value["layout"]["width"], 6);
        assert_eq!(value["layout"]["height"], 3);
    }

    #[test]
    fn identical_inputs_build_identical_widgets() {
        let mut def = Map::new();
        def.insert("type".to_string(), Value::String("note".to_string()));
        let a = Widget::new(WidgetKind::Note, def.clone());
        let b = Widget::new(WidgetKind::Note, def);
        assert_eq!(a.to_value(), b.to_value());
    }
}
