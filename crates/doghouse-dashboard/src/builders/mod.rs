//! Widget builder functions.
//!
//! One pure constructor per widget kind, grouped the way the upstream API
//! documents them. Builders are total over well-typed input, perform no
//! I/O, and copy caller-supplied option structures rather than alias them;
//! the few with fallible input shapes (table columns, funnel steps,
//! groups) return a `Result` and fail fast.

pub mod analytics;
pub mod charts;
pub mod core;
pub mod decoration;
pub mod events;
pub mod infra;
pub mod monitor;
pub mod organization;

pub use self::analytics::{funnel, profiling_flame_graph, retention, sankey};
pub use self::charts::{geomap, pie_chart, GeomapOptions};
pub use self::core::{
    bar_chart, change, distribution, heatmap, query_value, scatterplot, table, timeseries,
    toplist, treemap, wildcard, BarChartOptions, ChangeOptions, DisplayType, DistributionOptions,
    HeatmapOptions, QueryValueOptions, ScatterplotOptions, TableOptions, TimeseriesOptions,
    ToplistOptions,
};
pub use self::decoration::{
    free_text, iframe, image, note, FreeTextOptions, ImageOptions, NoteOptions,
};
pub use self::events::{
    event_stream, event_timeline, list, log_stream, EventStreamOptions, LogStreamOptions,
};
pub use self::infra::{hostmap, service_map, service_summary, topology_map, HostmapOptions};
pub use self::monitor::{
    alert_graph, alert_value, check_status, monitor_summary, run_workflow, slo,
    AlertValueOptions, CheckStatusOptions,
};
pub use self::organization::{group, powerpack, split_graph, GroupLayout};

use serde_json::{Map, Value};

use crate::defaults;
use crate::widget::WidgetKind;

/// Starts a definition map for a titled widget: the wire type plus the
/// shared title styling defaults.
pub(crate) fn titled(kind: WidgetKind, title: impl Into<String>) -> Map<String, Value> {
    let mut def = untitled(kind);
    def.insert("title".to_string(), Value::String(title.into()));
    def.insert(
        "title_size".to_string(),
        Value::String(defaults::TITLE_SIZE.to_string()),
    );
    def.insert(
        "title_align".to_string(),
        Value::String(defaults::TITLE_ALIGN.to_string()),
    );
    def
}

/// Starts a definition map for a decoration widget with no title.
pub(crate) fn untitled(kind: WidgetKind) -> Map<String, Value> {
    let mut def = Map::new();
    def.insert(
        "type".to_string(),
        Value::String(kind.wire_type().to_string()),
    );
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_definition_carries_title_defaults() {
        let def = titled(WidgetKind::Timeseries, "CPU");
        assert_eq!(def["type"], "timeseries");
        assert_eq!(def["title"], "CPU");
        assert_eq!(def["title_size"], "16");
        assert_eq!(def["title_align"], "left");
    }

    #[test]
    fn untitled_definition_has_type_only() {
        let def = untitled(WidgetKind::Note);
        assert_eq!(def.len(), 1);
        assert_eq!(def["type"], "note");
    }
}
