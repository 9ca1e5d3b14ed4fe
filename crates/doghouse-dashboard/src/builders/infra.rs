//! Infrastructure and service builders.

use serde_json::{json, Value};

use crate::defaults;
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// Recognized hostmap options.
#[derive(Debug, Clone, Default)]
pub struct HostmapOptions {
    /// Tag keys to group hosts by. Omitted entirely when empty.
    pub group: Vec<String>,
    /// Filter expressions restricting the host set. Omitted entirely
    /// when empty.
    pub scope: Vec<String>,
    /// Fill palette. Defaults to the shared hostmap palette.
    pub palette: Option<String>,
}

/// Builds a hostmap colored by the fill query.
#[must_use]
pub fn hostmap(
    title: impl Into<String>,
    fill_query: impl Into<String>,
    options: &HostmapOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Hostmap, title);

    def.insert(
        "requests".to_string(),
        json!({ "fill": { "q": fill_query.into() } }),
    );
    if !options.group.is_empty() {
        def.insert("group".to_string(), json!(options.group));
    }
    if !options.scope.is_empty() {
        def.insert("scope".to_string(), json!(options.scope));
    }
    def.insert(
        "style".to_string(),
        json!({
            "palette": options
                .palette
                .unwrap_or_else(|| defaults::HOSTMAP_PALETTE.to_string()),
        }),
    );
    Widget::new(WidgetKind::Hostmap, def)
}

/// Builds a service dependency map for one service.
///
/// Serializes with the `servicemap` wire type (no underscore).
#[must_use]
pub fn service_map(
    title: impl Into<String>,
    service: impl Into<String>,
    filters: impl IntoIterator<Item = impl Into<String>>,
) -> Widget {
    let mut def = titled(WidgetKind::ServiceMap, title);
    def.insert("service".to_string(), Value::String(service.into()));
    def.insert(
        "filters".to_string(),
        Value::Array(
            filters
                .into_iter()
                .map(|f| Value::String(f.into()))
                .collect(),
        ),
    );
    Widget::new(WidgetKind::ServiceMap, def)
}

/// Builds an APM service health summary.
///
/// Serializes with the `trace_service` wire type.
#[must_use]
pub fn service_summary(
    title: impl Into<String>,
    service: impl Into<String>,
    env: impl Into<String>,
) -> Widget {
    let mut def = titled(WidgetKind::ServiceSummary, title);
    def.insert("service".to_string(), Value::String(service.into()));
    def.insert("env".to_string(), Value::String(env.into()));
    Widget::new(WidgetKind::ServiceSummary, def)
}

/// Builds a topology map centered on one service.
#[must_use]
pub fn topology_map(title: impl Into<String>, service: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::TopologyMap, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "request_type": "topology",
            "query": {
                "data_source": "service_map",
                "service": service.into(),
                "filters": [],
            },
        }]),
    );
    Widget::new(WidgetKind::TopologyMap, def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostmap_omits_group_and_scope_when_empty() {
        let widget = hostmap("Hosts", "avg:system.cpu{*}", &HostmapOptions::default());
        let def = widget.definition();

        assert_eq!(def["requests"]["fill"]["q"], "avg:system.cpu{*}");
        assert!(def.get("group").is_none());
        assert!(def.get("scope").is_none());
        assert_eq!(def["style"]["palette"], "green_to_orange");
    }

    #[test]
    fn hostmap_passes_group_and_scope_verbatim() {
        let options = HostmapOptions {
            group: vec!["region".to_string(), "az".to_string()],
            scope: vec!["env:prod".to_string()],
            ..HostmapOptions::default()
        };
        let widget = hostmap("Hosts", "avg:system.cpu{*}", &options);
        let def = widget.definition();

        assert_eq!(def["group"], json!(["region", "az"]));
        assert_eq!(def["scope"], json!(["env:prod"]));
    }

    #[test]
    fn service_map_wire_type_has_no_underscore() {
        let widget = service_map("Map", "my-service", ["env:prod"]);
        let def = widget.definition();

        assert_eq!(def["type"], "servicemap");
        assert_eq!(def["service"], "my-service");
        assert_eq!(def["filters"], json!(["env:prod"]));
    }

    #[test]
    fn service_summary_is_trace_service() {
        let widget = service_summary("Summary", "web-app", "prod");
        let def = widget.definition();

        assert_eq!(def["type"], "trace_service");
        assert_eq!(def["service"], "web-app");
        assert_eq!(def["env"], "prod");
    }

    #[test]
    fn topology_map_request_shape() {
        let widget = topology_map("Topology", "web-service");
        let request = &widget.definition()["requests"][0];

        assert_eq!(request["request_type"], "topology");
        assert_eq!(request["query"]["data_source"], "service_map");
        assert_eq!(request["query"]["service"], "web-service");
    }
}
