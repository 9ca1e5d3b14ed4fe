//! Product analytics and performance builders.

use serde_json::json;

use crate::error::{DashboardError, Result};
use crate::query::FunnelQuery;
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// Builds a conversion funnel.
///
/// Each entry of the input becomes one funnel step, in sequence order; a
/// single query string is a one-step funnel.
///
/// # Errors
///
/// Returns `DashboardError::InvalidQuery` if the step list is empty.
pub fn funnel(title: impl Into<String>, query: impl Into<FunnelQuery>) -> Result<Widget> {
    let steps = query.into().steps();
    let Some(first) = steps.first().cloned() else {
        return Err(DashboardError::InvalidQuery {
            reason: "funnel declares no steps".to_string(),
        });
    };

    let step_values: Vec<serde_json::Value> =
        steps.iter().map(|s| json!({ "query_string": s })).collect();

    let mut def = titled(WidgetKind::Funnel, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "query": {
                "data_source": "rum",
                "query_string": first,
                "steps": step_values,
            },
            "request_type": "funnel",
        }]),
    );
    Ok(Widget::new(WidgetKind::Funnel, def))
}

/// Builds a flow volume diagram.
#[must_use]
pub fn sankey(title: impl Into<String>, query: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::Sankey, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "query": {
                "data_source": "rum",
                "query_string": query.into(),
            },
        }]),
    );
    Widget::new(WidgetKind::Sankey, def)
}

/// Builds a cohort retention grid from a start and a return event query.
#[must_use]
pub fn retention(
    title: impl Into<String>,
    start_query: impl Into<String>,
    return_query: impl Into<String>,
) -> Widget {
    let mut def = titled(WidgetKind::Retention, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "query": {
                "data_source": "rum",
                "start": { "query_string": start_query.into() },
                "return": { "query_string": return_query.into() },
            },
            "request_type": "retention",
        }]),
    );
    Widget::new(WidgetKind::Retention, def)
}

/// Builds a profiler flame graph.
#[must_use]
pub fn profiling_flame_graph(title: impl Into<String>, query: impl Into<String>) -> Widget {
    let mut def = titled(WidgetKind::ProfilingFlameGraph, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "query": {
                "data_source": "profiles",
                "query_string": query.into(),
            },
        }]),
    );
    Widget::new(WidgetKind::ProfilingFlameGraph, def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_single_query_is_one_step() {
        let widget = funnel("Funnel", "source:rum @view.name:*").unwrap();
        let query = &widget.definition()["requests"][0]["query"];

        assert_eq!(query["query_string"], "source:rum @view.name:*");
        let steps = query["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0]["query_string"], "source:rum @view.name:*");
    }

    #[test]
    fn funnel_steps_keep_sequence_order() {
        let widget = funnel("Signup", vec!["landing", "form", "confirm"]).unwrap();
        let steps = widget.definition()["requests"][0]["query"]["steps"]
            .as_array()
            .unwrap()
            .clone();

        assert_eq!(steps[0]["query_string"], "landing");
        assert_eq!(steps[1]["query_string"], "form");
        assert_eq!(steps[2]["query_string"], "confirm");
    }

    #[test]
    fn funnel_rejects_empty_steps() {
        let result = funnel("Funnel", Vec::<String>::new());
        match result {
            Err(DashboardError::InvalidQuery { reason }) => {
                assert!(reason.contains("no steps"));
            }
            _ => panic!("expected InvalidQuery error"),
        }
    }

    #[test]
    fn sankey_query_shape() {
        let widget = sankey("Sankey", "source:rum @view.name:*");
        let query = &widget.definition()["requests"][0]["query"];

        assert_eq!(query["data_source"], "rum");
        assert_eq!(query["query_string"], "source:rum @view.name:*");
    }

    #[test]
    fn retention_carries_both_queries() {
        let widget = retention("Retention", "@action.name:signup", "@action.name:login");
        let query = &widget.definition()["requests"][0]["query"];

        assert_eq!(query["start"]["query_string"], "@action.name:signup");
        assert_eq!(query["return"]["query_string"], "@action.name:login");
    }

    #[test]
    fn flame_graph_uses_profiles_source() {
        let widget = profiling_flame_graph("Flame", "runtime:python service:api");
        let query = &widget.definition()["requests"][0]["query"];

        assert_eq!(query["data_source"], "profiles");
        assert_eq!(query["query_string"], "runtime:python service:api");
    }
}
