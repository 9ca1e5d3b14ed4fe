//! Ready-made dashboards composed through the public API.
//!
//! These are complete documents, not templates: callers get a
//! [`Dashboard`] they can serialize as-is or extend with more metadata.

use crate::builders::core::{
    query_value, timeseries, toplist, QueryValueOptions, TimeseriesOptions, ToplistOptions,
};
use crate::builders::decoration::{note, NoteOptions};
use crate::builders::infra::{hostmap, service_summary, HostmapOptions};
use crate::dashboard::{Dashboard, LayoutType, TemplateVariable};
use crate::error::Result;
use crate::layout::{grid, Row};

/// A grid overview of host health for the given scope (e.g. `env:prod`).
pub fn host_overview(scope: impl Into<String>) -> Result<Dashboard> {
    let scope = scope.into();
    let in_scope = |metric: &str| format!("avg:{metric}{{{scope}}}");

    let rows = vec![
        Row::full_width(
            0,
            1,
            note(format!("# Host Overview ({scope})"), &NoteOptions::default()),
        )?,
        Row::new(
            1,
            3,
            vec![
                timeseries(
                    "CPU usage",
                    in_scope("system.cpu.user"),
                    &TimeseriesOptions::default(),
                ),
                timeseries(
                    "Memory usage",
                    in_scope("system.mem.used"),
                    &TimeseriesOptions::default(),
                ),
            ],
        )?,
        Row::new(
            4,
            3,
            vec![
                toplist(
                    "Busiest hosts",
                    format!("avg:system.load.norm.5{{{scope}}} by {{host}}"),
                    &ToplistOptions::default(),
                ),
                hostmap(
                    "Host map",
                    in_scope("system.cpu.user"),
                    &HostmapOptions {
                        scope: vec![scope.clone()],
                        ..HostmapOptions::default()
                    },
                ),
            ],
        )?,
    ];

    Ok(
        Dashboard::new("Host Overview", LayoutType::Grid, grid(rows))?
            .description("CPU, memory, and load across the fleet")
            .template_variable(TemplateVariable::new("host").prefix("host")),
    )
}

/// An ordered overview of one service in one environment.
pub fn service_overview(service: impl Into<String>, env: impl Into<String>) -> Result<Dashboard> {
    let service = service.into();
    let env = env.into();
    let tagged = |metric: &str| format!("avg:{metric}{{service:{service},env:{env}}}");

    let widgets = vec![
        note(format!("# {service} ({env})"), &NoteOptions::default()),
        service_summary("Service summary", service.clone(), env.clone()),
        timeseries(
            "Request latency",
            tagged("trace.http.request.duration"),
            &TimeseriesOptions::default(),
        ),
        query_value(
            "Requests per second",
            format!("sum:trace.http.request.hits{{service:{service},env:{env}}}.as_rate()"),
            &QueryValueOptions::default(),
        ),
        query_value(
            "Error rate",
            format!("sum:trace.http.request.errors{{service:{service},env:{env}}}.as_rate()"),
            &QueryValueOptions {
                precision: 3,
                ..QueryValueOptions::default()
            },
        ),
    ];

    Ok(
        Dashboard::new(format!("{service} Overview"), LayoutType::Ordered, widgets)?
            .description(format!("Golden signals for {service} in {env}"))
            .tags([format!("service:{service}"), format!("env:{env}")]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::GRID_COLUMNS;

    #[test]
    fn host_overview_is_a_valid_grid_document() {
        let doc = host_overview("env:prod").unwrap();
        let value = doc.to_value();

        assert_eq!(value["layout_type"], "grid");
        let widgets = value["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), 5);
        for widget in widgets {
            assert!(widget.get("layout").is_some());
        }
    }

    #[test]
    fn host_overview_rows_fill_the_grid() {
        let doc = host_overview("env:prod").unwrap();
        let value = doc.to_value();

        let mut widths_by_y: std::collections::BTreeMap<u64, u64> = std::collections::BTreeMap::new();
        for widget in value["widgets"].as_array().unwrap() {
            let y = widget["layout"]["y"].as_u64().unwrap();
            let width = widget["layout"]["width"].as_u64().unwrap();
            *widths_by_y.entry(y).or_insert(0) += width;
        }
        for total in widths_by_y.values() {
            assert_eq!(*total, u64::from(GRID_COLUMNS));
        }
    }

    #[test]
    fn host_overview_scopes_queries() {
        let doc = host_overview("env:staging").unwrap();
        let value = doc.to_value();
        let cpu = &value["widgets"][1]["definition"]["requests"][0]["q"];
        assert_eq!(cpu, "avg:system.cpu.user{env:staging}");
    }

    #[test]
    fn service_overview_is_ordered_and_tagged() {
        let doc = service_overview("web-app", "prod").unwrap();
        let value = doc.to_value();

        assert_eq!(value["title"], "web-app Overview");
        assert_eq!(value["layout_type"], "ordered");
        assert_eq!(value["tags"][0], "service:web-app");
        for widget in value["widgets"].as_array().unwrap() {
            assert!(widget.get("layout").is_none());
        }
    }
}
