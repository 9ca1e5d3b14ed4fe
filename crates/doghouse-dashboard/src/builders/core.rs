//! Core visualization builders: graphs, single values, tables.

use serde_json::{json, Map, Value};

use crate::defaults;
use crate::error::{DashboardError, Result};
use crate::query::{Aggregator, QuerySpec, TableQuery};
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// How a timeseries request is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayType {
    /// Connected line.
    #[default]
    Line,
    /// Vertical bars.
    Bars,
    /// Filled area.
    Area,
}

impl DisplayType {
    /// Returns the wire-schema string for this display type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bars => "bars",
            Self::Area => "area",
        }
    }
}

/// Recognized timeseries options.
#[derive(Debug, Clone, Default)]
pub struct TimeseriesOptions {
    /// Drawing style. Defaults to [`DisplayType::Line`].
    pub display_type: DisplayType,
    /// Series palette. Defaults to the shared palette.
    pub palette: Option<String>,
    /// Legend visibility. Omitted from the definition unless set.
    pub show_legend: Option<bool>,
}

/// Builds a timeseries widget.
#[must_use]
pub fn timeseries(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &TimeseriesOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Timeseries, title);

    let mut request = query.into().to_request("timeseries");
    request.insert(
        "display_type".to_string(),
        Value::String(options.display_type.as_str().to_string()),
    );
    request.insert(
        "style".to_string(),
        json!({ "palette": options.palette.unwrap_or_else(|| defaults::PALETTE.to_string()) }),
    );
    def.insert("requests".to_string(), json!([request]));

    if let Some(show) = options.show_legend {
        def.insert("show_legend".to_string(), Value::Bool(show));
    }
    Widget::new(WidgetKind::Timeseries, def)
}

/// Recognized query-value options.
#[derive(Debug, Clone)]
pub struct QueryValueOptions {
    /// Displayed decimal places. Defaults to the shared precision.
    pub precision: u32,
    /// Scale the unit automatically. Defaults to true.
    pub autoscale: bool,
    /// Custom unit suffix. Omitted unless set.
    pub custom_unit: Option<String>,
}

impl Default for QueryValueOptions {
    fn default() -> Self {
        Self {
            precision: defaults::PRECISION,
            autoscale: true,
            custom_unit: None,
        }
    }
}

/// Builds a query-value widget showing one aggregated number.
#[must_use]
pub fn query_value(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &QueryValueOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::QueryValue, title);

    let query = query.into();
    let mut request = query.to_request("scalar");
    if matches!(query, QuerySpec::Raw(_)) {
        request.insert(
            "aggregator".to_string(),
            Value::String(defaults::AGGREGATOR.as_str().to_string()),
        );
    }
    def.insert("requests".to_string(), json!([request]));
    def.insert("precision".to_string(), json!(options.precision));
    def.insert("autoscale".to_string(), Value::Bool(options.autoscale));
    if let Some(unit) = options.custom_unit {
        def.insert("custom_unit".to_string(), Value::String(unit));
    }
    Widget::new(WidgetKind::QueryValue, def)
}

/// Recognized toplist options.
#[derive(Debug, Clone, Default)]
pub struct ToplistOptions {
    /// Bar palette. Defaults to the shared palette.
    pub palette: Option<String>,
}

/// Builds a toplist widget ranking tag values.
#[must_use]
pub fn toplist(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &ToplistOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Toplist, title);

    let mut request = query.into().to_request("scalar");
    request.insert(
        "style".to_string(),
        json!({ "palette": options.palette.unwrap_or_else(|| defaults::PALETTE.to_string()) }),
    );
    def.insert("requests".to_string(), json!([request]));
    Widget::new(WidgetKind::Toplist, def)
}

/// Recognized heatmap options.
#[derive(Debug, Clone, Default)]
pub struct HeatmapOptions {
    /// Cell palette. Defaults to the shared palette.
    pub palette: Option<String>,
}

/// Builds a heatmap widget.
#[must_use]
pub fn heatmap(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &HeatmapOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Heatmap, title);

    let mut request = query.into().to_request("timeseries");
    request.insert(
        "style".to_string(),
        json!({ "palette": options.palette.unwrap_or_else(|| defaults::PALETTE.to_string()) }),
    );
    def.insert("requests".to_string(), json!([request]));
    Widget::new(WidgetKind::Heatmap, def)
}

/// Recognized change-widget options.
///
/// `compare_to` and `order_by` default independently; the wire schema
/// does not constrain their combination.
#[derive(Debug, Clone, Default)]
pub struct ChangeOptions {
    /// Comparison window. Defaults to `hour_before`.
    pub compare_to: Option<String>,
    /// Whether an increase is good (colors green). Defaults to true.
    pub increase_good: Option<bool>,
    /// Sort column. Defaults to `change`.
    pub order_by: Option<String>,
    /// Sort direction. Defaults to `desc`.
    pub order_dir: Option<String>,
    /// Show the present value column. Omitted unless set.
    pub show_present: Option<bool>,
}

/// Builds a change widget comparing values across a window.
#[must_use]
pub fn change(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &ChangeOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Change, title);

    let mut request = query.into().to_request("scalar");
    request.insert(
        "compare_to".to_string(),
        Value::String(
            options
                .compare_to
                .unwrap_or_else(|| defaults::CHANGE_COMPARE_TO.to_string()),
        ),
    );
    request.insert(
        "increase_good".to_string(),
        Value::Bool(options.increase_good.unwrap_or(true)),
    );
    request.insert(
        "order_by".to_string(),
        Value::String(
            options
                .order_by
                .unwrap_or_else(|| defaults::CHANGE_ORDER_BY.to_string()),
        ),
    );
    request.insert(
        "order_dir".to_string(),
        Value::String(
            options
                .order_dir
                .unwrap_or_else(|| defaults::CHANGE_ORDER_DIR.to_string()),
        ),
    );
    if let Some(show) = options.show_present {
        request.insert("show_present".to_string(), Value::Bool(show));
    }
    def.insert("requests".to_string(), json!([request]));
    Widget::new(WidgetKind::Change, def)
}

/// Recognized distribution options.
#[derive(Debug, Clone, Default)]
pub struct DistributionOptions {
    /// Series palette. Defaults to the shared palette.
    pub palette: Option<String>,
}

/// Builds a distribution widget.
#[must_use]
pub fn distribution(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &DistributionOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Distribution, title);

    let mut request = query.into().to_request("timeseries");
    request.insert(
        "style".to_string(),
        json!({ "palette": options.palette.unwrap_or_else(|| defaults::PALETTE.to_string()) }),
    );
    def.insert("requests".to_string(), json!([request]));
    Widget::new(WidgetKind::Distribution, def)
}

/// Recognized table options.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Aggregator applied to columns without their own override.
    pub aggregator: Aggregator,
}

/// Builds a query-table widget.
///
/// Each input entry becomes one column: formula/query pairs named
/// `query1`, `query2`, ... in input order. Column order is significant
/// and preserved.
///
/// # Errors
///
/// Returns `DashboardError::InvalidQuery` if the column list is empty or
/// a column has an empty query string.
pub fn table(
    title: impl Into<String>,
    query: impl Into<TableQuery>,
    options: &TableOptions,
) -> Result<Widget> {
    let options = options.clone();
    let columns = match query.into() {
        TableQuery::Single(q) => vec![crate::query::TableColumn::new(q)],
        TableQuery::Columns(cols) => cols,
    };
    if columns.is_empty() {
        return Err(DashboardError::InvalidQuery {
            reason: "table declares no columns".to_string(),
        });
    }

    let mut formulas = Vec::with_capacity(columns.len());
    let mut queries = Vec::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        if column.query.is_empty() {
            return Err(DashboardError::InvalidQuery {
                reason: format!("table column {} has an empty query", i + 1),
            });
        }
        let name = format!("query{}", i + 1);
        let mut formula = Map::new();
        formula.insert("formula".to_string(), Value::String(name.clone()));
        if let Some(alias) = &column.alias {
            formula.insert("alias".to_string(), Value::String(alias.clone()));
        }
        formulas.push(Value::Object(formula));
        queries.push(json!({
            "name": name,
            "query": column.query,
            "data_source": "metrics",
            "aggregator": column.aggregator.unwrap_or(options.aggregator).as_str(),
        }));
    }

    let mut def = titled(WidgetKind::Table, title);
    def.insert(
        "requests".to_string(),
        json!([{
            "formulas": formulas,
            "queries": queries,
            "response_format": "scalar",
        }]),
    );
    Ok(Widget::new(WidgetKind::Table, def))
}

/// Recognized scatterplot options.
#[derive(Debug, Clone, Default)]
pub struct ScatterplotOptions {
    /// Tag keys that color point groups. Omitted when empty.
    pub color_by_groups: Vec<String>,
}

/// Builds a scatterplot from two dimension-tagged queries.
///
/// The output carries exactly two query blocks, tagged `x` and `y`.
#[must_use]
pub fn scatterplot(
    title: impl Into<String>,
    x_query: impl Into<String>,
    y_query: impl Into<String>,
    options: &ScatterplotOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Scatterplot, title);

    def.insert(
        "requests".to_string(),
        json!({
            "x": { "q": x_query.into(), "aggregator": defaults::AGGREGATOR.as_str() },
            "y": { "q": y_query.into(), "aggregator": defaults::AGGREGATOR.as_str() },
        }),
    );
    if !options.color_by_groups.is_empty() {
        def.insert("color_by_groups".to_string(), json!(options.color_by_groups));
    }
    Widget::new(WidgetKind::Scatterplot, def)
}

/// Builds a treemap widget.
#[must_use]
pub fn treemap(title: impl Into<String>, query: impl Into<QuerySpec>) -> Widget {
    let mut def = titled(WidgetKind::Treemap, title);
    def.insert(
        "requests".to_string(),
        json!([query.into().to_request("scalar")]),
    );
    Widget::new(WidgetKind::Treemap, def)
}

/// Recognized bar-chart options.
#[derive(Debug, Clone, Default)]
pub struct BarChartOptions {
    /// Bar palette. Defaults to the shared palette.
    pub palette: Option<String>,
}

/// Builds a categorical bar chart.
#[must_use]
pub fn bar_chart(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &BarChartOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::BarChart, title);

    let mut request = query.into().to_request("scalar");
    request.insert(
        "style".to_string(),
        json!({ "palette": options.palette.unwrap_or_else(|| defaults::PALETTE.to_string()) }),
    );
    def.insert("requests".to_string(), json!([request]));
    Widget::new(WidgetKind::BarChart, def)
}

/// Builds a wildcard widget from a vega specification.
///
/// The specification is passed through opaquely.
#[must_use]
pub fn wildcard(title: impl Into<String>, specification: Value) -> Widget {
    let mut def = titled(WidgetKind::Wildcard, title);
    def.insert("specification".to_string(), specification);
    Widget::new(WidgetKind::Wildcard, def)
}
