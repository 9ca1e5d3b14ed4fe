//! Chart builders: proportional and geographic visualizations.

use serde_json::json;

use crate::defaults;
use crate::query::QuerySpec;
use crate::widget::{Widget, WidgetKind};

use super::titled;

/// Builds a pie chart.
///
/// Serializes with the `sunburst` wire type; the kind name and the wire
/// type diverge here.
#[must_use]
pub fn pie_chart(title: impl Into<String>, query: impl Into<QuerySpec>) -> Widget {
    let mut def = titled(WidgetKind::PieChart, title);
    def.insert(
        "requests".to_string(),
        json!([query.into().to_request("scalar")]),
    );
    Widget::new(WidgetKind::PieChart, def)
}

/// Recognized geomap options.
#[derive(Debug, Clone, Default)]
pub struct GeomapOptions {
    /// Map focus region. Defaults to the whole world.
    pub focus: Option<String>,
    /// Country fill palette. Defaults to the shared hostmap palette.
    pub palette: Option<String>,
}

/// Builds a geomap widget plotting values by country.
#[must_use]
pub fn geomap(
    title: impl Into<String>,
    query: impl Into<QuerySpec>,
    options: &GeomapOptions,
) -> Widget {
    let options = options.clone();
    let mut def = titled(WidgetKind::Geomap, title);

    def.insert(
        "requests".to_string(),
        json!([query.into().to_request("scalar")]),
    );
    def.insert(
        "view".to_string(),
        json!({
            "focus": options.focus.unwrap_or_else(|| defaults::GEOMAP_FOCUS.to_string()),
        }),
    );
    def.insert(
        "style".to_string(),
        json!({
            "palette": options
                .palette
                .unwrap_or_else(|| defaults::HOSTMAP_PALETTE.to_string()),
            "palette_flip": false,
        }),
    );
    Widget::new(WidgetKind::Geomap, def)
}
