//! Organization builders: groups, powerpacks, split graphs.

use serde_json::{json, Value};

use crate::defaults;
use crate::error::{DashboardError, Result};
use crate::widget::{Widget, WidgetKind};

use super::{titled, untitled};

/// Internal layout mode of a group widget.
///
/// A per-group choice, never inherited from the parent document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    /// Children auto-flow; they must not carry layout cells.
    Ordered,
    /// Children are positioned independently of the parent's coordinate
    /// system; every child must carry a layout cell.
    Free,
}

impl GroupLayout {
    /// Returns the wire-schema string for this layout mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::Free => "free",
        }
    }
}

/// Builds a group widget containing child widgets.
///
/// # Errors
///
/// Returns `DashboardError::InvalidGroup` if a child's coordinate
/// presence disagrees with the group's internal layout mode.
pub fn group(
    title: impl Into<String>,
    children: Vec<Widget>,
    layout: GroupLayout,
) -> Result<Widget> {
    for (i, child) in children.iter().enumerate() {
        match layout {
            GroupLayout::Free if child.layout().is_none() => {
                return Err(DashboardError::InvalidGroup {
                    reason: format!(
                        "child {i} ({}) has no layout cell in a free group",
                        child.kind().wire_type()
                    ),
                });
            }
            GroupLayout::Ordered if child.layout().is_some() => {
                return Err(DashboardError::InvalidGroup {
                    reason: format!(
                        "child {i} ({}) carries a layout cell in an ordered group",
                        child.kind().wire_type()
                    ),
                });
            }
            _ => {}
        }
    }

    let mut def = titled(WidgetKind::Group, title);
    def.insert(
        "layout_type".to_string(),
        Value::String(layout.as_str().to_string()),
    );
    def.insert(
        "widgets".to_string(),
        Value::Array(children.iter().map(Widget::to_value).collect()),
    );
    Ok(Widget::new(WidgetKind::Group, def))
}

/// Builds a reference to a shared powerpack.
#[must_use]
pub fn powerpack(powerpack_id: impl Into<String>) -> Widget {
    let mut def = untitled(WidgetKind::Powerpack);
    def.insert(
        "powerpack_id".to_string(),
        Value::String(powerpack_id.into()),
    );
    Widget::new(WidgetKind::Powerpack, def)
}

/// Builds a split graph: one timeseries per value of the split dimension.
///
/// Serializes with the `split_group` wire type.
#[must_use]
pub fn split_graph(
    title: impl Into<String>,
    query: impl Into<String>,
    split_dimension: impl Into<String>,
) -> Widget {
    let mut def = titled(WidgetKind::SplitGraph, title);
    def.insert(
        "source_widget_definition".to_string(),
        json!({
            "type": WidgetKind::Timeseries.wire_type(),
            "requests": [{ "q": query.into(), "display_type": "line" }],
        }),
    );
    def.insert(
        "split_config".to_string(),
        json!({
            "split_dimensions": [{ "one_graph_per": split_dimension.into() }],
            "limit": defaults::SPLIT_LIMIT,
        }),
    );
    def.insert(
        "size".to_string(),
        Value::String(defaults::SPLIT_SIZE.to_string()),
    );
    Widget::new(WidgetKind::SplitGraph, def)
}
