//! Shared option defaults consulted by every builder.
//!
//! Every recognized option key with a default resolves through this one
//! registry, so the same palette or title sizing never has to be repeated
//! (or allowed to drift) across builders.

use crate::query::Aggregator;

/// Number of columns in a grid-layout dashboard.
pub const GRID_COLUMNS: u32 = 12;

/// Default series palette.
pub const PALETTE: &str = "dog_classic";

/// Default hostmap fill palette.
pub const HOSTMAP_PALETTE: &str = "green_to_orange";

/// Default widget title size (points, as the wire schema's string).
pub const TITLE_SIZE: &str = "16";

/// Default widget title alignment.
pub const TITLE_ALIGN: &str = "left";

/// Default query aggregator.
pub const AGGREGATOR: Aggregator = Aggregator::Avg;

/// Default precision for single-value widgets.
pub const PRECISION: u32 = 2;

/// Default comparison window for change widgets.
pub const CHANGE_COMPARE_TO: &str = "hour_before";

/// Default sort column for change widgets.
pub const CHANGE_ORDER_BY: &str = "change";

/// Default sort direction for change widgets.
pub const CHANGE_ORDER_DIR: &str = "desc";

/// Default note background color.
pub const NOTE_BACKGROUND: &str = "white";

/// Default note font size.
pub const NOTE_FONT_SIZE: &str = "14";

/// Default text alignment for note and free-text widgets.
pub const TEXT_ALIGN: &str = "left";

/// Default free-text font size (auto-fit).
pub const FREE_TEXT_FONT_SIZE: &str = "auto";

/// Default image sizing mode.
pub const IMAGE_SIZING: &str = "cover";

/// Default check-status grouping.
pub const CHECK_GROUPING: &str = "cluster";

/// Default SLO view type.
pub const SLO_VIEW_TYPE: &str = "detail";

/// Default SLO time window.
pub const SLO_TIME_WINDOW: &str = "7d";

/// Default SLO view mode.
pub const SLO_VIEW_MODE: &str = "overall";

/// Default geomap focus region.
pub const GEOMAP_FOCUS: &str = "WORLD";

/// Default event-stream display size.
pub const EVENT_SIZE: &str = "s";

/// Default alert-graph visualization.
pub const ALERT_VIZ_TYPE: &str = "timeseries";

/// Default graph size inside a split graph.
pub const SPLIT_SIZE: &str = "md";

/// Default number of graphs a split graph fans out to.
pub const SPLIT_LIMIT: u32 = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_capacity_is_twelve() {
        assert_eq!(GRID_COLUMNS, 12);
    }

    #[test]
    fn default_aggregator_is_avg() {
        assert_eq!(AGGREGATOR.as_str(), "avg");
    }
}
