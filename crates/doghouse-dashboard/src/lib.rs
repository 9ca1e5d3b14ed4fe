//! Datadog dashboard composition.
//!
//! `doghouse-dashboard` builds wire-schema dashboard documents out of
//! pure functions: widget builders produce definitions, the layout engine
//! assigns grid positions, and the assembler merges everything into one
//! JSON-serializable document. No I/O, no shared state; every operation
//! either returns a valid piece of a document or fails fast at
//! construction.
//!
//! # Example
//!
//! ```rust
//! use doghouse_dashboard::builders::{timeseries, toplist, TimeseriesOptions, ToplistOptions};
//! use doghouse_dashboard::{grid, Dashboard, LayoutType, Row};
//!
//! # fn main() -> doghouse_dashboard::Result<()> {
//! let rows = vec![Row::new(0, 3, vec![
//!     timeseries("CPU", "avg:system.cpu{*}", &TimeseriesOptions::default()),
//!     toplist("Top hosts", "avg:cpu{*} by {host}", &ToplistOptions::default()),
//! ])?];
//!
//! let doc = Dashboard::new("System", LayoutType::Grid, grid(rows))?
//!     .description("CPU at a glance");
//! let json = doc.to_value();
//! # assert_eq!(json["layout_type"], "grid");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builders;
pub mod dashboard;
pub mod defaults;
pub mod error;
pub mod layout;
pub mod presets;
pub mod query;
pub mod widget;

// Re-export main types at crate root
pub use dashboard::{Dashboard, LayoutType, ReflowType, TemplateVariable};
pub use error::{DashboardError, Result};
pub use layout::{grid, ordered, LayoutCell, Row};
pub use query::{Aggregator, Formula, FunnelQuery, NamedQuery, QuerySpec, TableColumn, TableQuery};
pub use widget::{Widget, WidgetKind};
