//! # doghouse-cli
//!
//! doghouse command-line interface.
//!
//! Provides commands for:
//! - Compiling Jsonnet dashboard templates to JSON
//! - Previewing dashboards locally
//! - Pushing, fetching, listing, and deleting dashboards upstream
//!
//! # Architecture
//!
//! Template sources compile through the external `jsonnet` binary into a
//! plain JSON value tree ([`template`]); API commands hand that tree to
//! [`doghouse_client::DashboardClient`], which owns the HTTP plumbing.
//!
//! ```text
//! ┌──────────┐   jsonnet/JSON   ┌───────────┐   v1 dashboard API
//! │ template │─────────────────►│  doghouse │◄─────────────────────►Datadog
//! └──────────┘                  └───────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod template;

pub use cli::{Cli, Commands, Format};
pub use error::CliError;
pub use output::OutputFormat;
