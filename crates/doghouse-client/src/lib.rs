//! # doghouse-client
//!
//! Datadog dashboard API client.
//!
//! Performs create/read/update/delete/list against the v1 dashboard
//! endpoint, authenticated with the `DD-API-KEY` and `DD-APPLICATION-KEY`
//! headers. Documents cross this boundary as plain JSON values; the
//! composition library owns their shape.
//!
//! Every operation is a single request with no retry; retry and backoff
//! policy belong to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use doghouse_client::DashboardClient;
//!
//! # async fn example() -> Result<(), doghouse_client::ClientError> {
//! let client = DashboardClient::from_env()?;
//! for dashboard in client.list().await? {
//!     println!("{} {}", dashboard.id, dashboard.title);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod credentials;
pub mod dashboard;
pub mod error;

pub use credentials::{Credentials, DEFAULT_SITE};
pub use dashboard::{DashboardClient, DashboardSummary};
pub use error::{ClientError, Result};
