//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`push`] - Create or update a dashboard upstream
//! - [`fetch`] - Download a dashboard as JSON
//! - [`delete`] - Delete a dashboard (with confirmation)
//! - [`list`] - List dashboards upstream
//! - [`compile`] - Compile a Jsonnet template to JSON
//! - [`view`] - Summarize a dashboard locally

pub mod compile;
pub mod delete;
pub mod fetch;
pub mod list;
pub mod push;
pub mod view;

pub use compile::CompileCommand;
pub use delete::DeleteCommand;
pub use fetch::FetchCommand;
pub use list::ListCommand;
pub use push::PushCommand;
pub use view::ViewCommand;
