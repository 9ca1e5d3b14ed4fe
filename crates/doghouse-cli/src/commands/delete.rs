//! Delete command implementation.
//!
//! Fetches the dashboard first so the confirmation prompt can name it.

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::cli::DeleteArgs;
use crate::error::CliError;
use crate::output::{Message, OutputFormat};
use doghouse_client::DashboardClient;

/// Handler for the delete command.
#[derive(Debug)]
pub struct DeleteCommand {
    client: DashboardClient,
}

impl DeleteCommand {
    /// Creates a new delete command handler.
    #[must_use]
    pub const fn new(client: DashboardClient) -> Self {
        Self { client }
    }

    /// Executes the delete command, prompting on `confirm_input` unless
    /// `--yes` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call or the prompt IO fails.
    pub async fn execute<W: Write, R: BufRead>(
        &self,
        out: &mut W,
        confirm_input: &mut R,
        format: &OutputFormat,
        args: &DeleteArgs,
    ) -> Result<(), CliError> {
        let document = self.client.fetch(&args.dashboard_id).await?;
        let title = document
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();

        if !args.yes {
            write!(
                out,
                "Delete dashboard '{title}' (ID: {})? [y/N] ",
                args.dashboard_id
            )?;
            out.flush()?;
            let mut answer = String::new();
            confirm_input.read_line(&mut answer)?;
            if !is_affirmative(&answer) {
                return format.write(out, &Message::info("Cancelled"));
            }
        }

        self.client.delete(&args.dashboard_id).await?;
        format.write(out, &Message::success(format!("Deleted: {title}")))
    }
}

/// Returns true for a `y`/`yes` answer, case-insensitively.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
