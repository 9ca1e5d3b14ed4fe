//! Fetch command implementation.

use std::io::Write;

use crate::cli::FetchArgs;
use crate::error::CliError;
use crate::output::{Message, OutputFormat};
use doghouse_client::DashboardClient;

/// Handler for the fetch command.
#[derive(Debug)]
pub struct FetchCommand {
    client: DashboardClient,
}

impl FetchCommand {
    /// Creates a new fetch command handler.
    #[must_use]
    pub const fn new(client: DashboardClient) -> Self {
        Self { client }
    }

    /// Executes the fetch command, writing the document to stdout or the
    /// output file as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call or writing the output fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &FetchArgs,
    ) -> Result<(), CliError> {
        let document = self.client.fetch(&args.dashboard_id).await?;
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;

        match &args.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                format.write(
                    out,
                    &Message::success(format!("Saved to {}", path.display())),
                )?;
            }
            None => {
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}
