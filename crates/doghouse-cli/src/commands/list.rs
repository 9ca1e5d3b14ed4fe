//! List command implementation.

use std::io::Write;

use crate::error::CliError;
use crate::output::{DashboardList, DashboardRow, OutputFormat};
use doghouse_client::DashboardClient;

/// Handler for the list command.
#[derive(Debug)]
pub struct ListCommand {
    client: DashboardClient,
}

impl ListCommand {
    /// Creates a new list command handler.
    #[must_use]
    pub const fn new(client: DashboardClient) -> Self {
        Self { client }
    }

    /// Executes the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let summaries = self.client.list().await?;
        let list = DashboardList {
            dashboards: summaries
                .into_iter()
                .map(|s| DashboardRow {
                    id: s.id,
                    title: s.title,
                    url: s.url,
                })
                .collect(),
        };
        format.write(out, &list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doghouse_client::Credentials;

    #[test]
    fn list_command_construction() {
        let client =
            DashboardClient::new(Credentials::new("api", "app", "datadoghq.eu")).unwrap();
        let cmd = ListCommand::new(client);
        assert_eq!(cmd.client.base_url(), "https://api.datadoghq.eu/api");
    }
}
