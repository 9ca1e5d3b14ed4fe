//! Push command implementation.
//!
//! Loads a dashboard source and creates it upstream, or updates it when
//! the document carries an `id` that already exists.

use std::io::Write;

use serde_json::Value;

use crate::cli::PushArgs;
use crate::error::CliError;
use crate::output::{OutputFormat, PushAction, PushOutcome};
use crate::template;
use doghouse_client::DashboardClient;

/// Handler for the push command.
#[derive(Debug)]
pub struct PushCommand {
    client: DashboardClient,
}

impl PushCommand {
    /// Creates a new push command handler.
    #[must_use]
    pub const fn new(client: DashboardClient) -> Self {
        Self { client }
    }

    /// Executes the push command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading the source or the API call fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &PushArgs,
    ) -> Result<(), CliError> {
        let document = template::load_dashboard(&args.source)?;
        let title = document
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();
        let existing_id = document
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);

        let update_target = match &existing_id {
            Some(id) => self.client.exists(id).await?.then(|| id.clone()),
            None => None,
        };

        if args.dry_run {
            let outcome = PushOutcome {
                action: if update_target.is_some() {
                    PushAction::WouldUpdate
                } else {
                    PushAction::WouldCreate
                },
                title,
                id: existing_id,
            };
            return format.write(out, &outcome);
        }

        let outcome = match update_target {
            Some(id) => {
                self.client.update(&id, &document).await?;
                PushOutcome {
                    action: PushAction::Updated,
                    title,
                    id: Some(id),
                }
            }
            None => {
                let created = self.client.create(&document).await?;
                let id = created
                    .get("id")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                PushOutcome {
                    action: PushAction::Created,
                    title,
                    id,
                }
            }
        };
        format.write(out, &outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doghouse_client::Credentials;

    #[tokio::test]
    async fn push_missing_source_fails_before_any_request() {
        let client =
            DashboardClient::new(Credentials::new("api", "app", "datadoghq.com")).unwrap();
        let cmd = PushCommand::new(client);
        let args = PushArgs {
            source: "/nonexistent/dashboard.json".into(),
            dry_run: true,
        };

        let mut out = Vec::new();
        let result = cmd
            .execute(&mut out, &OutputFormat::default(), &args)
            .await;
        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(out.is_empty());
    }
}
