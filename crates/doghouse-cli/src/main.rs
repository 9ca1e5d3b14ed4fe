//! doghouse CLI binary entrypoint.
//!
//! This is the main entry point for the `doghouse` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use doghouse_cli::cli::{Cli, Commands};
use doghouse_cli::commands::{
    CompileCommand, DeleteCommand, FetchCommand, ListCommand, PushCommand, ViewCommand,
};
use doghouse_cli::output::OutputFormat;
use doghouse_client::{Credentials, DashboardClient};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), doghouse_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Push(args) => {
            let cmd = PushCommand::new(client(&cli)?);
            cmd.execute(&mut stdout, &format, args).await?;
        }
        Commands::Fetch(args) => {
            let cmd = FetchCommand::new(client(&cli)?);
            cmd.execute(&mut stdout, &format, args).await?;
        }
        Commands::Delete(args) => {
            let cmd = DeleteCommand::new(client(&cli)?);
            let mut stdin = io::stdin().lock();
            cmd.execute(&mut stdout, &mut stdin, &format, args).await?;
        }
        Commands::List => {
            let cmd = ListCommand::new(client(&cli)?);
            cmd.execute(&mut stdout, &format).await?;
        }
        Commands::Compile(args) => {
            let cmd = CompileCommand::new();
            cmd.execute(&mut stdout, &format, args)?;
        }
        Commands::View(args) => {
            let cmd = ViewCommand::new();
            cmd.execute(&mut stdout, &format, args)?;
        }
    }

    Ok(())
}

fn client(cli: &Cli) -> Result<DashboardClient, doghouse_cli::CliError> {
    let credentials = Credentials::resolve(
        cli.api_key.clone(),
        cli.app_key.clone(),
        Some(cli.site.clone()),
    )?;
    Ok(DashboardClient::new(credentials)?)
}
