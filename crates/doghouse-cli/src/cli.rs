//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// doghouse - Datadog dashboard templating with Jsonnet.
#[derive(Parser, Debug, Clone)]
#[command(name = "doghouse")]
#[command(version, about = "Datadog dashboard templating with Jsonnet", long_about = None)]
pub struct Cli {
    /// Datadog API key.
    #[arg(long, env = "DD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Datadog application key.
    #[arg(long, env = "DD_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Datadog site.
    #[arg(long, env = "DD_SITE", default_value = "datadoghq.com")]
    pub site: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Push a dashboard to Datadog.
    ///
    /// Creates the dashboard, or updates it when the document carries an
    /// `id` that already exists upstream.
    Push(PushArgs),

    /// Fetch a dashboard from Datadog.
    Fetch(FetchArgs),

    /// Delete a dashboard from Datadog.
    Delete(DeleteArgs),

    /// List all dashboards in Datadog.
    List,

    /// Compile a Jsonnet template to JSON.
    Compile(CompileArgs),

    /// View a dashboard locally (compile and summarize).
    View(ViewArgs),
}

/// Arguments for the push command.
#[derive(Parser, Debug, Clone)]
pub struct PushArgs {
    /// Dashboard source (.jsonnet or .json file).
    #[arg(required = true)]
    pub source: PathBuf,

    /// Validate and report without pushing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the fetch command.
#[derive(Parser, Debug, Clone)]
pub struct FetchArgs {
    /// Dashboard ID to fetch.
    #[arg(required = true)]
    pub dashboard_id: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the delete command.
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Dashboard ID to delete.
    #[arg(required = true)]
    pub dashboard_id: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the compile command.
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Jsonnet source file.
    #[arg(required = true)]
    pub source: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// External variables (KEY=VALUE).
    #[arg(long, value_name = "KEY=VALUE")]
    pub ext_str: Vec<String>,

    /// Directories to search for imports.
    #[arg(short = 'J', long = "jpath")]
    pub jpath: Vec<PathBuf>,
}

/// Arguments for the view command.
#[derive(Parser, Debug, Clone)]
pub struct ViewArgs {
    /// Dashboard source (.jsonnet or .json file).
    #[arg(required = true)]
    pub source: PathBuf,
}
