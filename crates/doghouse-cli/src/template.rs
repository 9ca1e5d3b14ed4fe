//! Template loading: Jsonnet compilation and plain JSON.
//!
//! Compilation shells out to the external `jsonnet` binary; the templating
//! language itself is not this tool's concern, only the JSON value tree it
//! produces.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

/// Install hint shown when no `jsonnet` binary is on the PATH.
const JSONNET_MISSING: &str =
    "jsonnet compiler not found; install go-jsonnet from https://github.com/google/go-jsonnet";

/// Returns true for `.jsonnet` / `.libsonnet` sources.
#[must_use]
pub fn is_template_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("jsonnet" | "libsonnet")
    )
}

/// Compiles a Jsonnet file to a JSON value.
///
/// External variables become `--ext-str` flags and import directories
/// become `-J` flags, in the order given.
///
/// # Errors
///
/// Returns `CliError::Template` if the compiler is missing, fails, or
/// emits something other than JSON.
pub fn compile_jsonnet(
    source: &Path,
    ext_vars: &[(String, String)],
    jpath: &[PathBuf],
) -> Result<Value, CliError> {
    debug!(source = %source.display(), "compiling jsonnet");

    let mut cmd = Command::new("jsonnet");
    cmd.arg(source);
    for (key, value) in ext_vars {
        cmd.arg("--ext-str").arg(format!("{key}={value}"));
    }
    for dir in jpath {
        cmd.arg("-J").arg(dir);
    }

    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::Template(JSONNET_MISSING.to_string())
        } else {
            CliError::Io(e)
        }
    })?;

    if !output.status.success() {
        return Err(CliError::Template(format!(
            "jsonnet compilation failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| CliError::Template(format!("invalid JSON output from jsonnet: {e}")))
}

/// Loads a dashboard document from a Jsonnet or JSON file.
///
/// # Errors
///
/// Returns an error if the file is unreadable, fails to compile, or does
/// not parse as JSON.
pub fn load_dashboard(path: &Path) -> Result<Value, CliError> {
    if is_template_file(path) {
        return compile_jsonnet(path, &[], &[]);
    }
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Template(format!("{}: invalid JSON: {e}", path.display())))
}

/// Splits a `KEY=VALUE` argument into its parts.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if there is no `=`.
pub fn parse_ext_var(raw: &str) -> Result<(String, String), CliError> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("expected KEY=VALUE external variable, got '{raw}'"))
        })
}
