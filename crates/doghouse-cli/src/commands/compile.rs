//! Compile command implementation.

use std::io::Write;

use crate::cli::CompileArgs;
use crate::error::CliError;
use crate::output::{Message, OutputFormat};
use crate::template;

/// Handler for the compile command.
#[derive(Debug, Default)]
pub struct CompileCommand;

impl CompileCommand {
    /// Creates a new compile command handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the compile command, writing pretty JSON to stdout or the
    /// output file.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not a Jsonnet file or
    /// compilation fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &CompileArgs,
    ) -> Result<(), CliError> {
        if !template::is_template_file(&args.source) {
            return Err(CliError::InvalidArgument(format!(
                "{} is not a Jsonnet file",
                args.source.display()
            )));
        }

        let ext_vars = args
            .ext_str
            .iter()
            .map(|raw| template::parse_ext_var(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let document = template::compile_jsonnet(&args.source, &ext_vars, &args.jpath)?;
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;

        match &args.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                format.write(
                    out,
                    &Message::success(format!("Compiled to {}", path.display())),
                )?;
            }
            None => {
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}
