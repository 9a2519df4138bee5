//! CLI command implementations.
//!
//! Maps each subcommand onto a [`DataService`] operation and formats
//! the result.

use crate::cli::output::{Hook, OutputFormat, format_calc, format_hook, format_parse};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::service::DataService;
use std::io::{self, Read};

/// Executes the CLI command, reading from stdin when input is needed.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    execute_with_input(cli, io::stdin().lock())
}

/// Executes the CLI command with an explicit input source.
///
/// `input` is only read by `parse` when no text argument is given.
///
/// # Errors
///
/// Returns an error if reading `input` fails or the operation fails.
pub fn execute_with_input<R: Read>(cli: &Cli, input: R) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let service = DataService::new();

    match &cli.command {
        Commands::Parse { text } => cmd_parse(&service, text.as_deref(), input, format),
        Commands::Calc { numbers } => cmd_calc(&service, numbers, format),
        Commands::Connect => {
            service.connect_to_database()?;
            Ok(format_hook(Hook::Connect, format))
        }
        Commands::Process => {
            service.process_request()?;
            Ok(format_hook(Hook::Process, format))
        }
    }
}

fn cmd_parse<R: Read>(
    service: &DataService,
    text: Option<&str>,
    mut input: R,
    format: OutputFormat,
) -> Result<String> {
    // Read from stdin if not provided
    let text = if let Some(t) = text {
        t.to_string()
    } else {
        let mut buffer = String::new();
        input.read_to_string(&mut buffer).map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to read from stdin: {e}"))
        })?;
        buffer
    };

    let output = service.parse_data(&text);
    Ok(format_parse(&text, &output, format))
}

fn cmd_calc(service: &DataService, numbers: &[i64], format: OutputFormat) -> Result<String> {
    let total = service.complex_calculation(numbers)?;
    Ok(format_calc(numbers.len(), total, format))
}
