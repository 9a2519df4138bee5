//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string. Unknown values fall back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Service hook identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hook {
    /// Database connection hook.
    Connect,
    /// Request processing hook.
    Process,
}

/// Formats the result of `parse`.
#[must_use]
pub fn format_parse(input: &str, output: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{output}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ParseOutput<'a> {
                input_len: usize,
                output: &'a str,
                removed: usize,
            }
            let input_len = input.chars().count();
            format_json(&ParseOutput {
                input_len,
                output,
                removed: input_len - output.chars().count(),
            })
        }
    }
}

/// Formats the result of `calc`.
#[must_use]
pub fn format_calc(count: usize, total: i64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{total}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CalcOutput {
                count: usize,
                pairs: u64,
                total: i64,
            }
            format_json(&CalcOutput {
                count,
                pairs: crate::calc::pair_count(count),
                total,
            })
        }
    }
}

/// Formats the result of a hook command.
#[must_use]
pub fn format_hook(hook: Hook, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match hook {
            Hook::Connect => "Connection hook ran (no database backend configured).\n".to_string(),
            Hook::Process => "Request processed.\n".to_string(),
        },
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct HookOutput {
                status: &'static str,
                hook: Hook,
            }
            format_json(&HookOutput { status: "ok", hook })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": err.to_string() })),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
