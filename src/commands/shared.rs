//! # Shared Command Utilities
//!
//! This module provides shared validation, parsing, and exit helpers used
//! across the catalogoctl command handlers.

use handled::Handle;
use serde_json::Value;

use crate::commands::errors::UserError;
use crate::{ServiceError, cli_utils};

/// Validates both minimum and maximum argument counts.
///
/// # Arguments
/// * `args` - The command arguments array
/// * `min_count` - The minimum number of arguments required (including subcommand)
/// * `max_count` - The maximum number of arguments allowed (including subcommand)
/// * `command` - The command name for error message
/// * `usage` - The usage string to display
pub fn validate_args_count_or_exit(
    args: &[String],
    min_count: usize,
    max_count: usize,
    command: &str,
    usage: &str,
) {
    if args.len() < min_count {
        cli_utils::exit_with_usage_error(
            &format!("{} command requires more arguments", command),
            usage,
        );
    }
    if args.len() > max_count {
        cli_utils::exit_with_usage_error(
            &format!("{} command has too many arguments", command),
            usage,
        );
    }
}

/// Parses a record id, or exits with an error message.
pub fn parse_id_or_exit(id_str: &str) -> i64 {
    id_str.parse().unwrap_or_else(|_| {
        cli_utils::exit_with_usage_error(
            &format!("Invalid record id '{}'", id_str),
            "Record ids are positive integers, e.g. '3'",
        );
    })
}

/// Parses a draft from a JSON object argument, or exits with an error
/// message.
pub fn parse_draft_or_exit(draft_str: &str) -> Value {
    match serde_json::from_str::<Value>(draft_str) {
        Ok(value) if value.is_object() => value,
        Ok(_) => cli_utils::exit_with_usage_error(
            "Draft must be a JSON object",
            "Pass the record as a JSON object, e.g. '{\"nombre\": \"X\"}'",
        ),
        Err(e) => exit_user_error(&e, "parse draft"),
    }
}

/// Extracts a user-facing message from an error and exits.
pub fn exit_user_error<E>(error: &E, context: &str) -> !
where
    E: Handle<UserError> + std::fmt::Display,
{
    match error.handle() {
        Some(UserError {
            message,
            usage_hint: Some(hint),
        }) => cli_utils::exit_with_usage_error(&message, &hint),
        Some(UserError {
            message,
            usage_hint: None,
        }) => cli_utils::exit_with_error(&message),
        None => cli_utils::exit_with_error(&format!("Failed to {}: {}", context, error)),
    }
}

/// Unwraps a service result, or exits with the extracted user message.
pub fn unwrap_or_exit<T>(result: Result<T, ServiceError>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => exit_user_error(&e, context),
    }
}
