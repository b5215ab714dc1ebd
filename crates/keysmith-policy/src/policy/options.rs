//! Bulk configuration from untyped option maps.
//!
//! Options arrive as a JSON object (`serde_json::Map`), e.g. from a request
//! body or an embedding application's own settings. Each recognised key is
//! routed to its typed setter; unknown keys are skipped so that newer
//! option names do not break older deployments.

use serde_json::{Map, Value};
use tracing::trace;

use keysmith_core::error::AppError;
use keysmith_core::result::AppResult;
use keysmith_core::types::{HashAlgorithm, ViolationKind};

use super::model::PasswordPolicy;

impl PasswordPolicy {
    /// Builds a policy by applying `options` on top of the defaults.
    pub fn from_options(options: &Map<String, Value>) -> AppResult<Self> {
        let mut policy = Self::default();
        policy.apply_options(options)?;
        Ok(policy)
    }

    /// Applies every recognised option.
    ///
    /// Options are staged on a copy and committed together. If any option
    /// has the wrong type or an out-of-range value, a configuration error is
    /// returned and `self` is left exactly as it was.
    pub fn apply_options(&mut self, options: &Map<String, Value>) -> AppResult<()> {
        let mut staged = self.clone();

        for (key, value) in options {
            match key.as_str() {
                "min_length" => {
                    staged.set_min_length(as_count(key, value)?);
                }
                "max_length" => {
                    staged.set_max_length(as_count(key, value)?);
                }
                "min_numbers" => {
                    staged.set_min_numbers(as_count(key, value)?);
                }
                "min_lowercase" => {
                    staged.set_min_lowercase(as_count(key, value)?);
                }
                "min_uppercase" => {
                    staged.set_min_uppercase(as_count(key, value)?);
                }
                "min_symbols" => {
                    staged.set_min_symbols(as_count(key, value)?);
                }
                "max_symbols" => {
                    staged.set_max_symbols(as_count(key, value)?);
                }
                "allowed_symbols" => {
                    staged.set_allowed_symbols(as_symbols(key, value)?);
                }
                "work_cost" | "pass_cost" => {
                    staged.set_work_cost(as_cost(key, value)?);
                }
                "argon2_memory_cost" => {
                    staged.set_argon2_memory_cost(as_cost(key, value)?);
                }
                "argon2_time_cost" => {
                    staged.set_argon2_time_cost(as_cost(key, value)?);
                }
                "argon2_threads" => {
                    staged.set_argon2_threads(as_cost(key, value)?);
                }
                "algorithm" => {
                    staged.set_algorithm(as_algorithm(value)?);
                }
                "error_messages" => {
                    staged.set_error_messages(as_messages(key, value)?);
                }
                "lowercase_alphabet" => {
                    staged.set_lowercase_alphabet(as_text(key, value)?);
                }
                "uppercase_alphabet" => {
                    staged.set_uppercase_alphabet(as_text(key, value)?);
                }
                "digit_alphabet" => {
                    staged.set_digit_alphabet(as_text(key, value)?);
                }
                unknown => {
                    trace!(option = unknown, "Ignoring unknown password policy option");
                }
            }
        }

        *self = staged;
        Ok(())
    }
}

fn as_count(key: &str, value: &Value) -> AppResult<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n)
            .map_err(|_| AppError::configuration(format!("Option '{key}' is too large: {n}")));
    }
    match value.as_i64() {
        Some(n) => Err(AppError::configuration(format!(
            "Option '{key}' must not be negative, got {n}"
        ))),
        None => Err(AppError::configuration(format!(
            "Option '{key}' must be a non-negative integer"
        ))),
    }
}

fn as_cost(key: &str, value: &Value) -> AppResult<u32> {
    let count = as_count(key, value)?;
    u32::try_from(count)
        .map_err(|_| AppError::configuration(format!("Option '{key}' is too large: {count}")))
}

fn as_text(key: &str, value: &Value) -> AppResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::configuration(format!("Option '{key}' must be a string")))
}

fn as_algorithm(value: &Value) -> AppResult<HashAlgorithm> {
    match value {
        Value::Number(n) => {
            let id = n.as_i64().ok_or_else(|| {
                AppError::configuration(format!("Unsupported hash algorithm id: {n}"))
            })?;
            HashAlgorithm::try_from(id)
        }
        Value::String(name) => name.parse(),
        _ => Err(AppError::configuration(
            "Option 'algorithm' must be an integer id or a name",
        )),
    }
}

/// Accepts `["#", "@"]` or `"#@"`.
fn as_symbols(key: &str, value: &Value) -> AppResult<Vec<char>> {
    match value {
        Value::String(s) => Ok(s.chars().collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| -> AppResult<char> {
                let text = item.as_str().ok_or_else(|| {
                    AppError::configuration(format!("Option '{key}' must contain strings"))
                })?;
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Ok(symbol),
                    _ => Err(AppError::configuration(format!(
                        "Option '{key}' entries must be single characters, got {text:?}"
                    ))),
                }
            })
            .collect(),
        _ => Err(AppError::configuration(format!(
            "Option '{key}' must be a string or an array of single characters"
        ))),
    }
}

fn as_messages(key: &str, value: &Value) -> AppResult<Vec<(ViolationKind, String)>> {
    let table = value
        .as_object()
        .ok_or_else(|| AppError::configuration(format!("Option '{key}' must be an object")))?;

    let mut messages = Vec::with_capacity(table.len());
    for (name, template) in table {
        let Ok(kind) = serde_json::from_value::<ViolationKind>(Value::String(name.clone())) else {
            trace!(kind = %name, "Ignoring message for unknown violation kind");
            continue;
        };
        let template = template.as_str().ok_or_else(|| {
            AppError::configuration(format!("Message template '{name}' must be a string"))
        })?;
        messages.push((kind, template.to_string()));
    }
    Ok(messages)
}
