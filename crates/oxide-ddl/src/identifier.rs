//! Database identifier validation.
//!
//! Identifiers are restricted to the subset every supported backend accepts
//! unquoted: lower case ASCII letters, digits and `_`, not starting with a
//! digit or `_`.

use crate::error::{DdlError, Result};

/// Maximum length of a table name.
pub const TABLE_NAME_MAX_SIZE: usize = 25;

/// Maximum length of a constraint name.
pub const CONSTRAINT_NAME_MAX_SIZE: usize = 30;

/// Checks `identifier` against the identifier rules and returns it.
///
/// `label` names the identifier in error messages, e.g. `"Table name"`.
///
/// # Errors
///
/// Returns [`DdlError::NullArgument`] if `identifier` is empty and
/// [`DdlError::InvalidIdentifier`] if it is longer than `max_size`, contains
/// characters outside `[a-z0-9_]` or starts with a digit or `_`.
pub fn check_db_identifier(
    identifier: &str,
    label: &'static str,
    max_size: usize,
) -> Result<String> {
    if identifier.is_empty() {
        return Err(DdlError::NullArgument(label));
    }
    if identifier.chars().count() > max_size {
        return Err(invalid(
            identifier,
            format!("{label} length can't be more than {max_size}"),
        ));
    }
    check_characters(identifier, label)?;
    Ok(identifier.to_string())
}

/// Checks a column name. Column names have no length bound of their own.
///
/// # Errors
///
/// Same as [`check_db_identifier`], minus the length rule.
pub fn validate_column_name(name: &str) -> Result<String> {
    const LABEL: &str = "Column name";
    if name.is_empty() {
        return Err(DdlError::NullArgument(LABEL));
    }
    check_characters(name, LABEL)?;
    Ok(name.to_string())
}

fn check_characters(identifier: &str, label: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_';
    if !identifier.chars().all(allowed) {
        return Err(invalid(
            identifier,
            format!(
                "{label} must be lower case and contain only alphanumeric chars or '_', \
                 got '{identifier}'"
            ),
        ));
    }
    if identifier.starts_with(|c: char| c.is_ascii_digit() || c == '_') {
        return Err(invalid(
            identifier,
            format!("{label} must not start by a number or '_', got '{identifier}'"),
        ));
    }
    Ok(())
}

fn invalid(value: &str, message: String) -> DdlError {
    DdlError::InvalidIdentifier {
        value: value.to_string(),
        message,
    }
}
