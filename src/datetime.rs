//! Date formatting against the current local clock.

use std::fmt::Write as _;

use chrono::Local;

use crate::classify;
use crate::error::{Error, Result};

/// Render the current local date/time per a strftime-style format string.
///
/// A blank or invalid format string is a recoverable error; the CLI entry
/// point decides whether that terminates the process.
pub fn format_date(format: &str) -> Result<String> {
    if classify::is_blank(format) {
        return Err(Error::validation_invalid_argument(
            "format",
            "Format string is missing",
        ));
    }

    let now = Local::now();
    let mut result = String::new();
    // An unknown specifier only surfaces when the formatter runs, as a
    // fmt::Error from write!.
    write!(result, "{}", now.format(format)).map_err(|_| {
        Error::validation_invalid_argument("format", format!("Invalid format string: {}", format))
    })?;

    Ok(result)
}
