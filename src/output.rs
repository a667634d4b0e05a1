//! CLI response formatting and output.
//!
//! Provides the JSON envelope, printing, and exit status mapping. This is
//! the only layer allowed to terminate the process: library errors become
//! the `ERROR` exit status here, and `fail` is the last-resort fatal path.

use serde::Serialize;

use textkit::error::Hint;
use textkit::{Error, Result, ERROR, OK};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Print the response envelope for a command result and return the exit
/// status to report: `OK` on success, `ERROR` on failure.
pub fn print_result<T: Serialize>(result: Result<T>) -> i32 {
    let (response_result, code) = match result {
        Ok(data) => (print_response(&CliResponse::success(data)), OK),
        Err(err) => (print_response(&CliResponse::<()>::from_error(&err)), ERROR),
    };

    if let Err(err) = response_result {
        fail(&err.to_string());
    }

    code
}

/// Report a fatal condition and terminate.
///
/// Prints the message and the last OS error description to stderr, then
/// exits with the `ERROR` status.
pub fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", std::io::Error::last_os_error());
    std::process::exit(ERROR);
}
