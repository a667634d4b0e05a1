//! External command execution with captured output.

use std::process::Command;

use crate::error::{Error, Result};

/// Run a shell command and return its standard output as one entry per
/// non-blank line.
///
/// An empty command is nothing to do and yields an empty sequence. A
/// command that cannot be launched is a recoverable error here; the CLI
/// entry point decides whether that terminates the process. The exit
/// status of the command itself is not inspected - whatever it printed
/// is what the caller gets.
pub fn command_output(command: &str) -> Result<Vec<String>> {
    if command.is_empty() {
        return Ok(Vec::new());
    }

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|e| Error::command_launch_failed(command, e.to_string()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn captures_stdout_lines() {
        let lines = command_output("echo hello").unwrap();
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn skips_blank_lines() {
        let lines = command_output("printf 'a\\n\\nb\\n'").unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_command_is_noop() {
        assert!(command_output("").unwrap().is_empty());
    }

    #[test]
    fn failing_command_still_returns_its_output() {
        let lines = command_output("false").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn reads_file_contents_through_shell() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "second").unwrap();

        let command = format!("cat {}", file.path().display());
        let lines = command_output(&command).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }
}
