//! Subcommand handlers.
//!
//! Each handler maps one CLI subcommand onto the library call it fronts
//! and shapes the JSON payload for the response envelope. No-op library
//! results (blank input, empty needle) stay successes with null/empty
//! payloads; only the fatal-path operations (date, run) can error.

use clap::ValueEnum;
use serde_json::{json, Value};

use textkit::{
    classify, command, datetime, join, log_status, num, replace, search, split, trim, Result,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckKind {
    /// Empty or whitespace-only
    Blank,
    /// ASCII digits only
    Numeric,
    /// ASCII letters and digits only
    Alphanumeric,
    /// ASCII uppercase letters only, after trimming
    Uppercase,
}

pub fn trim(text: &str) -> Result<Value> {
    Ok(json!({ "text": trim::trim(text) }))
}

pub fn split(text: &str, delimiters: &str) -> Result<Value> {
    let tokens = split::split(text, delimiters);
    Ok(json!({ "count": tokens.len(), "tokens": tokens }))
}

pub fn count(text: &str, needle: &str) -> Result<Value> {
    Ok(json!({ "count": replace::count_occurrences(text, needle) }))
}

pub fn replace(text: &str, needle: &str, replacement: &str) -> Result<Value> {
    Ok(json!({ "text": replace::replace(text, needle, replacement) }))
}

pub fn join(values: &[String]) -> Result<Value> {
    match join::join_strings(values) {
        Some((text, length)) => Ok(json!({ "text": text, "length": length })),
        None => Ok(json!({ "text": Value::Null, "length": 0 })),
    }
}

pub fn prepend(prefix: &str, source: &str) -> Result<Value> {
    Ok(json!({ "text": join::prepend_to(prefix, source) }))
}

pub fn contains(text: &str, substring: &str, ignore_case: bool) -> Result<Value> {
    let found = if ignore_case {
        search::contains_no_case(text, substring)
    } else {
        search::contains(text, substring)
    };
    Ok(json!({ "contains": found }))
}

pub fn starts_with(text: &str, prefix: &str) -> Result<Value> {
    Ok(json!({ "startsWith": search::starts_with(text, prefix) }))
}

pub fn equals(a: &str, b: &str, ignore_case: bool) -> Result<Value> {
    let equal = if ignore_case {
        classify::equals_no_case(a, b)
    } else {
        classify::equals(a, b)
    };
    Ok(json!({ "equals": equal }))
}

pub fn check(kind: CheckKind, text: &str) -> Result<Value> {
    let matches = match kind {
        CheckKind::Blank => classify::is_blank(text),
        CheckKind::Numeric => classify::is_numeric(text),
        CheckKind::Alphanumeric => classify::is_alphanumeric(text),
        CheckKind::Uppercase => classify::is_uppercase(text),
    };
    Ok(json!({ "matches": matches }))
}

pub fn date(format: &str) -> Result<Value> {
    let date = datetime::format_date(format)?;
    Ok(json!({ "date": date }))
}

pub fn run(command: &str) -> Result<Value> {
    log_status!("run", "Executing {}", command);
    let lines = command::command_output(command)?;
    Ok(json!({ "lines": lines }))
}

pub fn min(a: i32, b: i32) -> Result<Value> {
    Ok(json!({ "minimum": num::minimum_of(a, b) }))
}
