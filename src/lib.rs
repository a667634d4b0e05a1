/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("run", "Executing {}", command);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod classify;
pub mod command;
pub mod datetime;
pub mod error;
pub mod join;
pub mod num;
pub mod replace;
pub mod search;
pub mod split;
pub mod trim;

pub use error::{Error, ErrorCode, Result};

/// Process exit status reported on success.
pub const OK: i32 = 0;

/// Process exit status reported on fatal paths.
pub const ERROR: i32 = -1;
