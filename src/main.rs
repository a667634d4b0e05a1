use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::CheckKind;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "textkit")]
#[command(version = VERSION)]
#[command(about = "String-utility toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip leading and trailing whitespace
    Trim { text: String },
    /// Split text into tokens on a delimiter set
    Split { text: String, delimiters: String },
    /// Count non-overlapping occurrences of a substring
    Count { text: String, needle: String },
    /// Replace every occurrence of a substring
    Replace {
        text: String,
        needle: String,
        replacement: String,
    },
    /// Concatenate values in order
    Join { values: Vec<String> },
    /// Prepend a prefix to a source string
    Prepend { prefix: String, source: String },
    /// Check whether text contains a substring
    Contains {
        text: String,
        substring: String,
        /// Ignore ASCII case when matching
        #[arg(long)]
        ignore_case: bool,
    },
    /// Check whether text begins with a prefix
    StartsWith { text: String, prefix: String },
    /// Compare two strings for equality
    Equals {
        a: String,
        b: String,
        /// Ignore ASCII case when comparing
        #[arg(long)]
        ignore_case: bool,
    },
    /// Classify text
    Check {
        #[arg(value_enum)]
        kind: CheckKind,
        text: String,
    },
    /// Format the current date/time with a strftime-style format
    Date { format: String },
    /// Run a shell command and capture its output lines
    Run { command: String },
    /// Report the smaller of two integers
    Min { a: i32, b: i32 },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Trim { text } => commands::trim(&text),
        Commands::Split { text, delimiters } => commands::split(&text, &delimiters),
        Commands::Count { text, needle } => commands::count(&text, &needle),
        Commands::Replace {
            text,
            needle,
            replacement,
        } => commands::replace(&text, &needle, &replacement),
        Commands::Join { values } => commands::join(&values),
        Commands::Prepend { prefix, source } => commands::prepend(&prefix, &source),
        Commands::Contains {
            text,
            substring,
            ignore_case,
        } => commands::contains(&text, &substring, ignore_case),
        Commands::StartsWith { text, prefix } => commands::starts_with(&text, &prefix),
        Commands::Equals { a, b, ignore_case } => commands::equals(&a, &b, ignore_case),
        Commands::Check { kind, text } => commands::check(kind, &text),
        Commands::Date { format } => commands::date(&format),
        Commands::Run { command } => commands::run(&command),
        Commands::Min { a, b } => commands::min(a, b),
    };

    std::process::exit(output::print_result(result));
}
