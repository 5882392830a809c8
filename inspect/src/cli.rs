use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(long, default_value = "warn", value_enum, help = "Diagnostics written to stderr")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an ISO 8601 duration and show its canonical form and components
    Duration {
        #[arg(allow_hyphen_values = true, help = "e.g. P1DT12H or -PT30M")]
        literal: String,
    },
    /// Show the duration of a signed number of seconds
    Seconds {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    /// Add two durations
    Add {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Subtract the second duration from the first
    Sub {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Check a quantity against a normal range
    Range {
        #[arg(allow_hyphen_values = true)]
        value: f64,

        #[arg(long, allow_hyphen_values = true, help = "Unbounded if omitted")]
        lower: Option<f64>,

        #[arg(long, allow_hyphen_values = true, help = "Unbounded if omitted")]
        upper: Option<f64>,

        #[arg(long)]
        lower_excluded: bool,

        #[arg(long)]
        upper_excluded: bool,

        #[arg(long)]
        units: Option<String>,
    },
}
