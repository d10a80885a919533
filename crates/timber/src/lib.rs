#![deny(missing_docs)]

//! Installs the global `tracing` subscriber used by the hangar CLI and
//! picks an output format that matches the requested verbosity.

mod formatter;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// How much detail each log line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verbosity {
    /// `error`, `warn` and `info`: just the level and the message
    Terse,
    /// `debug`: adds the target module
    Detailed,
    /// `trace`: adds timestamps and thread ids
    Exhaustive,
}

impl From<Level> for Verbosity {
    fn from(level: Level) -> Self {
        if level == Level::TRACE {
            Verbosity::Exhaustive
        } else if level == Level::DEBUG {
            Verbosity::Detailed
        } else {
            Verbosity::Terse
        }
    }
}

/// Initializes a global tracing subscriber that writes to stderr.
///
/// Nothing is installed when `level` is `None`, so by default the CLI
/// prints no logs at all.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        let ansi = std::env::var_os("NO_COLOR").is_none();
        match Verbosity::from(level) {
            Verbosity::Terse => formatter::terse(level, ansi),
            Verbosity::Detailed => formatter::detailed(level, ansi),
            Verbosity::Exhaustive => formatter::exhaustive(level, ansi),
        }
    }
}
