//! Prefixed status lines for stderr.
//!
//! Every macro here formats its arguments like [`eprintln!`] and prepends a
//! styled marker so that progress, warnings and failures stand out from the
//! machine readable output hangar writes to stdout.

use std::fmt;

use crate::Style;

/// The marker printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Info,
    Warning,
    Error,
    Success,
}

impl Prefix {
    fn marker(self) -> &'static str {
        match self {
            Prefix::Info => "==>",
            Prefix::Warning => "warning:",
            Prefix::Error => "error:",
            Prefix::Success => "✓",
        }
    }

    fn style(self) -> Style {
        match self {
            Prefix::Info => Style::InfoPrefix,
            Prefix::Warning => Style::WarningPrefix,
            Prefix::Error => Style::ErrorPrefix,
            Prefix::Success => Style::Success,
        }
    }
}

/// Renders a status line, painting the marker unless color is disabled.
pub fn status_line(prefix: Prefix, message: fmt::Arguments<'_>) -> String {
    format!("{} {}", prefix.style().paint(prefix.marker()), message)
}

/// Prints a progress line to stderr behind a `==>` marker.
#[macro_export]
macro_rules! infoln {
    ($($t:tt)*) => {
        eprintln!("{}", $crate::print::status_line($crate::print::Prefix::Info, format_args!($($t)*)))
    };
}

/// Prints a warning to stderr.
#[macro_export]
macro_rules! warnln {
    ($($t:tt)*) => {
        eprintln!("{}", $crate::print::status_line($crate::print::Prefix::Warning, format_args!($($t)*)))
    };
}

/// Prints a failure that does not stop the command to stderr.
#[macro_export]
macro_rules! errln {
    ($($t:tt)*) => {
        eprintln!("{}", $crate::print::status_line($crate::print::Prefix::Error, format_args!($($t)*)))
    };
}

/// Prints a confirmation to stderr behind a checkmark.
#[macro_export]
macro_rules! successln {
    ($($t:tt)*) => {
        eprintln!("{}", $crate::print::status_line($crate::print::Prefix::Success, format_args!($($t)*)))
    };
}
