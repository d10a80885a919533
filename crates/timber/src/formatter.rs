use crate::Level;

use tracing_subscriber::fmt;

use std::io;

pub(crate) fn terse(level: Level, ansi: bool) {
    let format = fmt::format().without_time().with_target(false).compact();
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .event_format(format)
        .with_writer(io::stderr)
        .init();
}

pub(crate) fn detailed(level: Level, ansi: bool) {
    let format = fmt::format().without_time().with_target(true);
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .event_format(format)
        .with_writer(io::stderr)
        .init();
}

pub(crate) fn exhaustive(level: Level, ansi: bool) {
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .with_thread_ids(true)
        .init();
}
