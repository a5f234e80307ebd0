#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "FLEETGRID_LOG";

/// Writes records to stderr so stdout stays free for game output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `FLEETGRID_LOG`, or `default` when unset or unparsable.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger at the level from `FLEETGRID_LOG`, defaulting
/// to `info`. Calling it again has no effect.
pub fn init_logging() {
    init_logging_with(level_from_env(LevelFilter::Info));
}

/// Install the stderr logger at `level`.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
