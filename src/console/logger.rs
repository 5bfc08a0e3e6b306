use std::sync::atomic::{AtomicBool, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Minimal `log` backend for the console: debug output to stderr, switched
/// at runtime by the `debug` command.
pub struct StderrLogger {
    verbose: AtomicBool,
}

static LOGGER: StderrLogger = StderrLogger {
    verbose: AtomicBool::new(false),
};

impl StderrLogger {
    /// Install the console logger. Later calls only reset verbosity.
    pub fn install() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
        LOGGER.set_verbose(false);
    }

    pub fn global() -> &'static StderrLogger {
        &LOGGER
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info || self.is_verbose()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
