use core::fmt::Write;

use cortex_m::interrupt;
use cortex_m_semihosting::hio;
use log::{LevelFilter, Log, Metadata, Record};

const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

static LOGGER: NekoLogger = NekoLogger;

/// Writes log records to the debugger's stdout over semihosting.
struct NekoLogger;

impl Log for NekoLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        interrupt::free(|_| {
            if let Ok(mut stdout) = hio::hstdout() {
                writeln!(stdout, "[{}] {}", record.level(), record.args()).ok();
            }
        });
    }

    fn flush(&self) {}
}

pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOG_LEVEL);
    }
}
