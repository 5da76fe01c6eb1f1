//! `log` backends: stderr for the CLI, the browser console for the
//! extension build.

use log::{LevelFilter, Log, Metadata, Record};

/// Map repeated `-v` flags to a level filter: warnings by default, then
/// info, debug and trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static STDERR: StderrLogger = StderrLogger;

/// Install the stderr logger. A second call only adjusts the level.
pub fn init_stderr(level: LevelFilter) {
    let _ = log::set_logger(&STDERR);
    log::set_max_level(level);
}

#[cfg(feature = "wasm")]
mod console {
    use log::Level;

    use super::*;

    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = wasm_bindgen::JsValue::from_str(&format_record(record));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    pub(super) static CONSOLE: ConsoleLogger = ConsoleLogger;
}

/// Install the browser console logger.
#[cfg(feature = "wasm")]
pub fn init_console(level: LevelFilter) {
    let _ = log::set_logger(&console::CONSOLE);
    log::set_max_level(level);
}
