use ansi_term::Colour;
use anyhow::anyhow;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::AppResult;

/*
 * StderrLogger
 * Minimal backend for the log facade, the processor only talks through
 * `trace!` and `debug!`.
 */
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", paint_level(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn paint_level(level: Level) -> String {
    let label = format!("{: <5}", level);
    let colour = match level {
        Level::Error => Colour::Red,
        Level::Warn => Colour::Yellow,
        Level::Info => Colour::Green,
        Level::Debug => Colour::Cyan,
        Level::Trace => Colour::Fixed(240),
    };

    colour.paint(label).to_string()
}

pub fn init(level: LevelFilter) -> AppResult<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow!("cannot install logger: {}", e))?;
    log::set_max_level(level);

    Ok(())
}
