pub use log::Level;
use log::{Metadata, Record, SetLoggerError};

struct LoggerType;

static LOGGER: LoggerType = LoggerType;

/// Installs the crate logger and sets the maximum level.
///
/// With `defmt_logger` enabled records are forwarded to defmt, otherwise they
/// are dropped. Fails if a logger was already installed.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

impl log::Log for LoggerType {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            #[cfg(feature = "defmt_logger")]
            {
                let args = defmt::Display2Format(record.args());
                match record.metadata().level() {
                    Level::Trace => defmt::trace!("{}", args),
                    Level::Debug => defmt::debug!("{}", args),
                    Level::Info => defmt::info!("{}", args),
                    Level::Warn => defmt::warn!("{}", args),
                    Level::Error => defmt::error!("{}", args),
                }
            }
        }
    }

    fn flush(&self) {}
}
