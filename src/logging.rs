//! Browser console logging.
//!
//! The core crate logs through `tracing`; with no subscriber installed its
//! events fall through to the `log` facade and land here.

use log::{Level, SetLoggerError};
use pipeguide_core::LogLevel;

pub fn init(level: LogLevel) -> Result<(), SetLoggerError> {
    console_log::init_with_level(to_log_level(level))?;
    log::info!("Pipeline guide starting (log level {})", to_log_level(level));
    Ok(())
}

pub fn to_log_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    }
}
