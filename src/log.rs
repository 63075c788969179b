// src/log.rs
//! Logging.
//!
//! Library code only ever goes through the `log` facade (via the short
//! `logd!`/`logf!`/`logw!`/`loge!` macros below). A binary calls [`init`] once
//! at startup to route records to stderr and a size-rolled file.

use std::error::Error;
use std::path::Path;

use ::log::LevelFilter;
use log4rs::{
    Config, Handle,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

#[doc(hidden)]
pub use ::log as facade;

const LOG_SIZE_LIMIT: u64 = 5 * 1024 * 1024; // 5 MB
const LOG_FILE_COUNT: u32 = 3;

/// Rolled files sit next to the live one: `lpq.log.0`, `lpq.log.1`, ...
fn archive_pattern(file: &Path) -> String {
    join!(&*file.to_string_lossy(), ".{}")
}

/// Route log records to stderr (info and up) and to `file` (at `file_level`).
pub fn init(file: &Path, file_level: LevelFilter) -> Result<Handle, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let archive = archive_pattern(file);
    let roller = FixedWindowRoller::builder().build(&archive, LOG_FILE_COUNT)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(LOG_SIZE_LIMIT)), Box::new(roller));

    let logfile = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("[{d(%H:%M:%S%.3f)}][{l}] {t} - {m}{n}")))
        .build(file, Box::new(policy))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Info)))
                .build("stderr", Box::new(stderr)),
        )
        .build(
            Root::builder()
                .appender("logfile")
                .appender("stderr")
                .build(LevelFilter::Trace),
        )?;

    Ok(log4rs::init_config(config)?)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::facade::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::facade::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::facade::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::facade::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archives_are_numbered_beside_the_log() {
        assert_eq!(archive_pattern(Path::new(".store/lpq.log")), ".store/lpq.log.{}");
    }
}
