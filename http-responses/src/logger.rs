//! Optional logger setup for applications using this crate.
//!
//! The library itself only talks to the `log` facade. [`dispatch`] hands back a
//! `fern::Dispatch` the caller can extend and apply; [`initialize`] applies it as
//! the global logger.

use crate::error::LoggerError;

use common::ErrorLocation;

use std::io::stdout;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339_seconds;
use log::{LevelFilter, debug, info};

/// Set once a dispatch has been applied. Failed attempts leave it `false`.
static LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);

#[cfg(debug_assertions)]
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Build a dispatch writing colored lines to stdout and, when `log_file` is
/// given, plain lines appended to that file.
///
/// Nothing is installed; chain further outputs or call `apply()` yourself.
///
/// # Errors
///
/// [`LoggerError::Initialization`] if `log_file` cannot be opened.
#[track_caller]
pub fn dispatch(log_file: Option<&Path>) -> Result<Dispatch, LoggerError> {
    let location = ErrorLocation::caller();

    let colors = ColoredLevelConfig::new()
        .trace(Magenta)
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red);

    let mut root = Dispatch::new()
        .level(DEFAULT_LEVEL)
        .chain(line_format(Some(colors)).chain(stdout()));

    if let Some(path) = log_file {
        let file = fern::log_file(path).map_err(|e| LoggerError::Initialization {
            message: format!("Failed to open log file {}: {e}", path.display()),
            location,
        })?;
        root = root.chain(line_format(None).chain(file));
    }

    Ok(root)
}

/// `<timestamp> <LEVEL> <target>: <message>`, colored when `colors` is set.
fn line_format(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let timestamp = format_rfc3339_seconds(SystemTime::now());
        match &colors {
            Some(colors) => out.finish(format_args!(
                "{timestamp} {} {}: {message}",
                colors.color(record.level()),
                record.target(),
            )),
            None => out.finish(format_args!(
                "{timestamp} {} {}: {message}",
                record.level(),
                record.target(),
            )),
        }
    })
}

/// Install [`dispatch`] as the global logger.
///
/// Once a call has succeeded, later calls are a no-op returning `Ok`. A failed
/// call installs nothing, so the next call tries again.
///
/// # Errors
///
/// [`LoggerError::Initialization`] if the log file cannot be opened or another
/// global logger is already set.
#[track_caller]
pub fn initialize(log_file: Option<&Path>) -> Result<(), LoggerError> {
    let location = ErrorLocation::caller();
    let mut installed = LOGGER_INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if *installed {
        debug!("Logger already installed, ignoring");
        return Ok(());
    }

    dispatch(log_file)?
        .apply()
        .map_err(|e| LoggerError::Initialization {
            message: format!("Failed to install logger: {e}"),
            location,
        })?;

    *installed = true;
    info!("Logger installed at level {DEFAULT_LEVEL}");

    Ok(())
}
