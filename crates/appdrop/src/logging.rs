use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use simplelog::{CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};

use appdrop_platform::AppPaths;

use crate::settings::AppSettings;

/// Append-only log file that is recreated when removed while the app runs.
///
/// `WriteLogger` serialises access, so no locking happens here.
struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    fn open(path: PathBuf) -> io::Result<Self> {
        let file = open_append(&path)?;
        Ok(Self { path, file })
    }

    fn reopen_if_missing(&mut self) -> io::Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.file = open_append(&self.path)?;
        }
        Ok(())
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.reopen_if_missing()?;
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// `debug.log` -> `debug.log.1`
fn rotated_path(log_path: &Path) -> PathBuf {
    let mut name = log_path
        .file_name()
        .map_or_else(|| OsString::from("log"), OsString::from);
    name.push(".1");
    log_path.with_file_name(name)
}

/// Moves an oversized log aside so the next session starts empty. Only one
/// previous generation is kept.
fn rotate_if_oversized(log_path: &Path, max_size: u64) -> io::Result<bool> {
    let size = match std::fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if size <= max_size {
        return Ok(false);
    }

    std::fs::rename(log_path, rotated_path(log_path))?;
    Ok(true)
}

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .add_filter_allow_str("appdrop")
        .build()
}

/// Installs the global logger. Failures are swallowed: the app runs the
/// same without a log file.
pub fn init(settings: &AppSettings) {
    let level = level_for(settings.debug_logging);
    let config = logger_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    #[cfg(debug_assertions)]
    loggers.push(TermLogger::new(
        LevelFilter::Debug,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    let log_path = AppPaths::new()
        .ok()
        .filter(|paths| paths.ensure_dirs().is_ok())
        .map(|paths| paths.log_file());

    let mut rotated = false;
    if let Some(path) = &log_path {
        rotated = rotate_if_oversized(path, settings.max_log_size_bytes).unwrap_or(false);
        if let Ok(file) = LogFile::open(path.clone()) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
        }
    }

    if CombinedLogger::init(loggers).is_err() {
        return;
    }
    log::set_max_level(level);

    if let Some(path) = log_path {
        log::debug!("Logging to {}", path.display());
        if rotated {
            log::debug!("Previous log moved to {}", rotated_path(&path).display());
        }
    }
}
