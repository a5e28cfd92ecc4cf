//! # Logging
//! src/logger.rs
//!
//! Inicializa `simplelog` como backend de la fachada `log`: terminal (stderr)
//! por defecto o un archivo en modo append si se configuró `--log-file`.

use crate::config::Config;
use crate::error::LoggerError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::str::FromStr;

/// Inicializa el logger global según la configuración
pub fn init_logger(config: &Config) -> Result<(), LoggerError> {
    let level = parse_level(&config.log_level);

    match &config.log_file {
        Some(path) => init_file_logger(level, path),
        None => init_term_logger(level),
    }
}

/// Convierte el nivel configurado; si no es válido usa `info`
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unsupported log level: {}, using `info`", level);
        LevelFilter::Info
    })
}

fn prepare_logger_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Error)
        .build()
}

fn init_term_logger(level: LevelFilter) -> Result<(), LoggerError> {
    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn init_file_logger(level: LevelFilter, path: &str) -> Result<(), LoggerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::OpenLogFile {
            path: path.to_string(),
            source,
        })?;

    WriteLogger::init(level, prepare_logger_config(), file)?;
    Ok(())
}
