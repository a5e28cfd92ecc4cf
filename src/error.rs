//! # Errores del Servidor
//! src/error.rs
//!
//! - [`ServerError`]: fallos de arranque, terminan el proceso con código 1
//! - [`ConnectionError`]: fallos dentro de una conexión; se registran en el
//!   log y nunca salen del thread que atiende esa conexión
//!
//! Los errores de parsing y compresión viven junto a su módulo en `http`.

use crate::http::ParseError;
use std::io;
use thiserror::Error;

/// Configuración inválida
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("files directory must not be empty")]
    EmptyDirectory,

    #[error("host must not be empty")]
    EmptyHost,

    #[error("read buffer size must be >= 1")]
    InvalidReadBufferSize,
}

/// No se pudo inicializar el logger
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Errores de arranque
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logger(#[from] LoggerError),

    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
}

/// Motivo por el que una conexión terminó sin completar su respuesta
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("send failed: {0}")]
    Send(#[source] io::Error),
}
