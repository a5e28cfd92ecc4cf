//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno. Se construye una sola vez al arrancar y después solo se lee.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./minihttp --directory /srv/files --port 8080
//! ./minihttp -d /srv/files -p 8080 --log-level debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/srv/files ./minihttp
//! ```

use crate::error::ConfigError;
use clap::Parser;
use log::info;

/// Puerto por defecto
pub const DEFAULT_PORT: u16 = 4221;

/// Tamaño por defecto de la única lectura por conexión
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "minihttp")]
#[command(about = "Servidor HTTP/1.1 concurrente mínimo: echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio donde se guardan/leen los archivos de /files/
    #[arg(short, long, default_value = "/tmp", env = "FILES_DIR")]
    pub directory: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Máximo de bytes leídos por request (el resto del body se descarta)
    #[arg(long = "read-buffer-size", default_value_t = DEFAULT_READ_BUFFER_SIZE, env = "READ_BUFFER_SIZE")]
    pub read_buffer_size: usize,

    // === Logging ===

    /// Nivel de log (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Archivo de log; si no se indica, se escribe en stderr
    #[arg(long = "log-file", env = "LOG_FILE")]
    pub log_file: Option<String>,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use minihttp::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.is_empty() {
            return Err(ConfigError::EmptyDirectory);
        }
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.read_buffer_size == 0 {
            return Err(ConfigError::InvalidReadBufferSize);
        }
        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        info!("Configuración:");
        info!("   Address:      {}", self.address());
        info!("   Files dir:    {}", self.directory);
        info!("   Read buffer:  {} bytes", self.read_buffer_size);
        info!(
            "   Log:          {} ({})",
            self.log_level,
            self.log_file.as_deref().unwrap_or("stderr")
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            directory: "/tmp".to_string(),
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}
