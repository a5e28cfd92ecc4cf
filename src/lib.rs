//! # minihttp
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente mínimo implementado desde cero: convierte
//! los bytes de una conexión TCP en un request, lo rutea a uno de un conjunto
//! fijo de handlers y serializa la response (opcionalmente comprimida con
//! gzip) de vuelta al socket.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, responses, status codes y gzip
//! - `router`: Tabla ordenada de rutas exactas/prefijo
//! - `handlers`: Root, Echo, UserAgent, FileGet, FilePost
//! - `server`: Listener TCP y manejo de cada conexión
//! - `config`, `logger`, `error`: CLI, logging y errores tipados
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use minihttp::config::Config;
//! use minihttp::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(config).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
