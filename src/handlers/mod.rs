//! # Handlers del Servidor
//!
//! Cada ruta de la tabla apunta a un handler. Todos implementan el trait
//! [`Handler`], que recibe el resto del path (lo que sigue al patrón de la
//! ruta) y el request completo, y retorna una Response.
//!
//! ## Handlers
//!
//! - **basic**: `/`, `/echo/<text>`, `/user-agent`
//! - **files**: `GET /files/<name>` y `POST /files/<name>`

pub mod basic;
pub mod files;

pub use basic::{EchoHandler, RootHandler, UserAgentHandler};
pub use files::{FileGetHandler, FilePostHandler};

use crate::http::{Request, Response};

/// Capacidad común de todos los handlers
///
/// `path` es el sufijo que queda tras el patrón de la ruta: vacío para las
/// rutas exactas, `abc` para `/echo/abc`.
pub trait Handler: Send + Sync {
    fn handle(&self, path: &str, request: &Request) -> Response;
}
