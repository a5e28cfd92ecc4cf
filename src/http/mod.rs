//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que usa el servidor,
//! sin librerías de alto nivel. Incluye:
//!
//! - Parsing de requests
//! - Headers ordenados con búsqueda exacta
//! - Construcción y serialización de responses (binary-safe)
//! - Negociación de `Accept-Encoding` y compresión gzip
//! - Códigos de estado
//!
//! ## Alcance
//!
//! - Una sola request por conexión (sin keep-alive ni pipelining)
//! - Sin chunked transfer encoding
//! - Request y response completos en memoria
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod encoding;  // Accept-Encoding + gzip
pub mod headers;   // Headers ordenados
pub mod request;   // Parsing de requests
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::{ContentEncoding, CompressionError};
pub use headers::Headers;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
