//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! Content-Encoding: gzip\r\n
//! \r\n
//! <body binario>
//! ```
//!
//! `Content-Type` y `Content-Length` siempre se emiten primero; los headers
//! que agregó el handler van después, en orden de inserción.

use super::{Headers, StatusCode};

/// Content type por defecto de todas las respuestas
pub const TEXT_PLAIN: &str = "text/plain";

/// Content type de los archivos servidos
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado (la frase se deriva de la tabla fija)
    status: StatusCode,

    content_type: String,

    /// Headers agregados por el handler, en orden de inserción
    headers: Headers,

    /// Cuerpo en bytes; su largo es el Content-Length
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta vacía `text/plain`
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// assert_eq!(
    ///     response.to_bytes(),
    ///     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    /// );
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Respuesta 404 estándar: body vacío, `text/plain`
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Agrega un header al final de la lista
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push(name, value);
    }

    /// Establece el cuerpo de la respuesta
    ///
    /// Acepta texto o bytes; el body es binario (puede contener ceros).
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - `Content-Type` y `Content-Length` (largo real del body)
    /// - Headers del handler en orden; `Content-Encoding` solo si es `gzip`
    /// - Línea vacía y body crudo
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_type,
            self.body.len()
        );

        for (name, value) in self.headers.iter() {
            if is_framing_header(name) {
                continue;
            }
            if name == "Content-Encoding" && value != "gzip" {
                continue;
            }
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");

        let mut result = Vec::with_capacity(head.len() + self.body.len());
        result.extend_from_slice(head.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene el primer header agregado con ese nombre
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Headers que el serializador siempre genera por su cuenta
fn is_framing_header(name: &str) -> bool {
    name.eq_ignore_ascii_case("Content-Type") || name.eq_ignore_ascii_case("Content-Length")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(response: &Response) -> String {
        String::from_utf8(response.to_bytes()).unwrap()
    }

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.content_type(), "text/plain");
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_empty_ok_exact_bytes() {
        assert_eq!(
            as_text(&Response::new(StatusCode::Ok)),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_not_found_exact_bytes() {
        assert_eq!(
            as_text(&Response::not_found()),
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_body_and_content_length() {
        let response = Response::new(StatusCode::Ok).with_body("abc");
        assert_eq!(
            as_text(&response),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
        );
    }

    #[test]
    fn test_headers_follow_in_insertion_order() {
        let response = Response::new(StatusCode::Created)
            .with_header("X-B", "2")
            .with_header("X-A", "1");

        assert_eq!(
            as_text(&response),
            "HTTP/1.1 201 Created\r\nContent-Type: text/plain\r\nContent-Length: 0\r\nX-B: 2\r\nX-A: 1\r\n\r\n"
        );
    }

    #[test]
    fn test_content_encoding_only_emitted_for_gzip() {
        let gzip = Response::new(StatusCode::Ok).with_header("Content-Encoding", "gzip");
        assert!(as_text(&gzip).contains("Content-Encoding: gzip\r\n"));

        let br = Response::new(StatusCode::Ok).with_header("Content-Encoding", "br");
        assert!(!as_text(&br).contains("Content-Encoding"));
    }

    #[test]
    fn test_handler_cannot_override_framing_headers() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Length", "999")
            .with_header("content-type", "text/html")
            .with_body("hi");

        let text = as_text(&response);
        assert_eq!(text.matches("Content-Length").count(), 1);
        assert!(text.contains("Content-Length: 2\r\n"));
        assert!(!text.contains("text/html"));
    }

    #[test]
    fn test_binary_body_with_zero_bytes() {
        let binary = vec![0x1F, 0x8B, 0x00, 0x00, 0xFF];
        let response = Response::new(StatusCode::Ok)
            .with_content_type(OCTET_STREAM)
            .with_body(binary.clone());

        let bytes = response.to_bytes();
        let head = b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 5\r\n\r\n";
        assert_eq!(&bytes[..head.len()], &head[..]);
        assert_eq!(&bytes[head.len()..], &binary[..]);
    }
}
