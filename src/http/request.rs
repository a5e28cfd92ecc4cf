//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser de requests desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/foo.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n\r\n` separa headers del body
//! 4. **Body**: Todo lo que sigue al separador, en bytes crudos
//!
//! El parser trabaja sobre una única lectura acotada del socket: si el
//! body era más largo que el buffer, llega truncado y así se procesa.

use super::Headers;
use thiserror::Error;

/// Separador entre headers y body
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP
///
/// Cualquier token desconocido se conserva en `Other` y termina en 404,
/// nunca en un error de parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    Other(String),
}

impl Method {
    /// Convierte el token de la request line en un método
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::OPTIONS => "OPTIONS",
            Method::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No llegó ningún byte
    #[error("Empty request")]
    EmptyRequest,

    /// La request line tiene menos de tres tokens
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Representa un request parseado
///
/// Es dueño de sus headers y de su body durante toda la conexión.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    version: String,
    headers: Headers,
    /// `None` si el buffer no contenía el separador `\r\n\r\n`
    body: Option<Vec<u8>>,
}

impl Request {
    /// Parsea un request desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minihttp::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: test\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("test"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // 1. Separar head y body por posición de bytes (el body puede ser binario)
        let (head, body) = match find_terminator(buffer) {
            Some(pos) => (&buffer[..pos], Some(buffer[pos + HEADER_TERMINATOR.len()..].to_vec())),
            None => (buffer, None),
        };

        let head = String::from_utf8_lossy(head);
        let mut lines = head.split("\r\n");

        // 2. Request line
        let (method, path, version) = Self::parse_request_line(lines.next().unwrap_or(""))?;

        // 3. Headers hasta la línea vacía
        let headers = Self::parse_headers(lines);

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line: `METHOD PATH VERSION`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 3 {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        }

        Ok((Method::from_token(parts[0]), parts[1].to_string(), parts[2].to_string()))
    }

    /// Parsea los headers, cortando cada línea en el primer ':'
    ///
    /// Las líneas sin ':' se ignoran.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> Headers {
        let mut headers = Headers::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            if let Some((name, value)) = line.split_once(':') {
                headers.push(name, value.trim());
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene el primer header con ese nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body (vacío si no hubo separador)
    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or(&[])
    }

    /// Obtiene el body solo si el request traía el separador `\r\n\r\n`
    pub fn body_section(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

fn find_terminator(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .position(|window| window == HEADER_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
        assert!(request.headers().is_empty());
        assert_eq!(request.body_section(), Some(&b""[..]));
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: test-client/1.0\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("test-client/1.0"));
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn test_header_value_trimmed_and_split_on_first_colon() {
        let raw = b"GET / HTTP/1.1\r\nHost:   localhost:4221   \r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:4221"));
    }

    #[test]
    fn test_header_lookup_first_match_case_sensitive() {
        let raw = b"GET / HTTP/1.1\r\nAccept-Encoding: gzip\r\nAccept-Encoding: br\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Accept-Encoding"), Some("gzip"));
        assert_eq!(request.header("accept-encoding"), None);
    }

    #[test]
    fn test_header_without_colon_is_skipped() {
        let raw = b"GET / HTTP/1.1\r\ngarbage line\r\nX-Ok: yes\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("X-Ok"), Some("yes"));
    }

    #[test]
    fn test_parse_post_body() {
        let raw = b"POST /files/foo.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), b"hello");
    }

    #[test]
    fn test_binary_body_is_preserved() {
        let mut raw = b"POST /files/bin HTTP/1.1\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xFF, 0x0D, 0x0A, 0x00]);
        let request = Request::parse(&raw).unwrap();

        assert_eq!(request.body(), &[0x00u8, 0xFF, 0x0D, 0x0A, 0x00]);
    }

    #[test]
    fn test_body_keeps_inner_blank_lines() {
        let raw = b"POST /files/a HTTP/1.1\r\n\r\nline1\r\n\r\nline2";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.body(), b"line1\r\n\r\nline2");
    }

    #[test]
    fn test_missing_terminator_has_no_body_section() {
        let raw = b"POST /files/foo.txt HTTP/1.1\r\nHost: x\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("x"));
        assert_eq!(request.body_section(), None);
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let raw = b"BREW /pot HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::Other("BREW".to_string()));
        assert_eq!(request.method().as_str(), "BREW");
    }

    #[test]
    fn test_empty_request() {
        let result = Request::parse(b"");
        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn test_malformed_request_line() {
        let result = Request::parse(b"GET /\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));

        let result = Request::parse(b"\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }
}
