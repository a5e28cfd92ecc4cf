//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: 200 OK vacío
//! - `/echo/<text>`: devuelve `<text>`, comprimido con gzip si el cliente lo acepta
//! - `/user-agent`: devuelve el header `User-Agent`

use super::Handler;
use crate::http::encoding::{encode_body, ContentEncoding};
use crate::http::{Request, Response, StatusCode};
use log::debug;

/// Handler para `GET /`
pub struct RootHandler;

impl Handler for RootHandler {
    fn handle(&self, _path: &str, _request: &Request) -> Response {
        Response::new(StatusCode::Ok)
    }
}

/// Handler para `GET /echo/<text>`
///
/// # Ejemplo de response con `Accept-Encoding: gzip`
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 23
/// Content-Encoding: gzip
/// ```
pub struct EchoHandler;

impl Handler for EchoHandler {
    fn handle(&self, path: &str, request: &Request) -> Response {
        let requested = ContentEncoding::for_request(request);
        let (body, used) = encode_body(path.as_bytes().to_vec(), requested);

        debug!("echo {} bytes as {}", path.len(), used.as_str());

        let response = Response::new(StatusCode::Ok);
        let response = match used {
            ContentEncoding::Gzip => response.with_header("Content-Encoding", used.as_str()),
            ContentEncoding::Identity => response,
        };
        response.with_body(body)
    }
}

/// Handler para `GET /user-agent`
///
/// Si el header no viene, el body queda vacío.
pub struct UserAgentHandler;

impl Handler for UserAgentHandler {
    fn handle(&self, _path: &str, request: &Request) -> Response {
        let user_agent = request.header("User-Agent").unwrap_or("");
        Response::new(StatusCode::Ok).with_body(user_agent)
    }
}
