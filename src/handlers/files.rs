//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! - `GET /files/<name>`: lee el archivo completo
//! - `POST /files/<name>`: escribe el body, sobrescribiendo si existe
//!
//! La ruta se arma como `directorio + "/" + name`, sin sanitizar `..`.
//! Los accesos no se sincronizan entre conexiones: un GET y un POST
//! simultáneos sobre el mismo archivo pueden verse a medio escribir.

use super::Handler;
use crate::http::response::OCTET_STREAM;
use crate::http::{Request, Response, StatusCode};
use log::{debug, error};
use std::fs::{self, File};
use std::io::{self, Write};

/// Arma la ruta del archivo dentro del directorio base
pub fn resolve_path(directory: &str, name: &str) -> String {
    format!("{}/{}", directory, name)
}

/// Handler para `GET /files/<name>`
pub struct FileGetHandler {
    directory: String,
}

impl FileGetHandler {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl Handler for FileGetHandler {
    fn handle(&self, path: &str, _request: &Request) -> Response {
        let filepath = resolve_path(&self.directory, path);

        match fs::read(&filepath) {
            Ok(contents) => {
                debug!("read {} bytes from {}", contents.len(), filepath);
                Response::new(StatusCode::Ok)
                    .with_content_type(OCTET_STREAM)
                    .with_body(contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("file not found: {}", filepath);
                Response::not_found()
            }
            Err(e) => {
                error!("failed to read {}: {}", filepath, e);
                Response::new(StatusCode::InternalServerError)
            }
        }
    }
}

/// Handler para `POST /files/<name>`
///
/// Sin separador `\r\n\r\n` en el request no hay body que escribir: 400.
pub struct FilePostHandler {
    directory: String,
}

impl FilePostHandler {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl Handler for FilePostHandler {
    fn handle(&self, path: &str, request: &Request) -> Response {
        let body = match request.body_section() {
            Some(body) => body,
            None => return Response::new(StatusCode::BadRequest),
        };

        let filepath = resolve_path(&self.directory, path);

        match write_file(&filepath, body) {
            Ok(()) => {
                debug!("wrote {} bytes to {}", body.len(), filepath);
                Response::new(StatusCode::Created)
            }
            Err(e) => {
                error!("failed to write {}: {}", filepath, e);
                Response::new(StatusCode::InternalServerError)
            }
        }
    }
}

fn write_file(filepath: &str, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(filepath)?;
    file.write_all(contents)?;
    file.flush()
}
