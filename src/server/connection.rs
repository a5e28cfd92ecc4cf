//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Cada conexión atiende exactamente un ciclo request/response:
//!
//! ```text
//! AwaitingRequest → Parsed → Routed → Responded → Closed
//!        │             (lectura vacía, error de lectura o parsing)
//!        └──────────────────────────────────────────────→ Closed
//! ```
//!
//! Después de responder la conexión siempre se cierra, sin importar el
//! header `Connection`. Ningún error sale de aquí: se registra y se cierra.

use crate::error::ConnectionError;
use crate::http::Request;
use crate::router::Router;
use log::{debug, info, trace, warn};
use std::io::{Read, Write};
use std::time::Instant;

/// Estados de una conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    AwaitingRequest,
    Parsed,
    Routed,
    Responded,
    Closed,
}

/// Orquesta una conexión: leer → parsear → rutear → responder → cerrar
///
/// Es genérico sobre el stream para poder usarlo con `TcpStream` o con
/// un stream en memoria.
pub struct ConnectionHandler<'a, S> {
    stream: S,
    router: &'a Router,
    read_buffer_size: usize,
    state: ConnectionState,
}

impl<'a, S: Read + Write> ConnectionHandler<'a, S> {
    pub fn new(stream: S, router: &'a Router, read_buffer_size: usize) -> Self {
        Self {
            stream,
            router,
            read_buffer_size,
            state: ConnectionState::AwaitingRequest,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Atiende la conexión completa y la deja en `Closed`
    ///
    /// Retorna el error que cortó el ciclo antes de tiempo, si lo hubo.
    pub fn run(&mut self) -> Result<(), ConnectionError> {
        let result = self.serve();

        if let Err(e) = &result {
            warn!("closing connection in state {:?}: {}", self.state, e);
        }
        self.transition(ConnectionState::Closed);

        result
    }

    /// Recupera el stream (para inspeccionar lo escrito en tests)
    pub fn into_inner(self) -> S {
        self.stream
    }

    fn serve(&mut self) -> Result<(), ConnectionError> {
        let start = Instant::now();

        // 1. Una sola lectura acotada
        let mut buffer = vec![0u8; self.read_buffer_size];
        let bytes_read = self.stream.read(&mut buffer).map_err(ConnectionError::Read)?;

        if bytes_read == 0 {
            debug!("peer closed without sending a request");
            return Ok(());
        }
        trace!("read {} bytes", bytes_read);

        // 2. Parsing
        let request = Request::parse(&buffer[..bytes_read])?;
        self.transition(ConnectionState::Parsed);

        // 3. Routing + handler
        let response = self.router.route(&request);
        self.transition(ConnectionState::Routed);

        // 4. Envío en una sola escritura, sin reintentos
        let bytes = response.to_bytes();
        let sent = self.stream.write(&bytes).map_err(ConnectionError::Send)?;
        if sent < bytes.len() {
            warn!("partial send: {} of {} bytes", sent, bytes.len());
        }
        self.stream.flush().map_err(ConnectionError::Send)?;
        self.transition(ConnectionState::Responded);

        info!(
            "{} {} -> {} ({:.2}ms)",
            request.method(),
            request.path(),
            response.status(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(())
    }

    fn transition(&mut self, next: ConnectionState) {
        trace!("connection {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Atiende una conexión de principio a fin y retorna el estado final
pub fn handle_connection<S: Read + Write>(
    stream: S,
    router: &Router,
    read_buffer_size: usize,
) -> ConnectionState {
    let mut handler = ConnectionHandler::new(stream, router, read_buffer_size);
    // El error ya quedó registrado; la conexión se cierra igual
    let _ = handler.run();
    handler.state()
}
