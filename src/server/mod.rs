//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, una por thread
//! 3. Lee y parsea un request por conexión
//! 4. Genera y envía la response, y cierra

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ConnectionHandler, ConnectionState};
pub use tcp::Server;
