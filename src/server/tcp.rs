//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio thread,
//! que se desacopla (no se hace join) y termina al cerrar la conexión.
//!
//! No hay límite de conexiones: cada `accept` lanza un thread nuevo. Lo único
//! compartido entre threads es la tabla de rutas, de solo lectura.

use super::connection::handle_connection;
use crate::config::Config;
use crate::error::ServerError;
use crate::logger;
use crate::router::Router;
use log::{debug, error, info, warn};
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: TcpListener,
}

impl Server {
    /// Arranque completo: logger, resumen de configuración y bind
    ///
    /// Todo fallo de arranque sale como `ServerError`.
    pub fn start(config: Config) -> Result<Self, ServerError> {
        logger::init_logger(&config)?;

        info!("minihttp HTTP/1.1 Server v{}", env!("CARGO_PKG_VERSION"));
        config.print_summary();

        Self::bind(config)
    }

    /// Valida la configuración, hace bind y arma la tabla de rutas
    ///
    /// # Errores
    ///
    /// `ServerError::Config` si la configuración es inválida y
    /// `ServerError::Bind` si no se pudo escuchar en `host:port`.
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        config.validate()?;

        let address = config.address();
        let listener =
            TcpListener::bind(&address).map_err(|source| ServerError::Bind { address, source })?;

        if !Path::new(&config.directory).is_dir() {
            warn!("files directory {} does not exist", config.directory);
        }

        let router = Router::with_default_routes(&config.directory);

        Ok(Self {
            config,
            router: Arc::new(router),
            listener,
        })
    }

    /// Dirección real en la que escucha (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loop de aceptación: un thread por conexión
    ///
    /// Los errores de `accept` se registran y el loop continúa.
    pub fn run(&self) {
        match self.local_addr() {
            Ok(addr) => info!("Servidor escuchando en {}", addr),
            Err(_) => info!("Servidor escuchando en {}", self.config.address()),
        }
        info!("Modo concurrente: un thread por conexion");

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_connection(stream),
                Err(e) => error!("Error al aceptar conexión: {}", e),
            }
        }
    }

    /// Acepta y atiende una sola conexión en el thread actual
    pub fn handle_one(&self) -> io::Result<()> {
        let (stream, peer) = self.listener.accept()?;
        debug!("Nueva conexión desde: {}", peer);
        handle_connection(stream, &self.router, self.config.read_buffer_size);
        Ok(())
    }

    fn spawn_connection(&self, stream: TcpStream) {
        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        debug!("Nueva conexión desde: {} (spawning thread)", peer_addr);

        let router = Arc::clone(&self.router);
        let read_buffer_size = self.config.read_buffer_size;

        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer_addr))
            .spawn(move || {
                handle_connection(stream, &router, read_buffer_size);
            });

        // Si no se pudo crear el thread, el stream se descarta y se cierra
        if let Err(e) = spawned {
            error!("Error al crear thread para {}: {}", peer_addr, e);
        }
    }
}
