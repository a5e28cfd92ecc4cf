//! # minihttp - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor: parsea la CLI, arranca el servidor
//! (logger + bind) y entra al loop de aceptación. Cualquier fallo de
//! arranque termina el proceso con código 1.

use minihttp::config::Config;
use minihttp::server::Server;

fn main() {
    let config = Config::new();

    let server = match Server::start(config) {
        Ok(server) => server,
        Err(e) => {
            // El logger puede no existir todavía: va directo a stderr
            eprintln!("Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    server.run();
}
