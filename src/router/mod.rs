//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea (método, path) a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se recorren en el orden en que se registraron y gana la
//! primera que coincide. Una ruta coincide si el método es igual y el path
//! es exactamente el patrón (`Exact`) o empieza con él (`Prefix`). Si
//! ninguna coincide se responde 404 con body vacío.

use crate::handlers::{
    EchoHandler, FileGetHandler, FilePostHandler, Handler, RootHandler, UserAgentHandler,
};
use crate::http::{Method, Request, Response};
use log::debug;

/// Forma de comparar el path con el patrón
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

/// Una entrada de la tabla de rutas
pub struct Route {
    method: Method,
    pattern: String,
    kind: MatchKind,
    handler: Box<dyn Handler>,
}

impl Route {
    /// Verifica si la ruta acepta este método y path
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        if &self.method != method {
            return false;
        }
        match self.kind {
            MatchKind::Exact => path == self.pattern,
            MatchKind::Prefix => path.starts_with(&self.pattern),
        }
    }

    /// Lo que queda del path tras el patrón
    fn suffix<'a>(&self, path: &'a str) -> &'a str {
        &path[self.pattern.len()..]
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }
}

/// Router con tabla de rutas ordenada
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Tabla fija del servidor
    ///
    /// | Método | Patrón        | Match  |
    /// |--------|---------------|--------|
    /// | GET    | `/`           | exact  |
    /// | GET    | `/echo/`      | prefix |
    /// | GET    | `/user-agent` | exact  |
    /// | GET    | `/files/`     | prefix |
    /// | POST   | `/files/`     | prefix |
    pub fn with_default_routes(directory: &str) -> Self {
        let mut router = Self::new();
        router.register(Method::GET, "/", MatchKind::Exact, RootHandler);
        router.register(Method::GET, "/echo/", MatchKind::Prefix, EchoHandler);
        router.register(Method::GET, "/user-agent", MatchKind::Exact, UserAgentHandler);
        router.register(Method::GET, "/files/", MatchKind::Prefix, FileGetHandler::new(directory));
        router.register(Method::POST, "/files/", MatchKind::Prefix, FilePostHandler::new(directory));
        router
    }

    /// Registra una ruta al final de la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::handlers::RootHandler;
    /// use minihttp::http::Method;
    /// use minihttp::router::{MatchKind, Router};
    ///
    /// let mut router = Router::new();
    /// router.register(Method::GET, "/", MatchKind::Exact, RootHandler);
    /// assert!(router.find(&Method::GET, "/").is_some());
    /// ```
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        kind: MatchKind,
        handler: impl Handler + 'static,
    ) {
        self.routes.push(Route {
            method,
            pattern: pattern.to_string(),
            kind,
            handler: Box::new(handler),
        });
    }

    /// Busca la primera ruta que coincide
    pub fn find(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(method, path))
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no encuentra un handler, retorna 404 Not Found.
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        match self.find(request.method(), path) {
            Some(route) => {
                debug!("{} {} matched {} {}", request.method(), path, route.method, route.pattern);
                route.handler.handle(route.suffix(path), request)
            }
            None => {
                debug!("{} {} matched no route", request.method(), path);
                Response::not_found()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    struct Tagged(&'static str);

    impl Handler for Tagged {
        fn handle(&self, path: &str, _request: &Request) -> Response {
            Response::new(StatusCode::Ok).with_body(format!("{}:{}", self.0, path))
        }
    }

    fn request(raw: &str) -> Request {
        Request::parse(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new();
        assert!(router.is_empty());
    }

    #[test]
    fn test_default_table_order() {
        let router = Router::with_default_routes("/tmp");
        assert_eq!(router.len(), 5);

        let table: Vec<(&str, &str, MatchKind)> = router
            .routes
            .iter()
            .map(|r| (r.method().as_str(), r.pattern(), r.kind()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("GET", "/", MatchKind::Exact),
                ("GET", "/echo/", MatchKind::Prefix),
                ("GET", "/user-agent", MatchKind::Exact),
                ("GET", "/files/", MatchKind::Prefix),
                ("POST", "/files/", MatchKind::Prefix),
            ]
        );
    }

    #[test]
    fn test_exact_does_not_match_longer_path() {
        let mut router = Router::new();
        router.register(Method::GET, "/", MatchKind::Exact, Tagged("root"));

        assert!(router.find(&Method::GET, "/").is_some());
        assert!(router.find(&Method::GET, "/other").is_none());
    }

    #[test]
    fn test_prefix_passes_suffix() {
        let mut router = Router::new();
        router.register(Method::GET, "/echo/", MatchKind::Prefix, Tagged("echo"));

        let response = router.route(&request("GET /echo/hello/world HTTP/1.1\r\n\r\n"));
        assert_eq!(response.body(), b"echo:hello/world");
    }

    #[test]
    fn test_first_match_wins() {
        let mut router = Router::new();
        router.register(Method::GET, "/a", MatchKind::Prefix, Tagged("first"));
        router.register(Method::GET, "/a/b", MatchKind::Exact, Tagged("second"));

        let response = router.route(&request("GET /a/b HTTP/1.1\r\n\r\n"));
        assert_eq!(response.body(), b"first:/b");
    }

    #[test]
    fn test_method_must_match() {
        let router = Router::with_default_routes("/tmp");

        assert!(router.find(&Method::POST, "/").is_none());
        assert!(router.find(&Method::PUT, "/files/foo").is_none());
        assert!(router.find(&Method::Other("BREW".into()), "/echo/x").is_none());
        assert!(router.find(&Method::POST, "/files/foo").is_some());
    }

    #[test]
    fn test_route_not_found() {
        let router = Router::with_default_routes("/tmp");
        let response = router.route(&request("GET /nonexistent HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.content_type(), "text/plain");
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_echo_prefix_requires_trailing_slash() {
        let router = Router::with_default_routes("/tmp");
        let response = router.route(&request("GET /echo HTTP/1.1\r\n\r\n"));
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_user_agent_route() {
        let router = Router::with_default_routes("/tmp");
        let response = router.route(&request(
            "GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n",
        ));
        assert_eq!(response.body(), b"test-client/1.0");
    }
}
