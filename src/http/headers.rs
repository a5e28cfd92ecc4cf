//! # Headers HTTP ordenados
//! src/http/headers.rs
//!
//! Lista de pares `nombre: valor` que conserva el orden de inserción.
//! La búsqueda es exacta (sensible a mayúsculas) y devuelve la primera
//! coincidencia; los duplicados se conservan tal cual llegaron.

/// Colección ordenada de headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Crea una colección vacía
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Agrega un header al final, sin reemplazar los existentes
    pub fn push(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// Obtiene el valor del primer header con ese nombre exacto
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.push("Accept", "a");
    /// headers.push("Accept", "b");
    ///
    /// assert_eq!(headers.get("Accept"), Some("a"));
    /// assert_eq!(headers.get("accept"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Itera en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut headers = Headers::new();
        headers.push("X-Test", "first");
        headers.push("X-Test", "second");

        assert_eq!(headers.get("X-Test"), Some("first"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut headers = Headers::new();
        headers.push("User-Agent", "curl");

        assert_eq!(headers.get("User-Agent"), Some("curl"));
        assert_eq!(headers.get("user-agent"), None);
    }

    #[test]
    fn test_iter_preserves_order() {
        let mut headers = Headers::new();
        headers.push("B", "2");
        headers.push("A", "1");
        headers.push("C", "3");

        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
