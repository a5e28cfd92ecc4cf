//! # Negociación de Content-Encoding y compresión gzip
//! src/http/encoding.rs
//!
//! El cliente anuncia en `Accept-Encoding` los encodings que acepta. Solo
//! soportamos `gzip`: se elige si aparece como token exacto en cualquier
//! posición de la lista. Los valores de calidad (`;q=`) no se interpretan.

use super::Request;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::io::{self, Write};
use thiserror::Error;

/// Error al comprimir un body
#[derive(Debug, Error)]
#[error("gzip compression failed: {0}")]
pub struct CompressionError(#[from] io::Error);

/// Encoding elegido para el body de la respuesta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    Identity,
}

impl ContentEncoding {
    /// Decide el encoding a partir del valor de `Accept-Encoding`
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::ContentEncoding;
    ///
    /// assert_eq!(ContentEncoding::negotiate(Some("br, gzip")), ContentEncoding::Gzip);
    /// assert_eq!(ContentEncoding::negotiate(Some("identity, br")), ContentEncoding::Identity);
    /// assert_eq!(ContentEncoding::negotiate(None), ContentEncoding::Identity);
    /// ```
    pub fn negotiate(accept_encoding: Option<&str>) -> Self {
        let accepts_gzip = accept_encoding
            .map(|value| value.split(',').any(|token| token.trim() == "gzip"))
            .unwrap_or(false);

        if accepts_gzip {
            ContentEncoding::Gzip
        } else {
            ContentEncoding::Identity
        }
    }

    /// Negocia usando el primer header `Accept-Encoding` del request
    pub fn for_request(request: &Request) -> Self {
        Self::negotiate(request.header("Accept-Encoding"))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
            ContentEncoding::Identity => "identity",
        }
    }
}

/// Comprime el body completo en un stream gzip (no deflate crudo)
pub fn gzip_compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Aplica el encoding pedido y retorna el body junto al encoding realmente usado
///
/// Si la compresión falla se envía el body sin comprimir; el error solo
/// queda en el log.
pub fn encode_body(body: Vec<u8>, encoding: ContentEncoding) -> (Vec<u8>, ContentEncoding) {
    encode_body_with(body, encoding, gzip_compress)
}

fn encode_body_with(
    body: Vec<u8>,
    encoding: ContentEncoding,
    compress: impl FnOnce(&[u8]) -> Result<Vec<u8>, CompressionError>,
) -> (Vec<u8>, ContentEncoding) {
    match encoding {
        ContentEncoding::Identity => (body, ContentEncoding::Identity),
        ContentEncoding::Gzip => match compress(&body) {
            Ok(compressed) => (compressed, ContentEncoding::Gzip),
            Err(e) => {
                warn!("{}; sending uncompressed body", e);
                (body, ContentEncoding::Identity)
            }
        },
    }
}
