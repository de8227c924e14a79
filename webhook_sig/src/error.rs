use thiserror::Error;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The HMAC primitive refused the key material.
    #[error("Invalid HMAC key")]
    InvalidKey,

    /// The input could not be parsed as an absolute URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The scheme has no well-known port, so none can be appended.
    #[error("No default port known for scheme `{scheme}`")]
    UnknownDefaultPort { scheme: String },

    /// The URL cannot carry a port (no host, `file:`, cannot-be-a-base).
    #[error("Cannot change the port of `{url}`")]
    CannotSetPort { url: String },

    /// An `application/x-www-form-urlencoded` body failed to decode.
    #[error("Form decode error: {0}")]
    FormDecode(#[from] serde_urlencoded::de::Error),

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SignatureError>;
