use thiserror::Error;

/// Represents errors that can occur while generating a key or building a
/// certificate signing request.
///
/// This enum provides detailed error messages for various failure scenarios.
#[derive(Debug, Error)]
pub enum CsrGenError {
    /// Error in the configuration file (missing or malformed field).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during key generation.
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),

    /// Error while assembling the certificate signing request.
    #[error("Failed to build request: {0}")]
    RequestBuildError(String),

    /// Error while signing the request.
    #[error("Signing error: {0}")]
    SigningError(String),

    /// Error during data encoding.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// Error during data decoding.
    #[error("Failed to decode data: {0}")]
    DecodingError(String),

    /// Error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<der::Error> for CsrGenError {
    /// Converts a `der::Error` into a `CsrGenError`.
    fn from(err: der::Error) -> Self {
        CsrGenError::DecodingError(err.to_string())
    }
}

impl From<rsa::Error> for CsrGenError {
    fn from(err: rsa::Error) -> Self {
        CsrGenError::KeyGenerationError(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for CsrGenError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        CsrGenError::EncodingError(err.to_string())
    }
}

impl From<pem::PemError> for CsrGenError {
    fn from(err: pem::PemError) -> Self {
        CsrGenError::DecodingError(err.to_string())
    }
}

impl From<rsa::signature::Error> for CsrGenError {
    fn from(err: rsa::signature::Error) -> Self {
        CsrGenError::SigningError(err.to_string())
    }
}
