//! Errors for jawt

use thiserror::Error;

/// Which attribute store a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Header,
    Claim,
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::Header => f.write_str("header"),
            AttributeKind::Claim => f.write_str("claim"),
        }
    }
}

/// jawt Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),

    #[error("Missing {0} name")]
    KeyMissing(AttributeKind),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Invalid token format: expected three parts separated by '.', found {segments}")]
    FormatInvalid { segments: usize },

    #[error("Invalid token format: segment {index} is empty")]
    FormatEmptySegment { index: usize },

    #[error("Malformed segment: {0}")]
    FormatMalformedSegment(String),

    #[error("Invalid number in segment: {0}")]
    FormatInvalidNumber(String),

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Result type alias for jawt operations
pub type Result<T> = std::result::Result<T, Error>;
