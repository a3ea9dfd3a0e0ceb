//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for a decoded header or claims body (64KB)
pub(crate) const MAX_DECODED_SEGMENT_SIZE: usize = 64 * 1024;
