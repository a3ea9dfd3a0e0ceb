//! Signing context
//!
//! A [`Signer`] binds a secret to one [`Algorithm`]. It is immutable once
//! built and cheap to clone; clones share the same key material, which is
//! wiped when the last clone is dropped.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use zeroize::Zeroizing;

/// HMAC signing context (algorithm + secret)
#[derive(Clone)]
pub struct Signer {
    algorithm: Algorithm,
    key: Arc<Zeroizing<Vec<u8>>>,
}

impl Signer {
    /// Create a signing context
    ///
    /// An empty secret is a configuration error.
    pub fn new(secret: impl AsRef<[u8]>, algorithm: Algorithm) -> Result<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(Error::ConfigurationInvalid(
                "no secret given".to_string(),
            ));
        }

        Ok(Self {
            algorithm,
            key: Arc::new(Zeroizing::new(secret.to_vec())),
        })
    }

    /// The bound algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign `message` and return the Base64URL-encoded signature
    pub fn sign(&self, message: &str) -> Result<String> {
        let signature = self.algorithm.sign(&self.key, message.as_bytes())?;
        Ok(base64url::encode_bytes(&signature))
    }

    /// Verify an encoded signature over `signing_input` (header.claims)
    ///
    /// The expected signature is recomputed and compared as encoded text.
    pub fn verify(&self, signing_input: &str, signature: &str) -> Result<()> {
        let expected = self.sign(signing_input)?;
        compare_signatures(&expected, signature)
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Compare an expected encoded signature with a supplied one
pub(crate) fn compare_signatures(expected: &str, supplied: &str) -> Result<()> {
    if expected.is_empty() || supplied.is_empty() {
        tracing::debug!("rejecting empty signature");
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(expected.as_bytes(), supplied.as_bytes()) {
        Ok(())
    } else {
        tracing::debug!("signature mismatch");
        Err(Error::SignatureInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNING_INPUT: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            Signer::new(b"", Algorithm::HS256),
            Err(Error::ConfigurationInvalid(_))
        ));
        assert!(matches!(
            Signer::new("", Algorithm::HS512),
            Err(Error::ConfigurationInvalid(_))
        ));
    }

    #[test]
    fn test_sign_known_vector() {
        let signer = Signer::new("SECRET", Algorithm::HS256).unwrap();
        assert_eq!(
            signer.sign(SIGNING_INPUT).unwrap(),
            "_XEngvIuxOcA-j7y_upRUbXli4DLToNf7HxH1XNmxSc"
        );
    }

    #[test]
    fn test_verify() {
        let signer = Signer::new("SECRET", Algorithm::HS256).unwrap();
        assert!(signer
            .verify(SIGNING_INPUT, "_XEngvIuxOcA-j7y_upRUbXli4DLToNf7HxH1XNmxSc")
            .is_ok());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let signer = Signer::new("other-secret", Algorithm::HS256).unwrap();
        assert!(matches!(
            signer.verify(SIGNING_INPUT, "_XEngvIuxOcA-j7y_upRUbXli4DLToNf7HxH1XNmxSc"),
            Err(Error::SignatureInvalid)
        ));
    }

    #[test]
    fn test_verify_wrong_algorithm() {
        let signer = Signer::new("SECRET", Algorithm::HS384).unwrap();
        assert!(matches!(
            signer.verify(SIGNING_INPUT, "_XEngvIuxOcA-j7y_upRUbXli4DLToNf7HxH1XNmxSc"),
            Err(Error::SignatureInvalid)
        ));
    }

    #[test]
    fn test_compare_signatures() {
        assert!(compare_signatures("abc", "abc").is_ok());
        assert!(matches!(
            compare_signatures("abc", "abd"),
            Err(Error::SignatureInvalid)
        ));
        assert!(matches!(
            compare_signatures("abc", "abcd"),
            Err(Error::SignatureInvalid)
        ));
        assert!(matches!(
            compare_signatures("", ""),
            Err(Error::SignatureInvalid)
        ));
        assert!(matches!(
            compare_signatures("abc", ""),
            Err(Error::SignatureInvalid)
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let signer = Signer::new("SECRET", Algorithm::HS256).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains("HS256"));
        assert!(!debug.contains("SECRET"));
    }

    #[test]
    fn test_clones_share_key() {
        let signer = Signer::new("SECRET", Algorithm::HS512).unwrap();
        let clone = signer.clone();
        assert_eq!(
            signer.sign("message").unwrap(),
            clone.sign("message").unwrap()
        );
    }
}
