use crate::algorithm::Algorithm;
use crate::codec::DecodeMode;
use crate::error::{Error, Result};
use crate::signer::Signer;
use crate::token::Jwt;

use zeroize::Zeroizing;

/// Token configuration
///
/// Collects the secret, algorithm and decoding rules, then creates empty
/// tokens or parses and verifies existing ones. The builder can be reused.
///
/// ```ignore
/// use jawt::*;
///
/// let mut builder = TokenBuilder::new();
/// builder.secret("SECRET").algorithm(Algorithm::HS256);
///
/// let mut jwt = builder.create()?;
/// jwt.set_claim("sub", "1234567890")?;
/// let text = jwt.render()?;
///
/// let parsed = builder.parse(&text)?;
/// ```
#[derive(Clone, Default)]
pub struct TokenBuilder {
    secret: Option<Zeroizing<Vec<u8>>>,
    algorithm: Option<Algorithm>,
    mode: DecodeMode,
}

impl TokenBuilder {
    /// Create a builder with no secret, no algorithm and lenient decoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the shared secret
    pub fn secret(&mut self, secret: impl AsRef<[u8]>) -> &mut Self {
        self.secret = Some(Zeroizing::new(secret.as_ref().to_vec()));
        self
    }

    /// Configure the signing algorithm
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Reject unparseable integers and inexact booleans when parsing
    ///
    /// Off by default: lenient parsing drops such members silently.
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.mode = if strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };
        self
    }

    /// Build the signing context
    pub fn signer(&self) -> Result<Signer> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| Error::ConfigurationInvalid("no secret given".to_string()))?;
        let algorithm = self
            .algorithm
            .ok_or_else(|| Error::ConfigurationInvalid("no algorithm selected".to_string()))?;

        Signer::new(secret.as_slice(), algorithm)
    }

    /// Create an empty token
    pub fn create(&self) -> Result<Jwt> {
        Ok(Jwt::with_signer(self.signer()?))
    }

    /// Parse a token and accept it only if its signature verifies
    pub fn parse(&self, token: &str) -> Result<Jwt> {
        Jwt::parse(self.signer()?, token, self.mode)
    }
}

impl std::fmt::Debug for TokenBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBuilder")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode)
            .finish()
    }
}
