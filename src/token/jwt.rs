//! Token state machine
//!
//! A [`Jwt`] owns a header store, a claim store and a signing context. Its
//! encoded segments are rendered lazily: every mutation moves the token to
//! `Dirty` and drops the cached segments, and the next read renders and
//! caches them again (`Clean`).

use crate::algorithm::Algorithm;
use crate::attributes::{Attributes, Value};
use crate::codec::{self, DecodeMode};
use crate::error::{AttributeKind, Error, Result};
use crate::limits::{MAX_DECODED_SEGMENT_SIZE, MAX_TOKEN_LENGTH};
use crate::signer::{compare_signatures, Signer};
use crate::token::TokenBuilder;
use crate::utils::base64url;

/// Header carrying the algorithm short name
pub const ALGORITHM_HEADER: &str = "alg";

/// Header carrying the token type
pub const TYPE_HEADER: &str = "typ";

/// Fixed value of the `typ` header
pub const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Clone, PartialEq)]
struct Segments {
    header: String,
    claims: String,
    signature: String,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// Mutated since the last render; nothing cached
    Dirty,
    /// Segments match the current stores
    Clean(Segments),
}

/// A signed compact token
///
/// # Examples
///
/// ```ignore
/// use jawt::*;
///
/// let mut jwt = Jwt::create("SECRET", Algorithm::HS256)?;
/// jwt.set_claim("sub", "1234567890")?
///     .set_claim("name", "John Doe")?
///     .set_claim("iat", 1516239022)?;
///
/// let text = jwt.render()?;
/// let parsed = Jwt::from_token("SECRET", Algorithm::HS256, &text)?;
/// assert_eq!(parsed.claim("sub").and_then(Value::as_str), Some("1234567890"));
/// ```
#[derive(Debug, Clone)]
pub struct Jwt {
    signer: Signer,
    headers: Attributes,
    claims: Attributes,
    state: State,
}

impl Jwt {
    /// Create an empty token
    pub fn create(secret: impl AsRef<[u8]>, algorithm: Algorithm) -> Result<Self> {
        TokenBuilder::new()
            .secret(secret)
            .algorithm(algorithm)
            .create()
    }

    /// Parse a serialized token and accept it only if its signature verifies
    /// under `secret` and `algorithm`
    pub fn from_token(
        secret: impl AsRef<[u8]>,
        algorithm: Algorithm,
        token: &str,
    ) -> Result<Self> {
        TokenBuilder::new()
            .secret(secret)
            .algorithm(algorithm)
            .parse(token)
    }

    /// Create an empty token bound to an existing signing context
    pub fn with_signer(signer: Signer) -> Self {
        Self {
            signer,
            headers: Attributes::new(),
            claims: Attributes::new(),
            state: State::Dirty,
        }
    }

    pub(crate) fn parse(signer: Signer, token: &str, mode: DecodeMode) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        if token.is_empty() {
            return Err(Error::FormatInvalid { segments: 0 });
        }

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::FormatInvalid {
                segments: parts.len(),
            });
        }

        if let Some(index) = parts.iter().position(|part| part.is_empty()) {
            return Err(Error::FormatEmptySegment { index });
        }

        let mut jwt = Jwt::with_signer(signer);
        decode_segment(parts[0], &mut jwt.headers, mode)?;
        decode_segment(parts[1], &mut jwt.claims, mode)?;

        let expected = jwt.segments()?.signature.as_str();
        compare_signatures(expected, parts[2])?;

        tracing::debug!(
            algorithm = %jwt.signer.algorithm(),
            headers = jwt.headers.len(),
            claims = jwt.claims.len(),
            "token verified"
        );

        Ok(jwt)
    }

    // ============================================================================
    // Headers
    // ============================================================================

    /// Set a header
    ///
    /// `alg` and `typ` are controlled by the token and are ignored here.
    pub fn set_header(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        require_key(key, AttributeKind::Header)?;
        self.invalidate();
        if !is_reserved(key) {
            self.headers.set(key, value);
        }
        Ok(self)
    }

    /// Set a header, or remove it when `value` is `None`
    pub fn set_header_opt<V: Into<Value>>(
        &mut self,
        key: &str,
        value: Option<V>,
    ) -> Result<&mut Self> {
        match value {
            Some(value) => self.set_header(key, value),
            None => self.remove_header(key).map(|_| self),
        }
    }

    /// Remove a header, returning its value
    ///
    /// `alg` and `typ` cannot be removed.
    pub fn remove_header(&mut self, key: &str) -> Result<Option<Value>> {
        require_key(key, AttributeKind::Header)?;
        self.invalidate();
        if is_reserved(key) {
            return Ok(None);
        }
        Ok(self.headers.remove(key))
    }

    /// Look up a header
    ///
    /// `alg` and `typ` are present once the token has been rendered or parsed.
    pub fn header(&self, key: &str) -> Option<&Value> {
        self.headers.get(key)
    }

    /// All headers in order
    pub fn headers(&self) -> &Attributes {
        &self.headers
    }

    // ============================================================================
    // Claims
    // ============================================================================

    /// Set a claim
    pub fn set_claim(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        require_key(key, AttributeKind::Claim)?;
        self.invalidate();
        self.claims.set(key, value);
        Ok(self)
    }

    /// Set a claim, or remove it when `value` is `None`
    pub fn set_claim_opt<V: Into<Value>>(
        &mut self,
        key: &str,
        value: Option<V>,
    ) -> Result<&mut Self> {
        match value {
            Some(value) => self.set_claim(key, value),
            None => self.remove_claim(key).map(|_| self),
        }
    }

    /// Remove a claim, returning its value
    pub fn remove_claim(&mut self, key: &str) -> Result<Option<Value>> {
        require_key(key, AttributeKind::Claim)?;
        self.invalidate();
        Ok(self.claims.remove(key))
    }

    /// Look up a claim
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// All claims in order
    pub fn claims(&self) -> &Attributes {
        &self.claims
    }

    // ============================================================================
    // Rendering
    // ============================================================================

    /// The bound algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.signer.algorithm()
    }

    /// Whether the next read will re-render the segments
    pub fn is_dirty(&self) -> bool {
        matches!(self.state, State::Dirty)
    }

    /// Encoded header segment
    pub fn encoded_header(&mut self) -> Result<&str> {
        Ok(&self.segments()?.header)
    }

    /// Encoded claims segment
    pub fn encoded_claims(&mut self) -> Result<&str> {
        Ok(&self.segments()?.claims)
    }

    /// Encoded signature segment
    pub fn encoded_signature(&mut self) -> Result<&str> {
        Ok(&self.segments()?.signature)
    }

    /// The signed portion, `header.claims`
    pub fn signing_input(&mut self) -> Result<String> {
        let segments = self.segments()?;
        Ok(format!("{}.{}", segments.header, segments.claims))
    }

    /// Full token text, `header.claims.signature`
    pub fn render(&mut self) -> Result<String> {
        let segments = self.segments()?;
        Ok(format!(
            "{}.{}.{}",
            segments.header, segments.claims, segments.signature
        ))
    }

    fn invalidate(&mut self) {
        self.state = State::Dirty;
    }

    fn segments(&mut self) -> Result<&Segments> {
        if self.is_dirty() {
            insert_reserved(&mut self.headers, self.signer.algorithm());
            let segments = encode_segments(&self.signer, &self.headers, &self.claims)?;
            self.state = State::Clean(segments);
        }

        match &self.state {
            State::Clean(segments) => Ok(segments),
            State::Dirty => Err(Error::SigningFailed(
                "token segments were not rendered".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for Jwt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered;
        let segments = match &self.state {
            State::Clean(segments) => segments,
            State::Dirty => {
                let mut headers = self.headers.clone();
                insert_reserved(&mut headers, self.signer.algorithm());
                rendered = encode_segments(&self.signer, &headers, &self.claims)
                    .map_err(|_| std::fmt::Error)?;
                &rendered
            }
        };
        write!(
            f,
            "{}.{}.{}",
            segments.header, segments.claims, segments.signature
        )
    }
}

fn require_key(key: &str, kind: AttributeKind) -> Result<()> {
    if key.is_empty() {
        return Err(Error::KeyMissing(kind));
    }
    Ok(())
}

fn is_reserved(key: &str) -> bool {
    key == ALGORITHM_HEADER || key == TYPE_HEADER
}

/// `alg` then `typ`; keys already present keep their position
fn insert_reserved(headers: &mut Attributes, algorithm: Algorithm) {
    headers.set(ALGORITHM_HEADER, algorithm.as_str());
    headers.set(TYPE_HEADER, TOKEN_TYPE);
}

fn encode_segments(signer: &Signer, headers: &Attributes, claims: &Attributes) -> Result<Segments> {
    let header = base64url::encode(&codec::encode(headers));
    let claims_segment = base64url::encode(&codec::encode(claims));
    let signature = signer.sign(&format!("{header}.{claims_segment}"))?;

    tracing::debug!(
        algorithm = %signer.algorithm(),
        headers = headers.len(),
        claims = claims.len(),
        "rendered token"
    );

    Ok(Segments {
        header,
        claims: claims_segment,
        signature,
    })
}

fn decode_segment(segment: &str, attributes: &mut Attributes, mode: DecodeMode) -> Result<()> {
    let body = base64url::decode(segment, MAX_DECODED_SEGMENT_SIZE)?;
    codec::decode_into(&body, attributes, mode)
}
