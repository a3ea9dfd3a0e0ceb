//! # jawt - Compact HMAC-Signed Tokens
//!
//! **jawt** builds and verifies compact tokens of the form
//! `base64url(header).base64url(claims).base64url(signature)`, signed with
//! HMAC-SHA256, HMAC-SHA384 or HMAC-SHA512.
//!
//! ## Overview
//!
//! Headers and claims are flat, insertion-ordered key/value stores holding
//! strings, 64-bit integers, 64-bit floats and booleans. They are serialized
//! with a small self-contained codec rather than a general JSON library: the
//! decoder accepts exactly the grammar the encoder produces (no nesting,
//! arrays, null or escaping) and infers each unquoted value's type.
//!
//! A [`Jwt`] renders its segments lazily. Mutating a header or claim marks
//! the token dirty; reading a segment re-renders, signs and caches all three.
//! The `alg` and `typ` headers are owned by the token: `alg` always names the
//! algorithm the token was created with and `typ` is always `"JWT"`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jawt::*;
//!
//! let mut jwt = Jwt::create("SECRET", Algorithm::HS256)?;
//! jwt.set_claim("sub", "1234567890")?
//!     .set_claim("iat", 1516239022)?
//!     .set_claim("admin", true)?;
//!
//! let text = jwt.render()?;
//!
//! // Parsing recomputes the signature and rejects any mismatch
//! let parsed = Jwt::from_token("SECRET", Algorithm::HS256, &text)?;
//! assert_eq!(parsed.claim("admin"), Some(&Value::Boolean(true)));
//! ```
//!
//! ## Parsing Rules
//!
//! Unquoted values are typed in this order:
//!
//! 1. contains `.` → float (a parse failure rejects the token)
//! 2. contains `true` or `false` → boolean
//! 3. otherwise → integer
//!
//! By default an integer that fails to parse drops the member silently, so
//! tokens issued by older implementations keep verifying. Enable
//! [`TokenBuilder::strict`] to reject them instead.
//!
//! ## Security
//!
//! - A parsed token is only returned after its signature has been recomputed
//!   under the caller's secret and algorithm and matched against the supplied
//!   one. The algorithm named in an incoming header is never trusted.
//! - Signatures are compared with [`constant_time_eq`](https://crates.io/crates/constant_time_eq).
//! - Secrets are wiped from memory on drop and redacted from `Debug` output.
//! - Token text and decoded segments are size-limited before parsing.
//!
//! ## Concurrency
//!
//! Every operation is synchronous and in-memory. A [`Jwt`] is owned by one
//! caller; share it only behind external synchronization. A [`Signer`] is
//! immutable and can be shared freely.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)
//! - [RFC 4648 §5](https://datatracker.ietf.org/doc/html/rfc4648#section-5): Base64URL

// Core modules
pub mod error;
pub mod utils;
pub(crate) mod limits;

// Algorithm and signing
pub mod algorithm;
pub mod signer;

// Storage and codec
pub mod attributes;
pub mod codec;

// Token types
pub mod token;

pub use algorithm::Algorithm;
pub use attributes::{Attributes, Value};
pub use codec::DecodeMode;
pub use error::{AttributeKind, Error, Result};
pub use signer::Signer;
pub use token::{Jwt, TokenBuilder};
