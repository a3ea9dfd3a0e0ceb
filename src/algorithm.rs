//! Supported signing algorithms
//!
//! The registry is closed: HMAC with SHA-256, SHA-384 or SHA-512. Each member
//! pairs the short name embedded in the `alg` header with the keyed-hash
//! primitive that produces the signature.

use crate::error::{Error, Result};

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// Every supported algorithm, weakest first
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Short name as written to the `alg` header
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Name of the keyed-hash primitive behind this algorithm
    pub const fn mac_name(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HmacSHA256",
            Algorithm::HS384 => "HmacSHA384",
            Algorithm::HS512 => "HmacSHA512",
        }
    }

    /// Length of a raw signature in bytes
    pub const fn signature_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }

    /// Compute the raw MAC of `message` under `key`
    pub(crate) fn sign(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Algorithm::HS256 => compute::<Hmac<Sha256>>(key, message),
            Algorithm::HS384 => compute::<Hmac<Sha384>>(key, message),
            Algorithm::HS512 => compute::<Hmac<Sha512>>(key, message),
        }
    }
}

fn compute<M>(key: &[u8], message: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|e| Error::SigningFailed(format!("Invalid key: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Err(Error::AlgorithmNoneRejected),
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(Error::AlgorithmUnsupported(s.into())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
