//! Bearer credentials presented by callers.
//!
//! The raw token never leaves this type except through [`BearerToken::digest`]
//! (stored hash) and [`BearerToken::fingerprint`] (log-safe prefix).

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of the log fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

const BEARER_SCHEME: &str = "bearer";

/// Reasons a caller's credential was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The header was absent.
    #[error("Authorization required")]
    Missing,
    /// The header was present but not `Bearer <token>`.
    #[error("Invalid token")]
    Malformed,
    /// The token was well formed but no actor holds it.
    #[error("Invalid token")]
    Rejected,
}

impl CredentialError {
    /// Machine-readable reason placed in error details.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Missing => "missing_credential",
            Self::Malformed | Self::Rejected => "invalid_credential",
        }
    }
}

/// Opaque bearer token held in zeroising memory.
///
/// # Examples
/// ```
/// use sweetshop::domain::BearerToken;
///
/// let token = BearerToken::from_authorization_header(Some("Bearer s3cret")).unwrap();
/// assert_eq!(token.digest().len(), 64);
/// assert_eq!(token.fingerprint().len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap a raw token value, rejecting blanks.
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = Zeroizing::new(raw.into());
        if raw.trim().is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(CredentialError::Malformed);
        }
        Ok(Self(raw))
    }

    /// Parse the value of an `Authorization` header.
    ///
    /// The scheme is matched case-insensitively.
    pub fn from_authorization_header(header: Option<&str>) -> Result<Self, CredentialError> {
        let header = header.ok_or(CredentialError::Missing)?;
        let (scheme, token) = header
            .trim()
            .split_once(' ')
            .ok_or(CredentialError::Malformed)?;
        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(CredentialError::Malformed);
        }
        Self::new(token.trim())
    }

    /// Full SHA-256 hex digest used to look up stored tokens.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }

    /// Truncated digest suitable for log fields.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..FINGERPRINT_BYTES])
    }

    /// Raw token text. Only adapters holding plaintext fixtures need this.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&self.fingerprint()).finish()
    }
}
