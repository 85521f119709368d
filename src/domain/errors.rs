use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Failure to decode or verify a presented token.
///
/// Expiry is deliberately absent: an expired but well-formed token still
/// decodes, and `TokenService::is_valid` reports expiry as a boolean
/// outcome rather than an error.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Structurally invalid input: wrong number of segments, bad base64,
    /// or an unparseable claims payload.
    #[error("malformed token")]
    Malformed,

    /// Segments are well-formed but the signature does not verify
    /// (tampering, or a token signed under a different key).
    #[error("invalid signature")]
    InvalidSignature,

    /// Requested claim absent from an otherwise valid token.
    #[error("missing claim: {0}")]
    MissingClaim(String),

    /// Claim present and the token verified, but the value cannot be
    /// represented in the requested form (e.g. an `exp` outside the
    /// representable timestamp range).
    #[error("claim out of range: {0}")]
    OutOfRangeClaim(&'static str),
}

impl From<jsonwebtoken::errors::Error> for DecodeError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => DecodeError::InvalidSignature,
            _ => DecodeError::Malformed,
        }
    }
}

/// Failure to issue a token.
#[derive(Error, Debug)]
pub enum IssueError {
    /// The principal's identifier is empty; an anonymous token would be
    /// unverifiable.
    #[error("principal has an empty subject identifier")]
    EmptySubject,

    /// `iat + TTL` does not fit in the representable timestamp range.
    #[error("token lifetime overflows the expiry timestamp")]
    ExpiryOverflow,

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
