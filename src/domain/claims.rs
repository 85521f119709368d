use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names computed by the service at issuance. Caller-supplied extra
/// claims under these names are discarded; the reserved computation wins.
pub const RESERVED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// The claims set embedded in a token.
///
/// Immutable once signed into a token; decoding hands back a copy for
/// inspection only. Invariant: `exp > iat` for every token this crate
/// issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (principal identifier)
    pub iat: i64,    // Issued at (unix seconds)
    pub exp: i64,    // Expiration time (unix seconds)
    /// Application-defined claims, flattened into the payload alongside the
    /// reserved ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Look up an application-defined claim by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
