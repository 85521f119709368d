use jsonwebtoken::{DecodingKey, EncodingKey};

/// Symmetric HS256 key material, derived once and reused for the process
/// lifetime. The same secret backs both signing and verification, so every
/// instance sharing a token namespace must be configured with the same
/// bytes.
///
/// `Config` guarantees the secret is non-empty (at least 32 bytes) before
/// this type is ever constructed.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}
