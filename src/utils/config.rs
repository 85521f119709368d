use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use chrono::Duration;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::env::{JWT_SECRET_B64_ENV_VAR, TOKEN_TTL_SECONDS_ENV_VAR};
use super::consts::DEFAULT_TOKEN_TTL_SECONDS;

/// Process-wide token configuration: the signing secret and the token TTL.
///
/// Built once at startup, before the service takes any work. The secret is
/// never hard-coded; it comes from the environment (or an embedding host
/// that provisions it some other way, via [`Config::new`]) and startup
/// fails fast if it is absent or too weak.
#[derive(Clone)]
pub struct Config {
    jwt_secret: Vec<u8>,
    token_ttl_seconds: i64,
}

impl Config {
    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    /// Build from environment variables.
    ///
    /// - `JWT_SECRET_B64` (required): base64-encoded secret, at least
    ///   32 decoded bytes.
    /// - `TOKEN_TTL_SECONDS` (optional): positive integer, default 24h.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let secret_b64 = req_var(JWT_SECRET_B64_ENV_VAR)?;
        let jwt_secret =
            decode_b64_any(&secret_b64).map_err(|_| ConfigError::Decode(JWT_SECRET_B64_ENV_VAR))?;

        let token_ttl_seconds = match opt_var(TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(TOKEN_TTL_SECONDS_ENV_VAR))?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        Self::new(jwt_secret, token_ttl_seconds)
    }

    /// Build from already-provisioned values, applying the same validation
    /// as [`Config::from_env`].
    pub fn new(jwt_secret: Vec<u8>, token_ttl_seconds: i64) -> Result<Self, ConfigError> {
        // HS256 secrets shorter than the hash output weaken the MAC.
        if jwt_secret.len() < 32 {
            return Err(ConfigError::WrongLen(
                "JWT secret must be at least 32 bytes",
            ));
        }
        // Positive and representable as a chrono Duration; anything larger
        // would panic later instead of failing here.
        if token_ttl_seconds <= 0 || Duration::try_seconds(token_ttl_seconds).is_none() {
            return Err(ConfigError::Invalid(TOKEN_TTL_SECONDS_ENV_VAR));
        }

        Ok(Self {
            jwt_secret,
            token_ttl_seconds,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_strong_secret_and_positive_ttl() {
        let cfg = Config::new(vec![7u8; 32], 600).expect("config should build");
        assert_eq!(cfg.jwt_secret().len(), 32);
        assert_eq!(cfg.token_ttl_seconds(), 600);
    }

    #[test]
    fn new_rejects_short_secret() {
        let result = Config::new(vec![7u8; 16], 600);
        assert!(matches!(result, Err(ConfigError::WrongLen(_))));
    }

    #[test]
    fn new_rejects_nonpositive_ttl() {
        assert!(matches!(
            Config::new(vec![7u8; 32], 0),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::new(vec![7u8; 32], -5),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn new_rejects_ttl_outside_duration_range() {
        // i64::MAX seconds does not fit in a chrono Duration; it must be
        // caught here, not surface as a panic when the service is built.
        let result = Config::new(vec![7u8; 32], i64::MAX);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    // Single test for all env interaction; other tests must not touch the
    // process environment or they would race under the parallel runner.
    #[test]
    fn from_env_reads_secret_and_ttl() {
        // 32 zero bytes base64
        let thirty_two_zero_b64 = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
        std::env::set_var(JWT_SECRET_B64_ENV_VAR, thirty_two_zero_b64);
        std::env::set_var(TOKEN_TTL_SECONDS_ENV_VAR, "120");

        let cfg = Config::from_env().expect("config should build from env");
        assert_eq!(cfg.jwt_secret(), vec![0u8; 32]);
        assert_eq!(cfg.token_ttl_seconds(), 120);

        // TTL falls back to the default when unset.
        std::env::remove_var(TOKEN_TTL_SECONDS_ENV_VAR);
        let cfg = Config::from_env().expect("config should build without TTL");
        assert_eq!(cfg.token_ttl_seconds(), DEFAULT_TOKEN_TTL_SECONDS);

        // Missing secret fails fast.
        std::env::remove_var(JWT_SECRET_B64_ENV_VAR);
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing(JWT_SECRET_B64_ENV_VAR))
        ));
    }
}
