/// Token issuance and validation service.
///
/// This module provides the `TokenService`, which coordinates:
/// - Creation of signed, time-bounded bearer tokens (compact JWTs)
/// - Signature + structure verification of presented tokens
/// - Claim extraction through caller-supplied selectors
/// - The validity predicate (subject match + not yet expired)
///
/// Security model:
/// 1. Tokens are stateless bearer credentials; nothing is recorded
///    server-side at issuance and there is no revocation.
/// 2. Validity is a pure function of (token, current time, signing key).
/// 3. Signature verification always precedes claim extraction; a token
///    never yields partial claims.
///
/// Errors:
/// - Decode workflows map structural and signature failures to
///   `DecodeError`; expiry is not an error but a boolean outcome of
///   `is_valid`.
/// - Issuance maps an empty subject and signing failures to `IssueError`.
///
/// Concurrency:
/// - No interior mutability: the key, TTL, and clock are fixed at
///   construction, so a single instance (or clones of it) can be shared
///   across threads and request handlers without locking.
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use log::debug;
use serde_json::{Map, Value};

use crate::domain::{Claims, DecodeError, IssueError, Principal, SigningKey, RESERVED_CLAIMS};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::config::Config;

#[derive(Clone)]
/// Issues bearer tokens for a principal and verifies tokens presented back.
///
/// Typical lifecycle:
/// 1. `issue` (or `issue_with_claims`) -> compact token string
/// 2. Client presents the token on later requests
/// 3. Gatekeeping code -> `is_valid(token, principal)`
/// 4. Claim inspection -> `extract_subject` / `extract_claim`
pub struct TokenService {
    key: SigningKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Construct a `TokenService` from validated configuration, using the
    /// system clock.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Construct with an explicit time source. Tests use this to pin and
    /// advance the clock across the expiry boundary.
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            key: SigningKey::from_secret(config.jwt_secret()),
            // Config guarantees the TTL fits in a Duration.
            ttl: Duration::seconds(config.token_ttl_seconds()),
            clock,
        }
    }

    /// Issue a token for `principal` with no application-defined claims.
    pub fn issue<P>(&self, principal: &P) -> Result<String, IssueError>
    where
        P: Principal + ?Sized,
    {
        self.issue_with_claims(principal, Map::new())
    }

    /// Issue a token for `principal`, merging `extra` into the claims set.
    ///
    /// Sets `iat` to now and `exp` to now + TTL. Reserved names (`sub`,
    /// `iat`, `exp`) appearing in `extra` are overwritten by the reserved
    /// computation; callers cannot forge the subject or lifetime through
    /// the extra-claims channel.
    ///
    /// Two calls for the same principal at different instants produce
    /// different tokens (distinct `iat`).
    ///
    /// Errors:
    /// - `IssueError::EmptySubject` if the principal's identifier is empty
    /// - `IssueError::Signing` if the codec rejects the payload
    pub fn issue_with_claims<P>(
        &self,
        principal: &P,
        mut extra: Map<String, Value>,
    ) -> Result<String, IssueError>
    where
        P: Principal + ?Sized,
    {
        let sub = principal.username();
        if sub.trim().is_empty() {
            return Err(IssueError::EmptySubject);
        }

        for name in RESERVED_CLAIMS {
            extra.remove(name);
        }

        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(IssueError::ExpiryOverflow)?;
        let claims = Claims {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            extra,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            self.key.encoding_key(),
        )?;
        Ok(token)
    }

    /// Verify `token` and apply `selector` to its claims.
    ///
    /// Signature and structural verification are preconditions: a
    /// malformed or tampered token fails with `DecodeError` and the
    /// selector never runs. Expiry is NOT checked here; an expired token
    /// still decodes so its claims can be inspected.
    pub fn extract_claim<R, F>(&self, token: &str, selector: F) -> Result<R, DecodeError>
    where
        F: FnOnce(&Claims) -> R,
    {
        let claims = self.decode_claims(token)?;
        Ok(selector(&claims))
    }

    /// Shorthand for extracting the `sub` claim.
    pub fn extract_subject(&self, token: &str) -> Result<String, DecodeError> {
        self.extract_claim(token, |claims| claims.sub.clone())
    }

    /// Shorthand for extracting the `exp` claim as a timestamp.
    ///
    /// An `exp` value outside the representable timestamp range is
    /// `DecodeError::OutOfRangeClaim`, not `Malformed`: the token itself
    /// verified, only the conversion failed. The raw `i64` stays reachable
    /// through `extract_claim`.
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, DecodeError> {
        let exp = self.extract_claim(token, |claims| claims.exp)?;
        DateTime::from_timestamp(exp, 0).ok_or(DecodeError::OutOfRangeClaim("exp"))
    }

    /// Extract an application-defined claim by name.
    ///
    /// Errors with `DecodeError::MissingClaim` when the token is valid but
    /// carries no claim under `name`.
    pub fn extract_extra(&self, token: &str, name: &str) -> Result<Value, DecodeError> {
        self.extract_claim(token, |claims| claims.get(name).cloned())?
            .ok_or_else(|| DecodeError::MissingClaim(name.to_string()))
    }

    /// Whether `token` is a currently-valid credential for `principal`.
    ///
    /// True iff the token decodes under the service key, its subject
    /// equals the principal's identifier, and the current time is strictly
    /// before `exp`. Any decode failure is `false`; callers that need the
    /// failure reason use `extract_claim` directly.
    ///
    /// Not checked: `iat` in the future, issuer, audience, revocation
    /// (none of these are modeled).
    pub fn is_valid<P>(&self, token: &str, principal: &P) -> bool
    where
        P: Principal + ?Sized,
    {
        match self.decode_claims(token) {
            Ok(claims) => claims.sub == principal.username() && !self.is_expired(&claims),
            Err(_) => false,
        }
    }

    fn is_expired(&self, claims: &Claims) -> bool {
        self.clock.now().timestamp() >= claims.exp
    }

    // Verify signature + structure and deserialize the claims payload.
    // Expiry stays out of the codec so it surfaces only through is_valid.
    fn decode_claims(&self, token: &str) -> Result<Claims, DecodeError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        // Audience is not modeled; without this an extra "aud" claim would
        // fail verification.
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data =
            decode::<Claims>(token, self.key.decoding_key(), &validation).map_err(|err| {
                debug!("token decode failed: {err}");
                DecodeError::from(err)
            })?;

        Ok(data.claims)
    }
}
