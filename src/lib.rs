//! Stateless issuance and validation of signed bearer tokens (compact JWTs).
//!
//! The crate exposes a single service, [`TokenService`], which owns the
//! process-wide HMAC signing key and a token TTL. Tokens are fully
//! self-describing: validity is a pure function of the token string, the
//! key, and the current time. Nothing is stored server-side.
//!
//! User lookup, password checks, and transport (headers, cookies) belong to
//! the embedding application; this crate only needs a [`Principal`] view of
//! whoever a token is issued to or checked against.

pub mod domain;
pub mod services;
pub mod utils;

pub use domain::{Claims, DecodeError, IssueError, Principal, SigningKey};
pub use services::TokenService;
pub use utils::config::Config;
