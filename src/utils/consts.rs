pub mod env {
    pub const JWT_SECRET_B64_ENV_VAR: &str = "JWT_SECRET_B64";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
}

/// 24 hours. Used when `TOKEN_TTL_SECONDS` is not set.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;
