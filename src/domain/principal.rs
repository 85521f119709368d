/// Read-only view of an identity a token is issued to or checked against.
///
/// Fetching the principal (user store, password checks) is the caller's
/// concern; the token service only ever reads the identifier.
pub trait Principal {
    /// Stable identifier used as the token's `sub` claim.
    fn username(&self) -> &str;
}

impl Principal for str {
    fn username(&self) -> &str {
        self
    }
}

impl Principal for String {
    fn username(&self) -> &str {
        self
    }
}

impl<P: Principal + ?Sized> Principal for &P {
    fn username(&self) -> &str {
        (**self).username()
    }
}
