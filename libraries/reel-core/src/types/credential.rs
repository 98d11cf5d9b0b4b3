/// Bearer credential handed in by the host application
use std::fmt;

/// Opaque bearer token.
///
/// Token storage lives outside this workspace; callers construct one and pass
/// it explicitly to whatever needs to talk to the playlist service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header
    pub fn token(&self) -> &str {
        &self.0
    }
}

// Never print the token.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
