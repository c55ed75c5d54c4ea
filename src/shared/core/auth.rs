// Read-only authentication capability.
//
// Handlers never read a bearer token from ambient state; callers build an
// `AuthContext` at the edge (HTTP header, GraphQL request data) and pass it
// down explicitly to whatever needs to talk to the journal API.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into().trim().to_string(),
        }
    }

    /// Extracts the token from an `Authorization` header value.
    pub fn from_authorization_header(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let context = Self::bearer(token);
        context.is_present().then_some(context)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_present(&self) -> bool {
        !self.token.is_empty()
    }
}

// Keep tokens out of logs.
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &if self.is_present() { "***" } else { "" })
            .finish()
    }
}
