use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const READ_SCOPE: &str = "read";
pub const WRITE_SCOPE: &str = "write";

/// Claims of an access token issued by the OAuth2 provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user or client the token was issued to)
    pub sub: String,
    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Space-separated granted scopes
    #[serde(default)]
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl AccessClaims {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|granted| granted == scope)
    }
}

/// Verifies bearer tokens presented to the API.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AccessClaims>;
}
