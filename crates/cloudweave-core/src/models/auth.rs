use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub token_type: String,
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub scope: Option<String>,
    /// Provider-configured role claim (default `roles`), used by
    /// `AuthClient::has_role`.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl TokenClaims {
    /// True iff `scope` appears in the space-separated `scope` claim.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().any(|s| s == scope))
            .unwrap_or(false)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Configuration for the OAuth2/OIDC authorization-code flow, supplied to
/// `AuthenticationService::configure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub issuer: String,
    pub role_claim: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationUrlParams {
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> TokenClaims {
        TokenClaims {
            sub: "user-1".into(),
            iss: "https://issuer.example".into(),
            aud: "client-1".into(),
            exp: 0,
            iat: 0,
            email: None,
            name: None,
            scope: Some("openid email profile".into()),
            roles: vec!["admin".into()],
        }
    }

    #[test]
    fn has_scope_checks_space_separated_list() {
        let claims = claims();
        assert!(claims.has_scope("email"));
        assert!(!claims.has_scope("write"));
    }

    #[test]
    fn has_role_checks_role_list() {
        let claims = claims();
        assert!(claims.has_role("admin"));
        assert!(!claims.has_role("superadmin"));
    }
}
