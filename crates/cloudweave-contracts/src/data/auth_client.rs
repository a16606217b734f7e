use async_trait::async_trait;
use cloudweave_core::models::auth::{TokenClaims, UserInfo};
use cloudweave_core::CloudResult;

/// Per-request token verification (spec §4.7). The authorization-code flow
/// itself (exchange/refresh/revoke) lives on
/// [`crate::control::AuthenticationService`] — this is the narrow surface
/// a request handler needs on every call.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn validate_token(&self, access_token: &str) -> CloudResult<TokenClaims>;
    async fn get_user_info(&self, access_token: &str) -> CloudResult<UserInfo>;

    /// True iff `scope` appears in the claims' space-separated `scope`.
    fn has_scope(&self, claims: &TokenClaims, scope: &str) -> bool {
        claims.has_scope(scope)
    }
    /// True iff `role` appears in the provider-configured role claim
    /// (default `roles`).
    fn has_role(&self, claims: &TokenClaims, role: &str) -> bool {
        claims.has_role(role)
    }
}
