use async_trait::async_trait;
use cloudweave_core::models::auth::{AuthConfig, AuthorizationUrlParams, TokenClaims, TokenSet, UserInfo};
use cloudweave_core::CloudResult;

/// Identity-provider configuration plus the OAuth2/OIDC authorization-code
/// flow (spec §4.6). Pure claim checks (`hasScope`/`hasRole`) and the
/// per-request verify path live on [`crate::data::AuthClient`]; this trait
/// owns the full flow because exchanging a code and managing users are
/// administrative, not per-request, operations.
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    async fn configure(&self, config: AuthConfig) -> CloudResult<()>;
    async fn get_configuration(&self) -> CloudResult<AuthConfig>;

    fn get_authorization_url(&self, params: AuthorizationUrlParams) -> String;
    async fn exchange_code_for_tokens(&self, code: &str, redirect_uri: &str) -> CloudResult<TokenSet>;
    async fn refresh_access_token(&self, refresh_token: &str) -> CloudResult<TokenSet>;
    /// Verifies an access token's signature, issuer, audience and expiry.
    async fn validate_token(&self, access_token: &str) -> CloudResult<TokenClaims>;
    /// Verifies an ID token the same way `validate_token` verifies an
    /// access token — kept separate since the two are issued for
    /// different audiences.
    async fn verify_id_token(&self, id_token: &str) -> CloudResult<TokenClaims>;
    async fn get_user_info(&self, access_token: &str) -> CloudResult<UserInfo>;
    async fn revoke_token(&self, token: &str) -> CloudResult<()>;

    async fn create_user(&self, email: &str, temporary_password: Option<String>) -> CloudResult<String>;
    async fn delete_user(&self, sub: &str) -> CloudResult<()>;
    async fn assign_role(&self, sub: &str, role: &str) -> CloudResult<()>;
    async fn revoke_role(&self, sub: &str, role: &str) -> CloudResult<()>;
}
