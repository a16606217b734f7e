use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::AuthenticationService;
use cloudweave_contracts::data::AuthClient;
use cloudweave_core::models::auth::{
    AuthConfig, AuthorizationUrlParams, TokenClaims, TokenSet, UserInfo,
};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockAuthentication {
    world: Arc<World>,
}

impl MockAuthentication {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    fn mint(&self, sub: &str, scope: &str, role_claim: Vec<String>) -> TokenClaims {
        let now = jiff::Timestamp::now().as_second();
        TokenClaims {
            sub: sub.to_string(),
            iss: "mock://issuer".to_string(),
            aud: "mock-client".to_string(),
            exp: now + 3600,
            iat: now,
            email: None,
            name: None,
            scope: Some(scope.to_string()),
            roles: role_claim,
        }
    }
}

#[async_trait]
impl AuthenticationService for MockAuthentication {
    async fn configure(&self, config: AuthConfig) -> CloudResult<()> {
        self.world.latency.apply().await;
        *self.world.auth_config.lock().await = Some(config);
        Ok(())
    }

    async fn get_configuration(&self) -> CloudResult<AuthConfig> {
        self.world.latency.apply().await;
        self.world
            .auth_config
            .lock()
            .await
            .clone()
            .ok_or_else(|| CloudError::not_found("auth_config", "default"))
    }

    fn get_authorization_url(&self, params: AuthorizationUrlParams) -> String {
        let client_id = self
            .world
            .auth_config
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|c| c.client_id.clone()))
            .unwrap_or_else(|| "unconfigured".to_string());
        format!(
            "mock://authorize?client_id={client_id}&response_type=code&redirect_uri={}&scope={}&state={}",
            params.redirect_uri,
            params.scopes.join(" "),
            params.state
        )
    }

    async fn exchange_code_for_tokens(&self, code: &str, _redirect_uri: &str) -> CloudResult<TokenSet> {
        self.world.latency.apply().await;
        if self.world.auth_config.lock().await.is_none() {
            return Err(CloudError::authentication("authentication provider is not configured"));
        }
        let sub = format!("user-{code}");
        let claims = self.mint(&sub, "openid email profile", vec![]);
        let access_token = self.world.ids.next("access_token").await;
        let id_token = self.world.ids.next("id_token").await;
        let refresh_token = self.world.ids.next("refresh_token").await;
        let mut tokens = self.world.issued_tokens.lock().await;
        tokens.insert(access_token.clone(), claims.clone());
        tokens.insert(id_token.clone(), claims.clone());
        tokens.insert(refresh_token.clone(), claims);
        Ok(TokenSet {
            access_token,
            id_token: Some(id_token),
            refresh_token: Some(refresh_token),
            expires_in: 3600,
            token_type: "Bearer".to_string(),
            scope: "openid email profile".to_string(),
        })
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> CloudResult<TokenSet> {
        self.world.latency.apply().await;
        let claims = self
            .world
            .issued_tokens
            .lock()
            .await
            .get(refresh_token)
            .cloned()
            .ok_or_else(|| CloudError::authentication("unknown or expired refresh token"))?;
        let access_token = self.world.ids.next("access_token").await;
        let id_token = self.world.ids.next("id_token").await;
        let mut tokens = self.world.issued_tokens.lock().await;
        tokens.insert(access_token.clone(), claims.clone());
        tokens.insert(id_token.clone(), claims.clone());
        Ok(TokenSet {
            access_token,
            id_token: Some(id_token),
            refresh_token: Some(refresh_token.to_string()),
            expires_in: 3600,
            token_type: "Bearer".to_string(),
            scope: claims.scope.unwrap_or_default(),
        })
    }

    async fn validate_token(&self, access_token: &str) -> CloudResult<TokenClaims> {
        AuthClient::validate_token(self, access_token).await
    }

    async fn verify_id_token(&self, id_token: &str) -> CloudResult<TokenClaims> {
        AuthClient::validate_token(self, id_token).await
    }

    async fn get_user_info(&self, access_token: &str) -> CloudResult<UserInfo> {
        AuthClient::get_user_info(self, access_token).await
    }

    async fn revoke_token(&self, token: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world.issued_tokens.lock().await.remove(token);
        Ok(())
    }

    async fn create_user(&self, email: &str, _temporary_password: Option<String>) -> CloudResult<String> {
        self.world.latency.apply().await;
        let sub = self.world.ids.next("user").await;
        self.world.users.lock().await.insert(sub.clone(), HashSet::new());
        tracing::debug!(sub, email, "user created");
        Ok(sub)
    }

    async fn delete_user(&self, sub: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .users
            .lock()
            .await
            .remove(sub)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("user", sub))
    }

    async fn assign_role(&self, sub: &str, role: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut users = self.world.users.lock().await;
        let roles = users.get_mut(sub).ok_or_else(|| CloudError::not_found("user", sub))?;
        roles.insert(role.to_string());
        Ok(())
    }

    async fn revoke_role(&self, sub: &str, role: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut users = self.world.users.lock().await;
        let roles = users.get_mut(sub).ok_or_else(|| CloudError::not_found("user", sub))?;
        roles.remove(role);
        Ok(())
    }
}

#[async_trait]
impl AuthClient for MockAuthentication {
    async fn validate_token(&self, access_token: &str) -> CloudResult<TokenClaims> {
        self.world.latency.apply().await;
        let claims = self
            .world
            .issued_tokens
            .lock()
            .await
            .get(access_token)
            .cloned()
            .ok_or_else(|| CloudError::authentication("invalid or tampered token"))?;
        if claims.exp < jiff::Timestamp::now().as_second() {
            return Err(CloudError::authentication("token has expired"));
        }
        Ok(claims)
    }

    async fn get_user_info(&self, access_token: &str) -> CloudResult<UserInfo> {
        let claims = self.validate_token(access_token).await?;
        Ok(UserInfo {
            sub: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }
}
