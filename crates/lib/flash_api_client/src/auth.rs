// @zen-component: AUTH-Gateway
//
//! Registration and token endpoints, plus the sign-in/sign-up flows that
//! hand the issued token to the credential store.

use flash_core::models::auth::Identity;
use flash_core::session::CredentialStore;
use tracing::info;

use crate::client::RequestClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, RegisteredUser, TokenResponse};

/// Client for `/register` and `/token`.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: RequestClient,
}

impl AuthGateway {
    pub fn new(client: RequestClient) -> Self {
        Self { client }
    }

    /// `POST /register`: create a user account.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<RegisteredUser> {
        self.client
            .post_json("/register", &Credentials { username, password })
            .await
    }

    /// `POST /token`: exchange username + password for an access token.
    pub async fn token(&self, username: &str, password: &str) -> ApiResult<TokenResponse> {
        self.client
            .post_form("/token", &Credentials { username, password })
            .await
    }

    /// Request a token and adopt it in `store`.
    pub async fn sign_in(
        &self,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> ApiResult<Identity> {
        require_fields(username, password)?;

        let token = self.token(username, password).await?;
        store.login(token.access_token);

        // The store discards tokens it cannot decode.
        let identity = store.identity().ok_or(ApiError::MalformedCredential)?;
        info!(username = %identity.username, "signed in");
        Ok(identity)
    }

    /// Register a new account, then sign in with it.
    pub async fn sign_up(
        &self,
        store: &CredentialStore,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> ApiResult<Identity> {
        require_fields(username, password)?;
        if password != confirm_password {
            return Err(ApiError::Validation("Passwords do not match".into()));
        }

        let user = self.register(username, password).await?;
        info!(id = user.id, username = %user.username, "registered");
        self.sign_in(store, username, password).await
    }
}

fn require_fields(username: &str, password: &str) -> ApiResult<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }
    Ok(())
}
