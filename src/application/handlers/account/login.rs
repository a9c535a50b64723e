//! LoginHandler - Exchanges email and password for a bearer token.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::Identity;
use crate::ports::{AccountStore, IssuedToken, PasswordHasher, TokenIssuer};

#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub account: Account,
}

/// Unknown email and wrong password both yield `InvalidCredentials`.
pub struct LoginHandler {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    #[tracing::instrument(name = "login", skip_all)]
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AccountError> {
        let email = cmd.email.trim();
        if email.is_empty() {
            return Err(AccountError::validation("email", "Email is required"));
        }
        if cmd.password.is_empty() {
            return Err(AccountError::validation("password", "Password is required"));
        }

        let Some(account) = self.store.find_by_email(email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(&cmd.password, &account.password_hash)
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;
        if !matches {
            tracing::debug!(account_id = %account.id, "Login attempt with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let token = self
            .issuer
            .issue(&Identity::new(account.id, account.email.clone()))
            .map_err(|e| AccountError::configuration(e.to_string()))?;

        tracing::info!(account_id = %account.id, "Login succeeded");
        Ok(LoginResult { token, account })
    }
}
