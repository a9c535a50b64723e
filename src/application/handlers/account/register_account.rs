//! RegisterAccountHandler - Command handler for creating an account.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::ports::{AccountStore, PasswordHasher};

/// Command to register a new account.
#[derive(Clone)]
pub struct RegisterAccountCommand {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterAccountCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAccountCommand")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Handler for account registration.
///
/// The new account starts with no entitlement; uniqueness of the email is
/// enforced by the store.
pub struct RegisterAccountHandler {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterAccountHandler {
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    #[tracing::instrument(name = "register_account", skip_all)]
    pub async fn handle(&self, cmd: RegisterAccountCommand) -> Result<Account, AccountError> {
        if cmd.password.is_empty() {
            return Err(AccountError::validation("password", "Password is required"));
        }

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;
        let account = Account::register(cmd.email, cmd.full_name, password_hash)?;

        self.store.insert(&account).await?;

        tracing::info!(account_id = %account.id, "Account registered");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::Argon2Hasher;
    use crate::adapters::memory::InMemoryAccountStore;
    use crate::domain::account::EntitlementStatus;

    fn handler() -> (Arc<InMemoryAccountStore>, RegisterAccountHandler) {
        let store = Arc::new(InMemoryAccountStore::new());
        let handler = RegisterAccountHandler::new(store.clone(), Arc::new(Argon2Hasher::new()));
        (store, handler)
    }

    fn command(email: &str) -> RegisterAccountCommand {
        RegisterAccountCommand {
            full_name: "Ada Lovelace".into(),
            email: email.into(),
            password: "correct horse".into(),
        }
    }

    #[tokio::test]
    async fn registers_account_with_hashed_password() {
        let (store, handler) = handler();

        let account = handler.handle(command("a@x.com")).await.unwrap();

        assert_ne!(account.password_hash, "correct horse");
        assert_eq!(account.entitlement.status, EntitlementStatus::None);
        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (_store, handler) = handler();
        handler.handle(command("a@x.com")).await.unwrap();

        let err = handler.handle(command("a@x.com")).await.unwrap_err();

        assert_eq!(err, AccountError::email_taken("a@x.com"));
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let (store, handler) = handler();

        let mut no_password = command("a@x.com");
        no_password.password.clear();
        let mut no_name = command("b@x.com");
        no_name.full_name = " ".into();

        assert!(matches!(
            handler.handle(no_password).await,
            Err(AccountError::ValidationFailed { .. })
        ));
        assert!(matches!(
            handler.handle(no_name).await,
            Err(AccountError::ValidationFailed { .. })
        ));
        assert!(matches!(
            handler.handle(command("")).await,
            Err(AccountError::ValidationFailed { .. })
        ));
        assert!(store.is_empty().await);
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", command("a@x.com"));
        assert!(!debug.contains("correct horse"));
    }
}
