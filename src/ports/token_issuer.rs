//! Token issuing port used at login.

use crate::domain::foundation::{AuthError, Identity, Timestamp};

/// A freshly signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Issues bearer tokens that a matching `SessionValidator` accepts.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError>;
}
