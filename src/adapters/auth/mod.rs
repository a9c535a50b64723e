//! Authentication adapters.
//!
//! Implementations of the identity ports:
//!
//! - `jwt` - HS256 session tokens (`SessionValidator` + `TokenIssuer`)
//! - `password` - Argon2 password hashing
//! - `mock` - Test validator that doesn't require signed tokens

mod jwt;
mod mock;
mod password;

pub use jwt::{JwtSessions, SessionClaims};
pub use mock::MockSessionValidator;
pub use password::Argon2Hasher;
