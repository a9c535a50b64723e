//! Account command and query handlers.

mod get_current_account;
mod login;
mod register_account;

pub use get_current_account::{GetCurrentAccountHandler, GetCurrentAccountQuery};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register_account::{RegisterAccountCommand, RegisterAccountHandler};
