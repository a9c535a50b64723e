//! HTTP adapter for registration, login and the current account.

pub mod dto;
mod handlers;
mod routes;

pub use dto::{AccountResponse, LoginResponse, RegisterResponse};
pub use routes::account_routes;
