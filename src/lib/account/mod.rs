//! Module containing everything pertaining to the account service.
pub mod client;
pub mod request;
pub mod response;

pub use client::{login, AccountClient, AccountService};
pub use request::{AuthPayload, NewPasswordPayload, ResetPasswordPayload};
pub use response::LoginResponse;
