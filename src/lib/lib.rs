//! Client for the WebVirtCloud account service.
pub mod account;
pub mod config;
pub mod constants;
pub mod error;

pub use account::{AccountClient, AccountService, AuthPayload, LoginResponse};
pub use crate::config::Settings;
pub use error::ClientError;
