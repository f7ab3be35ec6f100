//! Process wide defaults for locating the account service.
use once_cell::sync::Lazy;

/// The origin of the API, read once from the API_DOMAIN environment
/// variable.
pub static API_DOMAIN: Lazy<String> = Lazy::new(|| {
    std::env::var("API_DOMAIN").unwrap_or_else(|_| "http://localhost:8000".to_string())
});

/// The path prefix every API route lives under, read once from the
/// API_PREFIX environment variable.
pub static API_PREFIX: Lazy<String> =
    Lazy::new(|| std::env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()));

pub const LOGIN_PATH: &str = "account/login";
pub const REGISTER_PATH: &str = "account/register";
pub const RESET_PASSWORD_PATH: &str = "account/reset_password";
pub const VERIFY_EMAIL_PATH: &str = "account/verify_email";
