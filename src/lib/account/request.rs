//! This module declares all types that may be used as request payloads.
use std::fmt;

use serde::{Deserialize, Serialize};

/// The credentials submitted to the login and register routes.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    pub email: String,
    pub password: String,
}

impl AuthPayload {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        AuthPayload {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthPayload")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResetPasswordPayload {
    pub email: String,
}

/// The new password sent along with a reset hash.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewPasswordPayload {
    pub password: String,
    pub password_confirm: String,
}

impl NewPasswordPayload {
    /// Creates a payload whose confirmation matches the password.
    pub fn new(password: impl Into<String>) -> Self {
        let password = password.into();

        NewPasswordPayload {
            password_confirm: password.clone(),
            password,
        }
    }
}

impl fmt::Debug for NewPasswordPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPasswordPayload").finish_non_exhaustive()
    }
}
