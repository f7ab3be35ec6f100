//! Requests against the account routes of the API.
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    account::{
        request::{AuthPayload, NewPasswordPayload, ResetPasswordPayload},
        response::LoginResponse,
    },
    config::Settings,
    constants::{LOGIN_PATH, REGISTER_PATH, RESET_PASSWORD_PATH, VERIFY_EMAIL_PATH},
    error::ClientError,
};

/// Everything the account service offers before a user holds a token.
#[async_trait]
pub trait AccountService {
    /// Exchanges credentials for an authentication token.
    async fn login(&self, payload: &AuthPayload) -> Result<LoginResponse, ClientError>;

    /// Creates an account and returns its first token.
    async fn register(&self, payload: &AuthPayload) -> Result<LoginResponse, ClientError>;

    /// Asks the service to mail a password reset link.
    async fn reset_password(&self, payload: &ResetPasswordPayload) -> Result<(), ClientError>;

    /// Sets a new password using the hash from a reset link.
    async fn reset_password_confirm(
        &self,
        hash: &str,
        payload: &NewPasswordPayload,
    ) -> Result<(), ClientError>;

    /// Confirms an e-mail address using the hash from a verification link.
    async fn verify_email(&self, hash: &str) -> Result<(), ClientError>;
}

/// An HTTP client bound to one account service.
#[derive(Clone, Debug)]
pub struct AccountClient {
    http: reqwest::Client,
    settings: Settings,
}

impl AccountClient {
    /// Creates a new [`AccountClient`], applying the configured timeout to
    /// every request.
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_http_client(builder.build()?, settings))
    }

    /// Creates a new [`AccountClient`] sharing an existing connection pool.
    pub fn with_http_client(http: reqwest::Client, settings: Settings) -> Self {
        AccountClient { http, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Starts a POST to a route relative to the API prefix.
    fn post(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.settings.endpoint(path)?;

        debug!("POST {}", url);

        Ok(self.http.post(url))
    }
}

#[async_trait]
impl AccountService for AccountClient {
    #[instrument(skip(self, payload))]
    async fn login(&self, payload: &AuthPayload) -> Result<LoginResponse, ClientError> {
        debug!("logging in user {:?}", payload.email);

        let res = send_json::<LoginResponse>(self.post(LOGIN_PATH)?.json(payload)).await?;

        debug!("received a token for user {:?}", payload.email);

        Ok(res)
    }

    #[instrument(skip(self, payload))]
    async fn register(&self, payload: &AuthPayload) -> Result<LoginResponse, ClientError> {
        debug!("registering user {:?}", payload.email);

        send_json(self.post(REGISTER_PATH)?.json(payload)).await
    }

    #[instrument(skip(self, payload))]
    async fn reset_password(&self, payload: &ResetPasswordPayload) -> Result<(), ClientError> {
        debug!("requesting a password reset for {:?}", payload.email);

        send(self.post(RESET_PASSWORD_PATH)?.json(payload)).await
    }

    #[instrument(skip(self, payload))]
    async fn reset_password_confirm(
        &self,
        hash: &str,
        payload: &NewPasswordPayload,
    ) -> Result<(), ClientError> {
        let path = format!("{RESET_PASSWORD_PATH}/{}", check_hash(hash)?);

        send(self.post(&path)?.json(payload)).await
    }

    #[instrument(skip(self))]
    async fn verify_email(&self, hash: &str) -> Result<(), ClientError> {
        let path = format!("{VERIFY_EMAIL_PATH}/{}", check_hash(hash)?);

        send(self.post(&path)?).await
    }
}

/// Logs in with a client built from the default [`Settings`].
pub async fn login(payload: &AuthPayload) -> Result<LoginResponse, ClientError> {
    AccountClient::new(Settings::default())?.login(payload).await
}

/// Sends the request and fails on any non-success status. The response body
/// of a failed request is kept for the caller.
async fn send_checked(request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
    let res = request.send().await?;
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_else(|err| {
        debug!("failed to read the rejected response body: {}", err);
        String::new()
    });

    warn!("account service rejected the request with {}", status);

    Err(ClientError::Status { status, body })
}

async fn send(request: RequestBuilder) -> Result<(), ClientError> {
    send_checked(request).await?;

    Ok(())
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let body = send_checked(request).await?.bytes().await?;

    serde_json::from_slice(&body).map_err(|err| {
        warn!("account service sent an unexpected body: {}", err);
        ClientError::Decode(err)
    })
}

/// Route hashes are a single path segment of ASCII word characters, a
/// stricter set than the Unicode aware `\w` the service routes on.
fn check_hash(hash: &str) -> Result<&str, ClientError> {
    if !hash.is_empty() && hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(hash)
    } else {
        Err(ClientError::InvalidHash(hash.to_owned()))
    }
}
