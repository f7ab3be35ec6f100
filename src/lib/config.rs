//! Layered configuration for reaching the account service.
use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File, FileFormat};
use reqwest::Url;
use serde::Deserialize;

use crate::{
    constants::{API_DOMAIN, API_PREFIX},
    error::ClientError,
};

/// Where the account service lives and how long to wait for it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_domain: String,
    pub api_prefix: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(API_DOMAIN.as_str(), API_PREFIX.as_str())
    }
}

impl Settings {
    /// Creates a new [`Settings`] without a request timeout.
    pub fn new(api_domain: impl Into<String>, api_prefix: impl Into<String>) -> Self {
        Settings {
            api_domain: api_domain.into(),
            api_prefix: api_prefix.into(),
            timeout_secs: None,
        }
    }

    /// Reads the settings out of an already built [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.clone().try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resolves a relative route against `{api_domain}{api_prefix}`. The
    /// prefix always ends up with exactly one `/` before the route.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let mut base = format!("{}{}", self.api_domain, self.api_prefix);

        if !base.ends_with('/') {
            base.push('/');
        }

        let url = format!("{base}{}", path.trim_start_matches('/'));

        Url::parse(&url).map_err(|_| ClientError::InvalidUrl { url })
    }
}

/// Builds the configuration from the built in defaults, an optional TOML
/// file and finally `WEBVIRT_*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder()
        .set_default("api_domain", API_DOMAIN.as_str())?
        .set_default("api_prefix", API_PREFIX.as_str())?;

    if let Some(path) = path {
        builder = builder.add_source(
            File::from(path)
                .required(false)
                .format(FileFormat::Toml),
        );
    }

    builder
        .add_source(Environment::with_prefix("WEBVIRT"))
        .build()
}
