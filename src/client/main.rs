//! This client logs into a WebVirtCloud account service and prints the
//! issued token. The service location and credentials come from the local
//! configuration file, overridable through `WEBVIRT_*` environment
//! variables.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use webvirt_auth::{config::load_config, AccountClient, AccountService, AuthPayload, Settings};

/// Finds the location for this app's local configuration.
fn get_config_base_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        Ok(PathBuf::from(path))
    } else if let Some(home) = dirs::home_dir() {
        Ok(home.join(".config"))
    } else {
        Err(anyhow!("failed to find config file path"))
    }
}

/// Reads the login credentials. `WEBVIRT_PASSWORD` lands on the same
/// `password` key as the config file entry and takes precedence over it.
fn get_credentials(config: &Config) -> anyhow::Result<AuthPayload> {
    let email = config
        .get_string("email")
        .context("property 'email' not found in config file")?;
    let password = config
        .get_string("password")
        .context("no password in config file or WEBVIRT_PASSWORD")?;

    Ok(AuthPayload::new(email, password))
}

async fn run(config_file_path: &Path) -> anyhow::Result<String> {
    let config = load_config(Some(config_file_path)).context("failed to load config file")?;
    let settings = Settings::from_config(&config).context("invalid account service settings")?;
    let payload = get_credentials(&config)?;

    debug!("api domain: {:?}", settings.api_domain);
    debug!("api prefix: {:?}", settings.api_prefix);

    let client = AccountClient::new(settings).context("failed to build http client")?;
    let res = client
        .login(&payload)
        .await
        .context("request for auth token failed")?;

    Ok(res.token)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("login=debug,webvirt_auth=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set global default")?;

    let config_file_path = get_config_base_path()?
        .join("webvirt")
        .join("config.toml");

    debug!("config file path: {:?}", config_file_path);

    let token = run(&config_file_path).await?;

    println!("{token}");

    Ok(())
}
