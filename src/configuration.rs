use std::{env, time};

use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::webhook_client::WebhookClient;

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub webhook: WebhookSettings,
}

impl Settings {
    /// Get settings from configuration files
    pub fn get_config() -> Result<Self, ConfigError> {
        let path = env::current_dir().map_err(|e| {
            ConfigError::Message(format!("Failed to determine the current directory: {e}"))
        })?;
        let config_dir = path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;
        let env_file = format!("{}.yaml", env.as_str());

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(env_file)).required(true))
            // Environment variables (e.g., `CONTACT_RELAY__WEBHOOK__URL=https://hooks.slack.com/...`
            // would set Settings.webhook.url)
            .add_source(Environment::with_prefix("CONTACT_RELAY").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub app_host: String,
    pub app_port: u16,
}

/// Chat webhook settings
#[derive(Clone, serde::Deserialize)]
pub struct WebhookSettings {
    /// Incoming webhook URL, the path embeds the channel credential
    pub url: SecretString,
    pub timeout_millis: u64,
}

impl WebhookSettings {
    /// Build the webhook client
    pub fn client(&self) -> anyhow::Result<WebhookClient> {
        let url = self.url()?;
        Ok(WebhookClient::new(url, self.timeout())?)
    }

    /// Parse webhook URL
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.url.expose_secret())
    }

    /// Get configured timeout
    pub const fn timeout(&self) -> time::Duration {
        time::Duration::from_millis(self.timeout_millis)
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prd",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
