//! Configuration for the Telegram client

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Telegram Bot API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by @BotFather (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Bot API base URL (default: <https://api.telegram.org>)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Total request timeout in seconds (default: transport default, no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds (default: transport default)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// Custom User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_api_base_url() -> String {
    TelegramConfig::DEFAULT_API_BASE_URL.to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base_url: default_api_base_url(),
            timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: None,
        }
    }
}

impl TelegramConfig {
    /// Public Bot API endpoint
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.telegram.org";

    /// Prefix for environment overrides (e.g. `TELEGRAM_BOT_TOKEN`)
    pub const ENV_PREFIX: &'static str = "TELEGRAM";

    /// Create a config with the given bot token and default settings
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: Some(SecretString::from(bot_token.into())),
            ..Default::default()
        }
    }

    /// Point the client at another Bot API server
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the total request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Load configuration from an optional `telegram.toml` and `TELEGRAM_*`
    /// environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("telegram").required(false))
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Load configuration from the given file, still honouring environment
    /// overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match &self.bot_token {
            Some(token) if !token.expose_secret().trim().is_empty() => {},
            _ => return Err("bot_token is required".to_string()),
        }

        if self.api_base_url.trim().is_empty() {
            return Err("api_base_url must not be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == Some(0) {
            return Err("connect_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
