//! Telegram Bot API client handle
//!
//! Holds the bot token, the API base URL and the HTTP client. The catalog of
//! Bot API methods lives in `crate::methods`, the request paths in
//! `crate::dispatch`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::config::TelegramConfig;
use crate::error::TelegramError;
use crate::validation;

/// Client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    token: SecretString,
    api_base_url: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Configuration` if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        config.validate().map_err(TelegramError::Configuration)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let http = builder
            .build()
            .map_err(|e| TelegramError::config(format!("Failed to create HTTP client: {e}")))?;

        Self::with_http_client(config, http)
    }

    /// Create a client on top of a caller-configured HTTP client
    ///
    /// Timeout and user agent settings in `config` are ignored; the given
    /// client's own settings apply.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Configuration` if the configuration is invalid.
    pub fn with_http_client(config: TelegramConfig, http: Client) -> Result<Self, TelegramError> {
        config.validate().map_err(TelegramError::Configuration)?;

        let Some(token) = config.bot_token else {
            return Err(TelegramError::config("bot_token is required"));
        };

        Ok(Self {
            http,
            token,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL of the Bot API server
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Endpoint of a Bot API method; contains the token, never log it
    pub(crate) fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base_url,
            self.token.expose_secret(),
            method
        )
    }

    /// Download URL for a `file_path` returned by `getFile`
    ///
    /// The URL embeds the bot token.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if `file_path` is empty.
    pub fn file_download_url(&self, file_path: &str) -> Result<String, TelegramError> {
        validation::require_text("file_path", file_path)?;

        Ok(format!(
            "{}/file/bot{}/{}",
            self.api_base_url,
            self.token.expose_secret(),
            file_path.trim_start_matches('/')
        ))
    }

    /// Download a file previously resolved with `getFile`
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty path, `Transport` for a non-200
    /// status and `Request` if the exchange fails.
    #[instrument(skip(self))]
    pub async fn download_file(&self, file_path: &str) -> Result<Bytes, TelegramError> {
        let url = self.file_download_url(file_path)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .map_err(|e| TelegramError::Request(e.without_url()))?;
            return Err(TelegramError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        debug!(size = bytes.len(), "Downloaded file");
        Ok(bytes)
    }
}
