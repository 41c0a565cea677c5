//! Bot identity, polling and webhook management

use serde_json::Value;

use crate::client::TelegramClient;
use crate::dispatch::json_payload;
use crate::error::TelegramError;
use crate::types::Params;
use crate::validation;

impl TelegramClient {
    /// `getMe`: basic information about the bot
    pub async fn get_me(&self) -> Result<Value, TelegramError> {
        self.post_json("getMe", None).await
    }

    /// `getUpdates`: long-poll for incoming updates
    ///
    /// The options (`offset`, `limit`, `timeout`, `allowed_updates`) form the
    /// whole request body. Pass `offset = highest_update_id + 1` to
    /// acknowledge earlier updates.
    pub async fn get_updates(&self, options: Option<Params>) -> Result<Value, TelegramError> {
        self.post_json("getUpdates", options.map(Params::into_inner))
            .await
    }

    /// `setWebhook`: deliver updates to an HTTPS URL instead of polling
    pub async fn set_webhook(
        &self,
        url: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_text("url", url)?;

        let payload = json_payload([("url", Value::from(url))], options);
        self.post_json("setWebhook", Some(payload)).await
    }

    /// `deleteWebhook`: switch back to `getUpdates`
    pub async fn delete_webhook(&self) -> Result<Value, TelegramError> {
        self.post_json("deleteWebhook", None).await
    }

    /// `getWebhookInfo`: current webhook status
    pub async fn get_webhook_info(&self) -> Result<Value, TelegramError> {
        self.post_json("getWebhookInfo", None).await
    }
}
