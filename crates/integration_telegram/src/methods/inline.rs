//! Answering callback and inline queries

use serde_json::Value;

use crate::client::TelegramClient;
use crate::dispatch::json_payload;
use crate::error::TelegramError;
use crate::types::Params;
use crate::validation;

impl TelegramClient {
    /// `answerCallbackQuery`: acknowledge an inline keyboard button press
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_text("callback_query_id", callback_query_id)?;

        let payload = json_payload(
            [("callback_query_id", Value::from(callback_query_id))],
            options,
        );
        self.post_json("answerCallbackQuery", Some(payload)).await
    }

    /// `answerInlineQuery`
    ///
    /// Telegram accepts at most 50 results per answer; the count is left to
    /// the server to enforce.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: Vec<Value>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_text("inline_query_id", inline_query_id)?;

        let payload = json_payload(
            [
                ("inline_query_id", Value::from(inline_query_id)),
                ("results", Value::Array(results)),
            ],
            options,
        );
        self.post_json("answerInlineQuery", Some(payload)).await
    }
}
