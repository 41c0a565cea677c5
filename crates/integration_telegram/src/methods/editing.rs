//! Editing and deleting messages

use serde_json::Value;

use crate::client::TelegramClient;
use crate::dispatch::json_payload;
use crate::error::TelegramError;
use crate::types::{ChatId, MessageRef, Params};
use crate::validation;

impl TelegramClient {
    /// `editMessageText`
    pub async fn edit_message_text(
        &self,
        target: &MessageRef,
        text: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_message_ref(target)?;
        validation::require_text("text", text)?;

        let fields = target
            .fields()
            .into_iter()
            .chain([("text", Value::from(text))]);
        self.post_json("editMessageText", Some(json_payload(fields, options)))
            .await
    }

    /// `editMessageCaption`; the new caption goes in `options`
    pub async fn edit_message_caption(
        &self,
        target: &MessageRef,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_message_ref(target)?;

        let payload = json_payload(target.fields(), options);
        self.post_json("editMessageCaption", Some(payload)).await
    }

    /// `editMessageReplyMarkup`; the new `reply_markup` goes in `options`
    pub async fn edit_message_reply_markup(
        &self,
        target: &MessageRef,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_message_ref(target)?;

        let payload = json_payload(target.fields(), options);
        self.post_json("editMessageReplyMarkup", Some(payload))
            .await
    }

    /// `editMessageLiveLocation`: move a live location
    pub async fn edit_message_live_location(
        &self,
        target: &MessageRef,
        latitude: f64,
        longitude: f64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_message_ref(target)?;
        validation::require_finite("latitude", latitude)?;
        validation::require_finite("longitude", longitude)?;

        let fields = target.fields().into_iter().chain([
            ("latitude", Value::from(latitude)),
            ("longitude", Value::from(longitude)),
        ]);
        self.post_json("editMessageLiveLocation", Some(json_payload(fields, options)))
            .await
    }

    /// `stopMessageLiveLocation`
    pub async fn stop_message_live_location(
        &self,
        target: &MessageRef,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_message_ref(target)?;

        let payload = json_payload(target.fields(), options);
        self.post_json("stopMessageLiveLocation", Some(payload))
            .await
    }

    /// `deleteMessage`
    pub async fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("message_id", Value::from(message_id)),
            ],
            None,
        );
        self.post_json("deleteMessage", Some(payload)).await
    }
}
