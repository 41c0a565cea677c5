//! Sending messages

use serde_json::Value;
use tracing::instrument;

use crate::client::TelegramClient;
use crate::dispatch::{FormPayload, json_payload};
use crate::error::TelegramError;
use crate::types::{ChatAction, ChatId, InputFile, Params};
use crate::validation;

impl TelegramClient {
    /// `sendMessage`: send a text message
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_text("text", text)?;

        let payload = json_payload(
            [("chat_id", chat_id.into()), ("text", Value::from(text))],
            options,
        );
        self.post_json("sendMessage", Some(payload)).await
    }

    /// `forwardMessage`: forward a message from one chat to another
    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        let from_chat_id = from_chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_chat_id("from_chat_id", &from_chat_id)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("from_chat_id", from_chat_id.into()),
                ("message_id", Value::from(message_id)),
            ],
            options,
        );
        self.post_json("forwardMessage", Some(payload)).await
    }

    /// `sendPhoto`
    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendPhoto", "photo", chat_id.into(), photo, options)
            .await
    }

    /// `sendAudio`: audio shown in the music player
    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendAudio", "audio", chat_id.into(), audio, options)
            .await
    }

    /// `sendDocument`: a general file
    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendDocument", "document", chat_id.into(), document, options)
            .await
    }

    /// `sendSticker`: a `.webp` sticker
    pub async fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendSticker", "sticker", chat_id.into(), sticker, options)
            .await
    }

    /// `sendVideo`
    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendVideo", "video", chat_id.into(), video, options)
            .await
    }

    /// `sendVoice`: audio shown as a playable voice message
    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media("sendVoice", "voice", chat_id.into(), voice, options)
            .await
    }

    /// `sendVideoNote`: a rounded square video
    pub async fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.send_media(
            "sendVideoNote",
            "video_note",
            chat_id.into(),
            video_note,
            options,
        )
        .await
    }

    /// Shared body of the file-carrying send methods
    #[instrument(skip(self, chat_id, file, options))]
    async fn send_media(
        &self,
        method: &str,
        field: &str,
        chat_id: ChatId,
        file: InputFile<'_>,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_input_file(field, &file)?;

        let payload = FormPayload::new()
            .field("chat_id", chat_id)
            .input_file(field, file)
            .merge(options);
        self.post_multipart(method, payload).await
    }

    /// `sendLocation`: a point on the map
    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_finite("latitude", latitude)?;
        validation::require_finite("longitude", longitude)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("latitude", Value::from(latitude)),
                ("longitude", Value::from(longitude)),
            ],
            options,
        );
        self.post_json("sendLocation", Some(payload)).await
    }

    /// `sendVenue`: a location with a title and an address
    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_finite("latitude", latitude)?;
        validation::require_finite("longitude", longitude)?;
        validation::require_text("title", title)?;
        validation::require_text("address", address)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("latitude", Value::from(latitude)),
                ("longitude", Value::from(longitude)),
                ("title", Value::from(title)),
                ("address", Value::from(address)),
            ],
            options,
        );
        self.post_json("sendVenue", Some(payload)).await
    }

    /// `sendContact`: a phone contact
    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: &str,
        first_name: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_text("phone_number", phone_number)?;
        validation::require_text("first_name", first_name)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("phone_number", Value::from(phone_number)),
                ("first_name", Value::from(first_name)),
            ],
            options,
        );
        self.post_json("sendContact", Some(payload)).await
    }

    /// `sendChatAction`: show a status such as "typing…" for up to 5 seconds
    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("action", Value::from(action.as_str())),
            ],
            None,
        );
        self.post_json("sendChatAction", Some(payload)).await
    }
}
