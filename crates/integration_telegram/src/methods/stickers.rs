//! Sticker sets

use serde_json::Value;

use crate::client::TelegramClient;
use crate::dispatch::{FormPayload, json_payload};
use crate::error::TelegramError;
use crate::types::{InputFile, Params, Upload};
use crate::validation::{self, MAX_STICKER_SET_NAME_CHARS, MAX_STICKER_SET_TITLE_CHARS};

impl TelegramClient {
    /// `getStickerSet`
    pub async fn get_sticker_set(&self, name: &str) -> Result<Value, TelegramError> {
        validation::require_text("name", name)?;

        let payload = json_payload([("name", Value::from(name))], None);
        self.post_json("getStickerSet", Some(payload)).await
    }

    /// `uploadStickerFile`: upload a PNG for later use in a set
    pub async fn upload_sticker_file(
        &self,
        user_id: i64,
        png_sticker: Upload<'_>,
    ) -> Result<Value, TelegramError> {
        let payload = FormPayload::new()
            .field("user_id", user_id)
            .upload("png_sticker", png_sticker);
        self.post_multipart("uploadStickerFile", payload).await
    }

    /// `createNewStickerSet`
    ///
    /// `name` and `title` are limited to 64 characters; the name must end in
    /// `_by_<bot username>`, which the server checks.
    pub async fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: &str,
        title: &str,
        png_sticker: InputFile<'_>,
        emojis: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_bounded_text("name", name, MAX_STICKER_SET_NAME_CHARS)?;
        validation::require_bounded_text("title", title, MAX_STICKER_SET_TITLE_CHARS)?;
        validation::require_input_file("png_sticker", &png_sticker)?;
        validation::require_text("emojis", emojis)?;

        let payload = FormPayload::new()
            .field("user_id", user_id)
            .field("name", name)
            .field("title", title)
            .input_file("png_sticker", png_sticker)
            .field("emojis", emojis)
            .merge(options);
        self.post_multipart("createNewStickerSet", payload).await
    }

    /// `addStickerToSet`
    pub async fn add_sticker_to_set(
        &self,
        user_id: i64,
        name: &str,
        png_sticker: InputFile<'_>,
        emojis: &str,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_text("name", name)?;
        validation::require_input_file("png_sticker", &png_sticker)?;
        validation::require_text("emojis", emojis)?;

        let payload = FormPayload::new()
            .field("user_id", user_id)
            .field("name", name)
            .input_file("png_sticker", png_sticker)
            .field("emojis", emojis)
            .merge(options);
        self.post_multipart("addStickerToSet", payload).await
    }

    /// `setStickerPositionInSet`: zero-based position
    pub async fn set_sticker_position_in_set(
        &self,
        sticker: &str,
        position: i64,
    ) -> Result<Value, TelegramError> {
        validation::require_text("sticker", sticker)?;
        validation::require_non_negative("position", position)?;

        let payload = json_payload(
            [
                ("sticker", Value::from(sticker)),
                ("position", Value::from(position)),
            ],
            None,
        );
        self.post_json("setStickerPositionInSet", Some(payload))
            .await
    }

    /// `deleteStickerFromSet`
    pub async fn delete_sticker_from_set(&self, sticker: &str) -> Result<Value, TelegramError> {
        validation::require_text("sticker", sticker)?;

        let payload = json_payload([("sticker", Value::from(sticker))], None);
        self.post_json("deleteStickerFromSet", Some(payload)).await
    }
}
