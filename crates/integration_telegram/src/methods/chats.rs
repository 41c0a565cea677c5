//! Users, files and chat administration

use serde_json::Value;

use crate::client::TelegramClient;
use crate::dispatch::{FormPayload, json_payload};
use crate::error::TelegramError;
use crate::types::{ChatId, Params, Upload};
use crate::validation::{self, MAX_CHAT_DESCRIPTION_CHARS, MAX_CHAT_TITLE_CHARS};

impl TelegramClient {
    /// `getUserProfilePhotos`
    pub async fn get_user_profile_photos(
        &self,
        user_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let payload = json_payload([("user_id", Value::from(user_id))], options);
        self.post_json("getUserProfilePhotos", Some(payload)).await
    }

    /// `getFile`: resolve a `file_id` to a downloadable `file_path`
    ///
    /// See [`TelegramClient::download_file`] for fetching the content.
    pub async fn get_file(&self, file_id: &str) -> Result<Value, TelegramError> {
        validation::require_text("file_id", file_id)?;

        let payload = json_payload([("file_id", Value::from(file_id))], None);
        self.post_json("getFile", Some(payload)).await
    }

    /// `kickChatMember`; pass `until_date` in `options` for a temporary ban
    pub async fn kick_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.chat_member_call("kickChatMember", chat_id.into(), user_id, options)
            .await
    }

    /// `unbanChatMember`
    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<Value, TelegramError> {
        self.chat_member_call("unbanChatMember", chat_id.into(), user_id, None)
            .await
    }

    /// `restrictChatMember`; permissions go in `options`
    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.chat_member_call("restrictChatMember", chat_id.into(), user_id, options)
            .await
    }

    /// `promoteChatMember`; admin rights go in `options`
    pub async fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        self.chat_member_call("promoteChatMember", chat_id.into(), user_id, options)
            .await
    }

    /// `getChatMember`
    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<Value, TelegramError> {
        self.chat_member_call("getChatMember", chat_id.into(), user_id, None)
            .await
    }

    /// `exportChatInviteLink`
    pub async fn export_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("exportChatInviteLink", chat_id.into()).await
    }

    /// `setChatPhoto`; the photo must be a new upload
    pub async fn set_chat_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: Upload<'_>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = FormPayload::new()
            .field("chat_id", chat_id)
            .upload("photo", photo);
        self.post_multipart("setChatPhoto", payload).await
    }

    /// `deleteChatPhoto`
    pub async fn delete_chat_photo(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("deleteChatPhoto", chat_id.into()).await
    }

    /// `setChatTitle`: at most 255 characters
    pub async fn set_chat_title(
        &self,
        chat_id: impl Into<ChatId>,
        title: &str,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_bounded_text("title", title, MAX_CHAT_TITLE_CHARS)?;

        let payload = json_payload(
            [("chat_id", chat_id.into()), ("title", Value::from(title))],
            None,
        );
        self.post_json("setChatTitle", Some(payload)).await
    }

    /// `setChatDescription`: at most 255 characters
    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: &str,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_bounded_text("description", description, MAX_CHAT_DESCRIPTION_CHARS)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("description", Value::from(description)),
            ],
            None,
        );
        self.post_json("setChatDescription", Some(payload)).await
    }

    /// `pinChatMessage`
    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("message_id", Value::from(message_id)),
            ],
            options,
        );
        self.post_json("pinChatMessage", Some(payload)).await
    }

    /// `unpinChatMessage`
    pub async fn unpin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("unpinChatMessage", chat_id.into()).await
    }

    /// `leaveChat`
    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<Value, TelegramError> {
        self.chat_call("leaveChat", chat_id.into()).await
    }

    /// `getChat`
    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Value, TelegramError> {
        self.chat_call("getChat", chat_id.into()).await
    }

    /// `getChatAdministrators`
    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("getChatAdministrators", chat_id.into()).await
    }

    /// `getChatMembersCount`
    pub async fn get_chat_members_count(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("getChatMembersCount", chat_id.into()).await
    }

    /// `setChatStickerSet`: group sticker set of a supergroup
    pub async fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
        sticker_set_name: &str,
    ) -> Result<Value, TelegramError> {
        let chat_id = chat_id.into();
        validation::require_chat_id("chat_id", &chat_id)?;
        validation::require_text("sticker_set_name", sticker_set_name)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("sticker_set_name", Value::from(sticker_set_name)),
            ],
            None,
        );
        self.post_json("setChatStickerSet", Some(payload)).await
    }

    /// `deleteChatStickerSet`
    pub async fn delete_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Value, TelegramError> {
        self.chat_call("deleteChatStickerSet", chat_id.into()).await
    }

    /// Methods whose only argument is the chat
    async fn chat_call(&self, method: &str, chat_id: ChatId) -> Result<Value, TelegramError> {
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = json_payload([("chat_id", chat_id.into())], None);
        self.post_json(method, Some(payload)).await
    }

    /// Methods addressing one member of a chat
    async fn chat_member_call(
        &self,
        method: &str,
        chat_id: ChatId,
        user_id: i64,
        options: Option<Params>,
    ) -> Result<Value, TelegramError> {
        validation::require_chat_id("chat_id", &chat_id)?;

        let payload = json_payload(
            [
                ("chat_id", chat_id.into()),
                ("user_id", Value::from(user_id)),
            ],
            options,
        );
        self.post_json(method, Some(payload)).await
    }
}
