//! Argument checks run before any request is sent

use std::path::Path;

use crate::error::TelegramError;
use crate::types::{ChatId, InputFile, MessageRef};

/// Maximum length of a chat title, in characters
pub const MAX_CHAT_TITLE_CHARS: usize = 255;

/// Maximum length of a chat description, in characters
pub const MAX_CHAT_DESCRIPTION_CHARS: usize = 255;

/// Maximum length of a sticker set name, in characters
pub const MAX_STICKER_SET_NAME_CHARS: usize = 64;

/// Maximum length of a sticker set title, in characters
pub const MAX_STICKER_SET_TITLE_CHARS: usize = 64;

/// Fail if a required string is empty or whitespace only
pub fn require_text(field: &str, value: &str) -> Result<(), TelegramError> {
    if value.trim().is_empty() {
        return Err(TelegramError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Fail if a required string is missing or longer than `max` characters
pub fn require_bounded_text(field: &str, value: &str, max: usize) -> Result<(), TelegramError> {
    require_text(field, value)?;

    let len = value.chars().count();
    if len > max {
        return Err(TelegramError::validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Fail if a chat id is an empty username
pub fn require_chat_id(field: &str, chat_id: &ChatId) -> Result<(), TelegramError> {
    if chat_id.is_empty() {
        return Err(TelegramError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Fail if a coordinate is NaN or infinite
pub fn require_finite(field: &str, value: f64) -> Result<(), TelegramError> {
    if !value.is_finite() {
        return Err(TelegramError::validation(format!(
            "{field} must be a finite number"
        )));
    }
    Ok(())
}

/// Fail if a position is negative
pub fn require_non_negative(field: &str, value: i64) -> Result<(), TelegramError> {
    if value < 0 {
        return Err(TelegramError::validation(format!(
            "{field} must be a non-negative integer, got {value}"
        )));
    }
    Ok(())
}

/// Fail if an upload path is not an existing regular file
pub fn require_file(path: &Path) -> Result<(), TelegramError> {
    if !path.is_file() {
        return Err(TelegramError::validation(format!(
            "upload file {} does not exist or is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

/// Fail if a remote file reference is empty
pub fn require_input_file(field: &str, file: &InputFile<'_>) -> Result<(), TelegramError> {
    match file {
        InputFile::Remote(id) => require_text(field, id),
        InputFile::Upload(_) => Ok(()),
    }
}

/// Fail if a message reference points nowhere
pub fn require_message_ref(target: &MessageRef) -> Result<(), TelegramError> {
    match target {
        MessageRef::Chat { chat_id, .. } => require_chat_id("chat_id", chat_id),
        MessageRef::Inline(id) => require_text("inline_message_id", id),
    }
}
