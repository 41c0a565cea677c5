//! Helpers over decoded `getUpdates` results
//!
//! The polling loop itself belongs to the caller:
//!
//! ```no_run
//! use integration_telegram::{Params, TelegramClient, updates};
//!
//! # async fn poll(client: &TelegramClient) -> Result<(), integration_telegram::TelegramError> {
//! let mut offset = 0;
//! loop {
//!     let result = client
//!         .get_updates(Some(Params::new().with("offset", offset).with("timeout", 30)))
//!         .await?;
//!     let batch = result.as_array().cloned().unwrap_or_default();
//!     if batch.is_empty() {
//!         continue;
//!     }
//!
//!     for update in &batch {
//!         if let Some(chat_id) = updates::chat_id_from_message(update) {
//!             client.send_message(chat_id, "pong", None).await?;
//!         }
//!     }
//!     offset = updates::highest_update_id(&batch) + 1;
//! }
//! # }
//! ```

use serde_json::Value;

/// Largest `update_id` in a batch, or 0 for an empty batch
///
/// Entries without an integer `update_id` are skipped.
#[must_use]
pub fn highest_update_id(updates: &[Value]) -> i64 {
    updates
        .iter()
        .filter_map(|update| update.get("update_id").and_then(Value::as_i64))
        .max()
        .unwrap_or(0)
}

/// Whether the update carries an inline query
#[must_use]
pub fn is_inline_query(update: &Value) -> bool {
    inline_query(update).is_some()
}

/// The update's `inline_query` object, if any
#[must_use]
pub fn inline_query(update: &Value) -> Option<&Value> {
    update.get("inline_query").filter(|query| !query.is_null())
}

/// Chat id of an update's message, or of a chat object itself
///
/// Looks at `message.chat.id` first, then `chat.id`.
#[must_use]
pub fn chat_id_from_message(envelope: &Value) -> Option<i64> {
    if let Some(message) = envelope.get("message").filter(|m| !m.is_null()) {
        return chat_id(message);
    }
    chat_id(envelope)
}

fn chat_id(value: &Value) -> Option<i64> {
    value.get("chat")?.get("id")?.as_i64()
}
