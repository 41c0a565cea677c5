//! Value types shared by the dispatch paths and the method catalog

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::io::AsyncRead;

use crate::error::TelegramError;
use crate::validation;

// ============================================================================
// Identifiers
// ============================================================================

/// Target chat: a numeric id or a `@channelusername`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat identifier
    Id(i64),
    /// Public username of a channel or supergroup, including the `@`
    Username(String),
}

impl ChatId {
    /// An empty username is treated as a missing chat id
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Id(_) => false,
            Self::Username(name) => name.trim().is_empty(),
        }
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<ChatId> for Value {
    fn from(chat_id: ChatId) -> Self {
        match chat_id {
            ChatId::Id(id) => Self::from(id),
            ChatId::Username(name) => Self::String(name),
        }
    }
}

/// The message an edit operation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRef {
    /// A message sent by the bot into a chat
    Chat {
        /// Chat the message lives in
        chat_id: ChatId,
        /// Identifier of the message
        message_id: i64,
    },
    /// A message sent via the bot in inline mode
    Inline(String),
}

impl MessageRef {
    /// Reference a regular chat message
    #[must_use]
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    /// Reference an inline message
    #[must_use]
    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline(inline_message_id.into())
    }

    /// Wire fields identifying the message
    pub(crate) fn fields(&self) -> Vec<(&'static str, Value)> {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => vec![
                ("chat_id", chat_id.clone().into()),
                ("message_id", Value::from(*message_id)),
            ],
            Self::Inline(id) => vec![("inline_message_id", Value::String(id.clone()))],
        }
    }
}

/// Actions accepted by `sendChatAction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl ChatAction {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Optional parameters
// ============================================================================

/// Optional fields for a call, keyed by their wire names
///
/// Merged on top of the required fields; a key present here replaces the
/// required field of the same name.
///
/// ```
/// use integration_telegram::Params;
///
/// let options = Params::new()
///     .with("parse_mode", "HTML")
///     .with("disable_notification", true);
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty set of options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consume into the underlying JSON object
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// Where the bytes of an upload come from
pub enum UploadSource<'a> {
    /// A local file; opened and released by the client
    Path(PathBuf),
    /// A stream owned by the caller; read to the end, never closed
    Reader {
        /// The borrowed stream
        reader: Box<dyn AsyncRead + Send + Unpin + 'a>,
        /// Whether the stream carries text rather than raw bytes
        text: bool,
    },
    /// In-memory binary content
    Bytes(Vec<u8>),
    /// In-memory text content
    Text(String),
}

impl UploadSource<'_> {
    /// Whether the content is sent as a text part
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Reader { text: true, .. })
    }
}

impl fmt::Debug for UploadSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader { text, .. } => f
                .debug_struct("Reader")
                .field("text", text)
                .finish_non_exhaustive(),
            Self::Bytes(bytes) => write!(f, "Bytes([{} bytes])", bytes.len()),
            Self::Text(text) => write!(f, "Text([{} chars])", text.chars().count()),
        }
    }
}

/// A file to upload: display name plus content source
#[derive(Debug)]
pub struct Upload<'a> {
    name: String,
    source: UploadSource<'a>,
}

impl<'a> Upload<'a> {
    /// Create an upload from a name and a source
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty or a path
    /// source is not an existing regular file.
    pub fn new(name: impl Into<String>, source: UploadSource<'a>) -> Result<Self, TelegramError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TelegramError::validation("upload name must not be empty"));
        }
        if let UploadSource::Path(path) = &source {
            validation::require_file(path)?;
        }
        Ok(Self { name, source })
    }

    /// Upload a local file, named after its file name
    ///
    /// The file is only checked for existence here; it is opened and read
    /// when the request is built.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the path has no file name or
    /// does not point to a regular file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TelegramError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                TelegramError::validation(format!(
                    "cannot derive an upload name from {}",
                    path.display()
                ))
            })?;
        Self::new(name, UploadSource::Path(path.to_path_buf()))
    }

    /// Upload a local file under another display name
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty or the path
    /// does not point to a regular file.
    pub fn from_path_named(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, TelegramError> {
        Self::new(name, UploadSource::Path(path.into()))
    }

    /// Upload binary content from a stream the caller keeps owning
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty.
    pub fn from_reader<R>(name: impl Into<String>, reader: &'a mut R) -> Result<Self, TelegramError>
    where
        R: AsyncRead + Send + Unpin,
    {
        Self::new(
            name,
            UploadSource::Reader {
                reader: Box::new(reader),
                text: false,
            },
        )
    }

    /// Upload text content from a stream the caller keeps owning
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty.
    pub fn from_text_reader<R>(
        name: impl Into<String>,
        reader: &'a mut R,
    ) -> Result<Self, TelegramError>
    where
        R: AsyncRead + Send + Unpin,
    {
        Self::new(
            name,
            UploadSource::Reader {
                reader: Box::new(reader),
                text: true,
            },
        )
    }

    /// Upload in-memory bytes
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty.
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<Self, TelegramError> {
        Self::new(name, UploadSource::Bytes(bytes.into()))
    }

    /// Upload in-memory text
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Validation` if the name is empty.
    pub fn from_text(
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, TelegramError> {
        Self::new(name, UploadSource::Text(text.into()))
    }

    /// Display name sent with the part
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content source
    #[must_use]
    pub const fn source(&self) -> &UploadSource<'a> {
        &self.source
    }

    pub(crate) fn into_parts(self) -> (String, UploadSource<'a>) {
        (self.name, self.source)
    }
}

/// A file argument: something Telegram already has, or a new upload
#[derive(Debug)]
pub enum InputFile<'a> {
    /// A `file_id` or an HTTP URL, sent as a plain field
    Remote(String),
    /// Content uploaded with the request
    Upload(Upload<'a>),
}

impl InputFile<'_> {
    /// Reference a file by `file_id` or URL
    #[must_use]
    pub fn remote(file_id_or_url: impl Into<String>) -> Self {
        Self::Remote(file_id_or_url.into())
    }
}

impl<'a> From<Upload<'a>> for InputFile<'a> {
    fn from(upload: Upload<'a>) -> Self {
        Self::Upload(upload)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Response envelope wrapping every Bot API reply
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// Whether the call succeeded
    pub ok: bool,
    /// Payload of a successful call
    pub result: Option<T>,
    /// Error code of a failed call
    pub error_code: Option<i64>,
    /// Human-readable error description
    pub description: Option<String>,
    /// Hints for handling the error automatically
    pub parameters: Option<ResponseParameters>,
}

/// Extra information attached to some errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before repeating the request
    pub retry_after: Option<u64>,
}

impl ApiResponse<Value> {
    /// Unwrap the envelope into its result or an API error
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Api` when `ok` is false.
    pub fn into_result(self) -> Result<Value, TelegramError> {
        if self.ok {
            return Ok(self.result.unwrap_or(Value::Null));
        }

        let parameters = self.parameters.unwrap_or_default();
        Err(TelegramError::Api {
            code: self.error_code.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            retry_after: parameters.retry_after,
            migrate_to_chat_id: parameters.migrate_to_chat_id,
        })
    }
}
