//! Request dispatch and envelope decoding
//!
//! Every operation goes through one of two paths:
//!
//! - JSON: the payload is sent as an `application/json; charset=utf-8` body.
//! - Multipart: uploads become file parts, every other field a text field.
//!
//! Both hand the raw status and body to [`decode_envelope`].

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;
use tracing::{debug, instrument, warn};

use crate::client::TelegramClient;
use crate::error::TelegramError;
use crate::types::{ApiResponse, InputFile, Params, Upload, UploadSource};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const TEXT_PART_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const NO_CACHE: &str = "no-cache";

/// Decode a raw Bot API reply
///
/// # Errors
///
/// - `Transport` if the status is not 200
/// - `Decode` if the body is not a JSON envelope
/// - `Api` if the envelope reports `ok: false`
pub fn decode_envelope(status: u16, body: &str) -> Result<Value, TelegramError> {
    if status != 200 {
        return Err(TelegramError::Transport {
            status,
            body: body.to_string(),
        });
    }

    let envelope: ApiResponse = serde_json::from_str(body).map_err(TelegramError::Decode)?;
    envelope.into_result()
}

/// Build a JSON payload from required fields and caller options
///
/// Options are written last, so they win on key collisions.
pub(crate) fn json_payload<I>(base: I, options: Option<Params>) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    let mut payload: Map<String, Value> = base
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

    if let Some(options) = options {
        payload.extend(options);
    }

    payload
}

/// A form field: plain value or upload
#[derive(Debug)]
pub(crate) enum FormValue<'a> {
    Value(Value),
    File(Upload<'a>),
}

/// Ordered multipart payload
#[derive(Debug, Default)]
pub(crate) struct FormPayload<'a> {
    fields: Vec<(String, FormValue<'a>)>,
}

impl<'a> FormPayload<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a plain field
    pub(crate) fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key.to_string(), FormValue::Value(value.into()));
        self
    }

    /// Add an upload
    pub(crate) fn upload(mut self, key: &str, upload: Upload<'a>) -> Self {
        self.insert(key.to_string(), FormValue::File(upload));
        self
    }

    /// Add a file argument; remote references travel as plain fields
    pub(crate) fn input_file(self, key: &str, file: InputFile<'a>) -> Self {
        match file {
            InputFile::Remote(id) => self.field(key, id),
            InputFile::Upload(upload) => self.upload(key, upload),
        }
    }

    /// Merge caller options on top of the fields written so far
    pub(crate) fn merge(mut self, options: Option<Params>) -> Self {
        for (key, value) in options.into_iter().flatten() {
            self.insert(key, FormValue::Value(value));
        }
        self
    }

    fn insert(&mut self, key: String, value: FormValue<'a>) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    #[cfg(test)]
    fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Encode into a multipart form, reading every upload source
    async fn into_form(self) -> Result<Form, TelegramError> {
        let mut form = Form::new();

        for (key, value) in self.fields {
            form = match value {
                FormValue::Value(value) => match form_text(value) {
                    Some(text) => form.text(key, text),
                    None => form,
                },
                FormValue::File(upload) => form.part(key, file_part(upload).await?),
            };
        }

        Ok(form)
    }
}

/// String form of a plain field; `None` for JSON null
fn form_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Content read from an upload source
enum PartContent {
    Text(String),
    Binary(Vec<u8>),
}

/// Read an upload source to the end
///
/// Files opened from a path are released before this returns, on success and
/// on error alike. Borrowed readers are only read; the caller still owns them.
async fn read_source(source: UploadSource<'_>) -> Result<PartContent, TelegramError> {
    match source {
        UploadSource::Path(path) => {
            debug!(path = %path.display(), "Reading upload from file");
            let bytes = tokio::fs::read(&path).await?;
            Ok(PartContent::Binary(bytes))
        },
        UploadSource::Reader { mut reader, text } => {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).await?;
            if text {
                let text = String::from_utf8(buf)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                Ok(PartContent::Text(text))
            } else {
                Ok(PartContent::Binary(buf))
            }
        },
        UploadSource::Bytes(bytes) => Ok(PartContent::Binary(bytes)),
        UploadSource::Text(text) => Ok(PartContent::Text(text)),
    }
}

/// Build the file part for an upload
async fn file_part(upload: Upload<'_>) -> Result<Part, TelegramError> {
    let (name, source) = upload.into_parts();

    let part = match read_source(source).await? {
        PartContent::Text(text) => Part::text(text)
            .file_name(name)
            .mime_str(TEXT_PART_CONTENT_TYPE)?,
        PartContent::Binary(bytes) => {
            let mime = mime_guess::from_path(&name).first_or_octet_stream();
            Part::bytes(bytes)
                .file_name(name)
                .mime_str(mime.essence_str())?
        },
    };

    Ok(part)
}

impl TelegramClient {
    /// Call a method with a JSON body and deserialize its result
    ///
    /// Escape hatch for typed results and for methods this client does not
    /// wrap yet.
    ///
    /// # Errors
    ///
    /// Propagates dispatch errors; returns `Decode` if the result does not
    /// match `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: Option<Params>,
    ) -> Result<T, TelegramError> {
        let result = self
            .post_json(method, payload.map(Params::into_inner))
            .await?;
        serde_json::from_value(result).map_err(TelegramError::Decode)
    }

    /// JSON dispatch path
    #[instrument(skip(self, payload), fields(method = %method))]
    pub(crate) async fn post_json(
        &self,
        method: &str,
        payload: Option<Map<String, Value>>,
    ) -> Result<Value, TelegramError> {
        let body = payload
            .map(|payload| Value::Object(payload).to_string())
            .unwrap_or_default();

        debug!(body_len = body.len(), "Sending JSON request");

        let response = self
            .http()
            .post(self.method_url(method))
            .header(CACHE_CONTROL, NO_CACHE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        Self::read_envelope(response).await
    }

    /// Multipart dispatch path
    #[instrument(skip(self, payload), fields(method = %method))]
    pub(crate) async fn post_multipart(
        &self,
        method: &str,
        payload: FormPayload<'_>,
    ) -> Result<Value, TelegramError> {
        let form = payload.into_form().await?;

        debug!("Sending multipart request");

        let response = self
            .http()
            .post(self.method_url(method))
            .header(CACHE_CONTROL, NO_CACHE)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        Self::read_envelope(response).await
    }

    async fn read_envelope(response: reqwest::Response) -> Result<Value, TelegramError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        debug!(status, body_len = body.len(), "Received response");

        decode_envelope(status, &body).inspect_err(|err| match err {
            TelegramError::Api {
                code, description, ..
            } => warn!(code, description = %description, "Telegram API returned an error"),
            TelegramError::Transport { status, .. } => {
                warn!(status, "Telegram API returned a non-200 status");
            },
            _ => {},
        })
    }
}
