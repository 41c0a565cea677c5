//! Telegram Bot API integration
//!
//! Exposes the Bot API HTTP methods as async methods on [`TelegramClient`].
//! Each call validates its required arguments, sends them as JSON or as
//! multipart form data and unwraps the `{ok, result}` envelope.
//!
//! # Example
//!
//! ```no_run
//! use integration_telegram::{InputFile, Params, TelegramClient, TelegramConfig, Upload};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TelegramClient::new(TelegramConfig::new("123456:ABC-DEF"))?;
//!
//! let me = client.get_me().await?;
//! println!("Running as @{}", me["username"]);
//!
//! client
//!     .send_message(
//!         -1_001_234_567_890_i64,
//!         "<b>Hello</b>",
//!         Some(Params::new().with("parse_mode", "HTML")),
//!     )
//!     .await?;
//!
//! let photo = Upload::from_path("cat.jpg")?;
//! client.send_photo("@my_channel", InputFile::from(photo), None).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
mod methods;
pub mod types;
pub mod updates;
pub mod validation;

pub use client::TelegramClient;
pub use config::TelegramConfig;
pub use dispatch::decode_envelope;
pub use error::TelegramError;
pub use types::{
    ApiResponse, ChatAction, ChatId, InputFile, MessageRef, Params, ResponseParameters, Upload,
    UploadSource,
};
