//! Bot API method catalog
//!
//! Every method follows the same steps: validate required arguments, write
//! them under their wire names, merge the caller's options on top and
//! dispatch. Results are returned as the raw `result` JSON value.

mod bot;
mod chats;
mod editing;
mod inline;
mod messages;
mod stickers;
