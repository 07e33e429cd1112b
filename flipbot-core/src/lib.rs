//! # flipbot-core
//!
//! Core types and traits for the flip bot: [`ChatApi`], [`Handler`], event and file types, errors,
//! and tracing initialization. Transport-agnostic; the Slack side lives in `flipbot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::ChatApi;
pub use error::{FlipbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    FileUpload, Handler, HandlerResponse, Member, Message, SharedFile, ToCoreMessage,
    ROSTER_CHANGE_EVENTS,
};
