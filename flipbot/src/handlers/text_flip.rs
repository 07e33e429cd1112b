//! Posts the upside-down rendition of an ordinary text message to the same channel.

use std::sync::Arc;

use async_trait::async_trait;
use flip_markup::{flip_markedup_text, MarkupFlipper};
use flipbot_core::{ChatApi, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::directory::DirectoryHandle;

pub struct TextFlipHandler {
    api: Arc<dyn ChatApi>,
    directory: DirectoryHandle,
}

impl TextFlipHandler {
    pub fn new(api: Arc<dyn ChatApi>, directory: DirectoryHandle) -> Self {
        Self { api, directory }
    }
}

#[async_trait]
impl Handler for TextFlipHandler {
    #[instrument(skip(self, message), fields(channel = ?message.channel, ts = ?message.ts))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text_message() {
            return Ok(HandlerResponse::Ignore);
        }
        if message.text.is_empty() {
            return Err(HandlerError::NoText.into());
        }
        let channel = message
            .channel
            .as_deref()
            .ok_or(HandlerError::MissingChannel)?;

        let flipper = MarkupFlipper::new(self.directory.snapshot().await);
        let flipped = flip_markedup_text(&message.text, &flipper);

        self.api.post_message(channel, &flipped).await?;
        info!(channel = %channel, "Posted flipped text");
        Ok(HandlerResponse::Flipped(flipped))
    }
}
