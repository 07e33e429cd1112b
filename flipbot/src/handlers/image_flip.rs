//! Re-uploads a shared image rotated 180°, with upside-down filename, title and comment.

use std::sync::Arc;

use async_trait::async_trait;
use flip_markup::{flip_markedup_text, upsidedown, MarkupFlipper};
use flipbot_core::{
    ChatApi, FileUpload, FlipbotError, Handler, HandlerError, HandlerResponse, Message, Result,
};
use tracing::{info, instrument, warn};

use crate::directory::DirectoryHandle;
use crate::rotation::rotate_180;

pub struct ImageFlipHandler {
    api: Arc<dyn ChatApi>,
    directory: DirectoryHandle,
}

impl ImageFlipHandler {
    pub fn new(api: Arc<dyn ChatApi>, directory: DirectoryHandle) -> Self {
        Self { api, directory }
    }
}

#[async_trait]
impl Handler for ImageFlipHandler {
    #[instrument(skip(self, message), fields(channel = ?message.channel, ts = ?message.ts))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(file) = message.image_file() else {
            return Ok(HandlerResponse::Ignore);
        };
        let channel = message
            .channel
            .as_deref()
            .ok_or(HandlerError::MissingChannel)?;
        let url = file
            .url_private_download
            .as_deref()
            .ok_or(HandlerError::MissingFile)?;

        let bytes = match self.api.download_file(url).await {
            Ok(bytes) => bytes,
            Err(FlipbotError::Handler(HandlerError::DownloadFailed { status })) => {
                warn!(status, file = %file.name, "Image download failed, dropping");
                return Ok(HandlerResponse::Stop);
            }
            Err(e) => return Err(e),
        };
        let rotated = rotate_180(&bytes)?;

        let flipper = MarkupFlipper::new(self.directory.snapshot().await);
        let title = file.title.as_deref().filter(|t| !t.is_empty());
        let comment = file
            .initial_comment
            .as_deref()
            .or(Some(message.text.as_str()))
            .filter(|c| !c.is_empty());

        let upload = FileUpload {
            channel: channel.to_string(),
            filename: upsidedown::transform(&file.name),
            bytes: rotated,
            title: title.map(|t| flip_markedup_text(t, &flipper)),
            initial_comment: comment.map(|c| flip_markedup_text(c, &flipper)),
        };
        self.api.upload_file(&upload).await?;
        info!(channel = %channel, file = %file.name, "Uploaded flipped image");

        Ok(HandlerResponse::Flipped(upload.title.unwrap_or(upload.filename)))
    }
}
