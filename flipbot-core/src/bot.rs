//! Chat platform abstraction used by handlers.
//!
//! [`ChatApi`] is transport-agnostic; the Slack Web API client in the `flipbot` crate implements it.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FileUpload, Member};

/// Outbound operations the bot needs: post text, react, move files, read the roster.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Posts a text message to the channel and returns its timestamp id.
    async fn post_message(&self, channel: &str, text: &str) -> Result<String>;
    /// Adds a reaction (name without colons) to the message `ts` in `channel`.
    async fn add_reaction(&self, channel: &str, ts: &str, name: &str) -> Result<()>;
    /// Downloads a private file using the bot's credentials. A non-success status is an error.
    async fn download_file(&self, url: &str) -> Result<Vec<u8>>;
    /// Uploads a file into a channel.
    async fn upload_file(&self, upload: &FileUpload) -> Result<()>;
    /// Lists every member of the workspace (all pages).
    async fn list_members(&self) -> Result<Vec<Member>>;
}
