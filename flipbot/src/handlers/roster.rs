//! Rebuilds the user directory when the workspace roster changes.

use std::sync::Arc;

use async_trait::async_trait;
use flipbot_core::{ChatApi, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::directory::DirectoryHandle;

/// On `user_change` / `team_join` / `bot_added` / `bot_updated`, re-reads the roster and swaps
/// in a new directory, then stops the chain.
pub struct RosterHandler {
    api: Arc<dyn ChatApi>,
    directory: DirectoryHandle,
}

impl RosterHandler {
    pub fn new(api: Arc<dyn ChatApi>, directory: DirectoryHandle) -> Self {
        Self { api, directory }
    }
}

#[async_trait]
impl Handler for RosterHandler {
    #[instrument(skip(self, message), fields(event_type = %message.event_type))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_roster_change() {
            return Ok(HandlerResponse::Ignore);
        }
        info!("Roster changed, refreshing user directory");
        self.directory.refresh(self.api.as_ref()).await?;
        Ok(HandlerResponse::Stop)
    }
}
