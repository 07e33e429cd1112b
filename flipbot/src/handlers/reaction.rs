//! Reacts to the original message once it has been flipped.

use std::sync::Arc;

use async_trait::async_trait;
use flip_markup::{ReactionPicker, ReactionPolicy};
use flipbot_core::{ChatApi, Handler, HandlerResponse, Message, Result};
use tracing::{debug, warn};

pub struct ReactionHandler {
    api: Arc<dyn ChatApi>,
    picker: ReactionPicker,
}

impl ReactionHandler {
    pub fn new(api: Arc<dyn ChatApi>, policy: ReactionPolicy) -> Self {
        Self {
            api,
            picker: ReactionPicker::new(policy),
        }
    }
}

#[async_trait]
impl Handler for ReactionHandler {
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if !matches!(response, HandlerResponse::Flipped(_)) {
            return Ok(());
        }
        let (Some(channel), Some(ts)) = (message.channel.as_deref(), message.ts.as_deref()) else {
            debug!("Flipped event has no channel or ts, not reacting");
            return Ok(());
        };
        let name = self.picker.pick();
        // A failed reaction never undoes the flip.
        if let Err(e) = self.api.add_reaction(channel, ts, name).await {
            warn!(error = %e, channel = %channel, ts = %ts, reaction = %name, "Failed to add reaction");
        }
        Ok(())
    }
}
