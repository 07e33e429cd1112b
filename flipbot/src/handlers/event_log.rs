//! Logs every incoming event in before() and the chain outcome in after().

use async_trait::async_trait;
use flipbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info};

/// With `verbose` the raw event is logged at info, otherwise at debug.
#[derive(Debug, Clone, Default)]
pub struct EventLogHandler {
    verbose: bool,
}

impl EventLogHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

#[async_trait]
impl Handler for EventLogHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if self.verbose {
            info!(event_type = %message.event_type, raw = %message.raw, "Received event");
        } else {
            debug!(event_type = %message.event_type, raw = %message.raw, "Received event");
        }
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Flipped(text) => info!(
                channel = ?message.channel,
                user = ?message.user,
                ts = ?message.ts,
                flipped = %text,
                "Flipped"
            ),
            other => debug!(event_type = %message.event_type, response = ?other, "Event done"),
        }
        Ok(())
    }
}
