//! Drops events authored by the bot itself so its own flips are never flipped back.

use async_trait::async_trait;
use flipbot_core::{Handler, Message, Result};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SelfFilterHandler {
    bot_user: Option<String>,
}

impl SelfFilterHandler {
    /// `bot_user` is the bot's own user id; `None` lets every event through.
    pub fn new(bot_user: Option<String>) -> Self {
        Self { bot_user }
    }
}

#[async_trait]
impl Handler for SelfFilterHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        let own = match (&self.bot_user, &message.user) {
            (Some(bot), Some(author)) => bot == author,
            _ => false,
        };
        if own {
            debug!(ts = ?message.ts, "Skipping own message");
        }
        Ok(!own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from(user: Option<&str>) -> Message {
        let mut msg = Message::new("message");
        msg.user = user.map(str::to_string);
        msg
    }

    #[tokio::test]
    async fn test_own_messages_are_dropped() {
        let h = SelfFilterHandler::new(Some("UBOT".to_string()));
        assert!(!h.before(&from(Some("UBOT"))).await.unwrap());
        assert!(h.before(&from(Some("U1"))).await.unwrap());
        assert!(h.before(&from(None)).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_bot_user_lets_everything_through() {
        let h = SelfFilterHandler::new(None);
        assert!(h.before(&from(Some("UBOT"))).await.unwrap());
    }
}
