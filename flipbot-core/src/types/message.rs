//! Incoming event type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::SharedFile;

/// Event types after which the user directory must be rebuilt.
pub const ROSTER_CHANGE_EVENTS: &[&str] = &["user_change", "team_join", "bot_added", "bot_updated"];

/// One event from the real-time stream: a message, a file share, or a roster change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Event `type` (`message`, `user_change`, ...).
    pub event_type: String,
    /// Message `subtype` (`file_share`, `bot_message`, ...); `None` for plain messages.
    pub subtype: Option<String>,
    pub channel: Option<String>,
    /// Author's user id.
    pub user: Option<String>,
    /// Raw message text, markup and escapes included.
    pub text: String,
    /// Message timestamp; identifies the message for reactions.
    pub ts: Option<String>,
    pub files: Vec<SharedFile>,
    pub received_at: DateTime<Utc>,
    /// The event as received, for verbose logging.
    pub raw: serde_json::Value,
}

impl Message {
    /// Builds a bare event of the given type; fields are filled in by the caller.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            subtype: None,
            channel: None,
            user: None,
            text: String::new(),
            ts: None,
            files: Vec::new(),
            received_at: Utc::now(),
            raw: serde_json::Value::Null,
        }
    }

    /// True when the roster changed and the user directory is stale.
    pub fn is_roster_change(&self) -> bool {
        ROSTER_CHANGE_EVENTS.contains(&self.event_type.as_str())
    }

    /// True for an ordinary message: type `message` without subtype.
    pub fn is_text_message(&self) -> bool {
        self.event_type == "message" && self.subtype.is_none()
    }

    /// The shared image when this is a `file_share` of an image.
    pub fn image_file(&self) -> Option<&SharedFile> {
        if self.event_type != "message" || self.subtype.as_deref() != Some("file_share") {
            return None;
        }
        self.files.first().filter(|f| f.is_image())
    }

    pub fn is_image_message(&self) -> bool {
        self.image_file().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mimetype: &str) -> SharedFile {
        SharedFile {
            id: "F1".to_string(),
            name: "cat.png".to_string(),
            mimetype: mimetype.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_message_has_no_subtype() {
        let mut msg = Message::new("message");
        assert!(msg.is_text_message());
        msg.subtype = Some("message_changed".to_string());
        assert!(!msg.is_text_message());
        assert!(!Message::new("reaction_added").is_text_message());
    }

    #[test]
    fn test_roster_change_types() {
        for t in ["user_change", "team_join", "bot_added", "bot_updated"] {
            assert!(Message::new(t).is_roster_change());
        }
        assert!(!Message::new("message").is_roster_change());
    }

    #[test]
    fn test_image_message_needs_file_share_and_image_mimetype() {
        let mut msg = Message::new("message");
        msg.subtype = Some("file_share".to_string());
        assert!(!msg.is_image_message());

        msg.files.push(file("application/pdf"));
        assert!(!msg.is_image_message());

        msg.files[0] = file("image/png");
        assert!(msg.is_image_message());
        assert!(!msg.is_text_message());

        msg.subtype = None;
        assert!(!msg.is_image_message());
    }
}
