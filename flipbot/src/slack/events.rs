//! Socket Mode envelopes and conversion of Events API payloads into core [`Message`]s.

use flipbot_core::{Message, SharedFile, ToCoreMessage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frame received over the Socket Mode websocket. `hello` and `disconnect` frames carry no
/// envelope id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketModeEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_id: Option<String>,
    #[serde(rename = "type")]
    pub envelope_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EventPayload>,
    /// Set on `disconnect` frames (`warning`, `refresh_requested`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `events_api` payload; only the inner event is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,
}

/// Acknowledgement sent back for every envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketModeAck {
    pub envelope_id: String,
}

impl SocketModeAck {
    pub fn new(envelope_id: impl Into<String>) -> Self {
        Self {
            envelope_id: envelope_id.into(),
        }
    }
}

/// Wrapper for a raw Slack event to implement [`ToCoreMessage`].
pub struct SlackEventWrapper<'a>(pub &'a Value);

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn shared_file(file: &Value) -> SharedFile {
    SharedFile {
        id: str_field(file, "id").unwrap_or_default(),
        name: str_field(file, "name").unwrap_or_default(),
        title: str_field(file, "title"),
        mimetype: str_field(file, "mimetype").unwrap_or_default(),
        url_private_download: str_field(file, "url_private_download"),
        initial_comment: file
            .get("initial_comment")
            .and_then(|c| c.get("comment"))
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

impl ToCoreMessage for SlackEventWrapper<'_> {
    fn to_core(&self) -> Message {
        let event = self.0;
        let mut message = Message::new(str_field(event, "type").unwrap_or_default());
        message.subtype = str_field(event, "subtype");
        message.channel = str_field(event, "channel");
        // `user` is an object on user_change / team_join events; only string ids are authors.
        message.user = str_field(event, "user");
        message.text = str_field(event, "text").unwrap_or_default();
        message.ts = str_field(event, "ts");
        message.files = match (event.get("files"), event.get("file")) {
            (Some(Value::Array(files)), _) => files.iter().map(shared_file).collect(),
            (_, Some(file)) if file.is_object() => vec![shared_file(file)],
            _ => Vec::new(),
        };
        message.raw = event.clone();
        message
    }
}
