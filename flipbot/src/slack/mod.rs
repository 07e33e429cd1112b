//! Slack transport: Web API client, Socket Mode envelopes and event conversion, Socket Mode runner.

pub mod api;
pub mod events;
pub mod socket;

pub use api::SlackApiClient;
pub use events::{EventPayload, SlackEventWrapper, SocketModeAck, SocketModeEnvelope};
pub use socket::{run_socket_mode, SocketModeRunner};
