//! Socket Mode runner: opens a websocket via apps.connections.open, acks every envelope,
//! turns `events_api` payloads into core messages and hands each one to the handler chain on its
//! own task. Reconnects after a delay on error or when Slack asks for it; stops on ctrl-c.

use std::sync::Arc;

use flipbot_core::{FlipbotError, Result, ToCoreMessage};
use futures::stream::SplitStream;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{broadcast, mpsc};
use tokio::time::interval;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, instrument, warn};

use super::api::SlackApiClient;
use super::events::{SlackEventWrapper, SocketModeAck, SocketModeEnvelope};
use crate::chain::HandlerChain;
use crate::config::SocketConfig;

type WsConnection = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How one websocket session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Shutdown,
    Reconnect,
}

pub struct SocketModeRunner {
    api: Arc<SlackApiClient>,
    chain: HandlerChain,
    options: SocketConfig,
    shutdown_tx: broadcast::Sender<()>,
}

impl SocketModeRunner {
    pub fn new(api: Arc<SlackApiClient>, chain: HandlerChain, options: SocketConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            api,
            chain,
            options,
            shutdown_tx,
        }
    }

    /// Asks the connection loop to stop.
    pub fn shutdown(&self) {
        info!("Shutting down Socket Mode runner");
        let _ = self.shutdown_tx.send(());
    }

    /// Connection loop; returns after [`shutdown`](Self::shutdown).
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<()> {
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        loop {
            let session = match self.api.open_connection().await {
                Ok(ws_url) => {
                    info!("Connecting to Socket Mode");
                    self.connect_and_run(&ws_url, &mut shutdown_rx).await
                }
                Err(e @ FlipbotError::Config(_)) => return Err(e),
                Err(e) => Err(e),
            };

            match session {
                Ok(SessionEnd::Shutdown) => {
                    info!("Socket Mode stopped");
                    return Ok(());
                }
                Ok(SessionEnd::Reconnect) => info!("Socket Mode session ended"),
                Err(e) => error!(error = %e, "Socket Mode connection error"),
            }

            if shutdown_rx.try_recv().is_ok() {
                return Ok(());
            }
            info!(delay = ?self.options.reconnect_delay, "Reconnecting");
            tokio::select! {
                _ = shutdown_rx.recv() => return Ok(()),
                _ = tokio::time::sleep(self.options.reconnect_delay) => {}
            }
        }
    }

    async fn connect_and_run(
        &self,
        ws_url: &str,
        shutdown_rx: &mut broadcast::Receiver<()>,
    ) -> Result<SessionEnd> {
        let (ws_stream, _) = connect_async(ws_url)
            .await
            .map_err(|e| FlipbotError::Slack(e.to_string()))?;
        let (mut write, read) = ws_stream.split();

        let (msg_tx, mut msg_rx) = mpsc::channel::<WsMessage>(100);

        let write_task = tokio::spawn(async move {
            while let Some(msg) = msg_rx.recv().await {
                if let Err(e) = write.send(msg).await {
                    error!(error = %e, "Failed to send WebSocket message");
                    break;
                }
            }
        });

        let ping_tx = msg_tx.clone();
        let ping_interval = self.options.ping_interval;
        let ping_task = tokio::spawn(async move {
            let mut ticker = interval(ping_interval);
            loop {
                ticker.tick().await;
                if ping_tx.send(WsMessage::Ping(Vec::new())).await.is_err() {
                    break;
                }
            }
        });

        let result = self.process_messages(read, msg_tx, shutdown_rx).await;

        ping_task.abort();
        write_task.abort();

        result
    }

    async fn process_messages(
        &self,
        mut read: SplitStream<WsConnection>,
        msg_tx: mpsc::Sender<WsMessage>,
        shutdown_rx: &mut broadcast::Receiver<()>,
    ) -> Result<SessionEnd> {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => return Ok(SessionEnd::Shutdown),
                msg = read.next() => match msg {
                    Some(Ok(WsMessage::Text(text))) => {
                        if let Some(end) = self.handle_socket_message(&text, &msg_tx).await {
                            return Ok(end);
                        }
                    }
                    Some(Ok(WsMessage::Ping(data))) => {
                        let _ = msg_tx.send(WsMessage::Pong(data)).await;
                    }
                    Some(Ok(WsMessage::Close(_))) | None => {
                        info!("WebSocket closed by server");
                        return Ok(SessionEnd::Reconnect);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(FlipbotError::Slack(e.to_string())),
                }
            }
        }
    }

    /// Acks the envelope, then dispatches it. Returns `Some` when the session must end.
    async fn handle_socket_message(
        &self,
        text: &str,
        msg_tx: &mpsc::Sender<WsMessage>,
    ) -> Option<SessionEnd> {
        let envelope: SocketModeEnvelope = match serde_json::from_str(text) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Failed to parse Socket Mode envelope");
                return None;
            }
        };

        if let Some(ref envelope_id) = envelope.envelope_id {
            match serde_json::to_string(&SocketModeAck::new(envelope_id.as_str())) {
                Ok(ack) => {
                    let _ = msg_tx.send(WsMessage::Text(ack)).await;
                }
                Err(e) => warn!(error = %e, "Failed to encode ack"),
            }
        }

        match envelope.envelope_type.as_str() {
            "events_api" => {
                if let Some(event) = envelope.payload.and_then(|p| p.event) {
                    self.dispatch(event);
                }
                None
            }
            "hello" => {
                info!("Socket Mode connection established");
                None
            }
            "disconnect" => {
                info!(reason = ?envelope.reason, "Slack requested disconnect");
                Some(SessionEnd::Reconnect)
            }
            other => {
                debug!(envelope_type = %other, "Ignoring envelope");
                None
            }
        }
    }

    /// Runs the handler chain for one event on its own task.
    fn dispatch(&self, event: serde_json::Value) {
        let core_msg = SlackEventWrapper(&event).to_core();
        let chain = self.chain.clone();
        tokio::spawn(async move {
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    event_type = %core_msg.event_type,
                    channel = ?core_msg.channel,
                    "Handler chain failed"
                );
            }
        });
    }
}

/// Runs Socket Mode until ctrl-c.
pub async fn run_socket_mode(
    api: Arc<SlackApiClient>,
    chain: HandlerChain,
    options: SocketConfig,
) -> Result<()> {
    let runner = Arc::new(SocketModeRunner::new(api, chain, options));
    let signal_runner = runner.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_runner.shutdown();
        }
    });
    runner.run().await
}
