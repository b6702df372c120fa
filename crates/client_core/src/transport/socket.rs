//! Persistent socket transport: one long-lived connection, updates pushed
//! by the interpreter as they happen.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};

use shared::protocol::{Action, Update};

use crate::error::TransportError;
use crate::transport::{GenerationCounter, Transport};
use crate::types::{ClientConfig, DisplayEngine};

pub(crate) type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
pub(crate) type WsSink = SplitSink<WsStream, Message>;

/// Message reported when an open socket goes away, expected or not.
pub(crate) const CONNECTION_LOST: &str = "The connection to the server was lost.";

/// Serializes outbound actions onto one long-lived socket and forwards
/// inbound updates immediately, stamping each with the next generation
/// number.
///
/// The connection is opened by the display engine's `init` action; there is
/// no reconnect. Once the socket closes, every further send fails with
/// [`TransportError::NotConnected`].
pub struct SocketTransport {
    engine: Arc<dyn DisplayEngine>,
    config: ClientConfig,
    conn: Arc<Mutex<Option<WsSink>>>,
    gen: Arc<GenerationCounter>,
}

impl SocketTransport {
    pub fn new(config: ClientConfig, engine: Arc<dyn DisplayEngine>) -> Self {
        Self {
            engine,
            config,
            conn: Arc::new(Mutex::new(None)),
            gen: Arc::new(GenerationCounter::new()),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    async fn connect(&self) -> Result<(), TransportError> {
        let url = self.config.websocket_url();
        info!(%url, "creating websocket");
        match connect_async(&url).await {
            Ok((stream, _)) => {
                let (sink, reader) = stream.split();
                *self.conn.lock().await = Some(sink);
                spawn_reader(
                    reader,
                    Arc::clone(&self.conn),
                    Arc::clone(&self.engine),
                    Arc::clone(&self.gen),
                );
                Ok(())
            }
            Err(err) => {
                self.engine
                    .error(&format!("The connection to the server could not be created: {err}"));
                Err(TransportError::Connect(err.to_string()))
            }
        }
    }

    async fn write(&self, action: &Action) -> Result<(), TransportError> {
        let payload = serde_json::to_string(action)?;
        let mut conn = self.conn.lock().await;
        let Some(sink) = conn.as_mut() else {
            return Err(TransportError::NotConnected);
        };
        sink.send(Message::Text(payload))
            .await
            .map_err(|err| TransportError::Send(err.to_string()))
    }
}

#[async_trait]
impl Transport for SocketTransport {
    async fn send(&self, action: Action) -> Result<(), TransportError> {
        if action.is_init() && !self.is_connected().await {
            self.connect().await?;
        }
        self.write(&action).await
    }
}

/// Forward inbound frames until the socket goes away, then clear the
/// connection and report the loss exactly once.
fn spawn_reader(
    mut reader: SplitStream<WsStream>,
    conn: Arc<Mutex<Option<WsSink>>>,
    engine: Arc<dyn DisplayEngine>,
    gen: Arc<GenerationCounter>,
) {
    tokio::spawn(async move {
        while let Some(incoming) = reader.next().await {
            match incoming {
                Ok(Message::Text(text)) => match serde_json::from_str::<Update>(&text) {
                    Ok(mut update) => {
                        update.gen = Some(gen.next());
                        engine.update(update);
                    }
                    Err(err) => engine.log(&format!("discarding malformed update: {err}")),
                },
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!("websocket receive failed: {err}");
                    break;
                }
            }
        }
        conn.lock().await.take();
        engine.error(CONNECTION_LOST);
    });
}
