//! Session-addressed socket transport with a replayable update queue.
//!
//! Inbound updates are not delivered on arrival. They are buffered in a
//! FIFO queue and the host is nudged with an external event; when the host
//! acknowledges (an `external` action of value `websocket`), the whole
//! queue is drained in arrival order. Generation numbers are assigned at
//! drain time, so the counter covers the synthetic ready update and every
//! drained update with no gaps.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::SplitStream;
use futures::{SinkExt, StreamExt};
use tokio::sync::Mutex;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use shared::domain::SessionId;
use shared::protocol::{Action, Update, WEBSOCKET_EXTEVENT};

use crate::error::TransportError;
use crate::transport::socket::{WsSink, WsStream, CONNECTION_LOST};
use crate::transport::{GenerationCounter, Transport};
use crate::types::{ClientConfig, DisplayEngine};

pub struct SessionSocketTransport {
    engine: Arc<dyn DisplayEngine>,
    config: ClientConfig,
    session: SessionId,
    conn: Arc<Mutex<Option<WsSink>>>,
    queue: Arc<Mutex<VecDeque<Update>>>,
    gen: GenerationCounter,
}

impl SessionSocketTransport {
    pub fn new(config: ClientConfig, session: SessionId, engine: Arc<dyn DisplayEngine>) -> Self {
        Self {
            engine,
            config,
            session,
            conn: Arc::new(Mutex::new(None)),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            gen: GenerationCounter::new(),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    async fn connect(&self) -> Result<(), TransportError> {
        let url = self.config.session_websocket_url(self.session);
        info!(%url, "creating session websocket");
        match connect_async(&url).await {
            Ok((stream, _)) => {
                let (sink, reader) = stream.split();
                *self.conn.lock().await = Some(sink);
                spawn_reader(
                    reader,
                    Arc::clone(&self.conn),
                    Arc::clone(&self.queue),
                    Arc::clone(&self.engine),
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

    /// Deliver everything queued so far, in arrival order, stamping each
    /// update as it goes out.
    async fn drain(&self) {
        let mut queue = self.queue.lock().await;
        if queue.is_empty() {
            self.engine.log("websocket event with no queued updates");
            return;
        }
        debug!(count = queue.len(), "draining queued updates");
        while let Some(mut update) = queue.pop_front() {
            update.gen = Some(self.gen.next());
            self.engine.update(update);
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
impl Transport for SessionSocketTransport {
    async fn send(&self, action: Action) -> Result<(), TransportError> {
        if action.is_init() {
            if !self.is_connected().await {
                self.connect().await?;
            }
            self.engine.update(Update::ready(self.gen.next()));
            return Ok(());
        }
        if action.is_websocket_ack() {
            self.drain().await;
            return Ok(());
        }
        self.write(&action).await
    }
}

/// Queue inbound frames and nudge the host; delivery happens later, on the
/// host's own schedule.
fn spawn_reader(
    mut reader: SplitStream<WsStream>,
    conn: Arc<Mutex<Option<WsSink>>>,
    queue: Arc<Mutex<VecDeque<Update>>>,
    engine: Arc<dyn DisplayEngine>,
) {
    tokio::spawn(async move {
        while let Some(incoming) = reader.next().await {
            match incoming {
                Ok(Message::Text(text)) => match serde_json::from_str::<Update>(&text) {
                    Ok(update) => {
                        queue.lock().await.push_back(update);
                        engine.extevent(WEBSOCKET_EXTEVENT);
                    }
                    Err(err) => engine.log(&format!("discarding malformed update: {err}")),
                },
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!("session websocket receive failed: {err}");
                    break;
                }
            }
        }
        conn.lock().await.take();
        engine.error(CONNECTION_LOST);
    });
}
