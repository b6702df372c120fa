//! Request/response transport: one action, one network round trip, one
//! update.

use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use shared::protocol::{Action, Update};

use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::{ClientConfig, DisplayEngine};

use async_trait::async_trait;

/// Relays each action as an HTTP POST and forwards the response update
/// verbatim.
///
/// Generation numbers are pass-through in this mode: the interpreter stamps
/// its own responses, and this transport neither assigns nor tracks them.
pub struct PostTransport {
    http: Client,
    engine: Arc<dyn DisplayEngine>,
    config: ClientConfig,
}

impl PostTransport {
    pub fn new(config: ClientConfig, engine: Arc<dyn DisplayEngine>) -> Self {
        Self {
            http: Client::new(),
            engine,
            config,
        }
    }

    async fn round_trip(&self, action: &Action) -> Result<Update, TransportError> {
        let update = self
            .http
            .post(self.config.play_url())
            .json(action)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(update)
    }
}

#[async_trait]
impl Transport for PostTransport {
    async fn send(&self, action: Action) -> Result<(), TransportError> {
        match self.round_trip(&action).await {
            Ok(update) => {
                debug!(kind = %update.kind, "received play response");
                self.engine.update(update);
                Ok(())
            }
            Err(err) => {
                self.engine.error(&format!("Server error: {err}"));
                Err(err)
            }
        }
    }
}
