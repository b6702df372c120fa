use shared::domain::SessionId;
use shared::protocol::Update;
use url::Url;

use crate::error::{HostError, TransportError};
use crate::view::Node;

/// Default id of the page element the dialog mounts into.
pub const DEFAULT_WINDOWPORT: &str = "windowport";

/// Entry points of the consuming display library.
///
/// The glue never renders anything itself. It pushes updates, errors, and
/// event notifications through this interface and lets the engine drive the
/// page.
pub trait DisplayEngine: Send + Sync {
    /// Push a display-state payload to the rendering layer.
    fn update(&self, update: Update);

    /// Surface a fatal, user-visible message.
    fn error(&self, message: &str);

    /// Non-fatal diagnostic.
    fn log(&self, message: &str);

    /// Signal an asynchronous event of the given kind; the host reacts by
    /// sending the matching `external` action back through the transport.
    fn extevent(&self, kind: &str);
}

/// Rendering host the dialog mounts its view into.
pub trait HostPage: Send + Sync {
    /// Override hook for the host container element id. `None` keeps the
    /// [`DEFAULT_WINDOWPORT`] default.
    fn windowport(&self) -> Option<String> {
        None
    }

    /// Insert a view into the container element. Fails if the container is
    /// not present on the page.
    fn mount(&self, container_id: &str, view: Node) -> Result<(), HostError>;

    /// Remove an element. Removing an element that does not exist is a
    /// no-op, not an error.
    fn unmount(&self, element_id: &str);

    /// Move keyboard focus to an element. Best-effort.
    fn focus(&self, element_id: &str);
}

/// Connection endpoints for the transports.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    /// Build a config from the interpreter server's base URL. The URL must
    /// use the `http` or `https` scheme; the matching WebSocket scheme is
    /// derived from it.
    pub fn new(server_url: impl Into<String>) -> Result<Self, TransportError> {
        let server_url = server_url.into();
        let server_url = server_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&server_url)
            .map_err(|err| TransportError::InvalidServerUrl(format!("{server_url}: {err}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(TransportError::InvalidServerUrl(format!(
                "{server_url}: scheme must be http or https"
            )));
        }
        Ok(Self { server_url })
    }

    /// Endpoint for the request/response transport.
    pub fn play_url(&self) -> String {
        format!("{}/play", self.server_url)
    }

    /// Endpoint for the persistent socket transport.
    pub fn websocket_url(&self) -> String {
        let base = if self.server_url.starts_with("https://") {
            self.server_url.replacen("https://", "wss://", 1)
        } else {
            self.server_url.replacen("http://", "ws://", 1)
        };
        format!("{base}/websocket")
    }

    /// Endpoint for the session-addressed socket transport.
    pub fn session_websocket_url(&self, session: SessionId) -> String {
        format!("{}/{session}", self.websocket_url())
    }
}
