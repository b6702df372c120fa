use thiserror::Error;

/// Failures surfaced by the transports.
///
/// Every variant is terminal for the operation that produced it; nothing is
/// retried. Transport failures that the user needs to know about are also
/// reported once through [`crate::types::DisplayEngine::error`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured base URL is not an http(s) URL.
    #[error("invalid server url: {0}")]
    InvalidServerUrl(String),
    /// The request/response endpoint failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The socket could not be created.
    #[error("connection could not be created: {0}")]
    Connect(String),
    /// A send was attempted with no open connection.
    #[error("not connected")]
    NotConnected,
    /// Writing to the open socket failed.
    #[error("send failed: {0}")]
    Send(String),
    /// An action payload could not be serialized.
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Contract violations and host-page failures from the dialog prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    /// A dialog box is already open.
    #[error("dialog box is already open")]
    AlreadyOpen,
    /// The host container element was not found.
    #[error("unable to find root element #{0}")]
    HostContainer(String),
}

/// Failures reported by the rendering host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("no such element #{0}")]
    NoSuchElement(String),
}
