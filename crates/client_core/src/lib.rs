pub mod dialog;
pub mod error;
pub mod transport;
pub mod types;
pub mod view;

pub use dialog::{AcceptOutcome, Dialog};
pub use error::{DialogError, HostError, TransportError};
pub use transport::{
    post::PostTransport, session::SessionSocketTransport, socket::SocketTransport,
    GenerationCounter, Transport,
};
pub use types::{ClientConfig, DisplayEngine, HostPage, DEFAULT_WINDOWPORT};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
