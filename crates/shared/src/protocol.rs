use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Kind string of the external event raised when a session socket has
/// queued updates waiting for the host.
pub const WEBSOCKET_EXTEVENT: &str = "websocket";

/// One display-state update pushed by the interpreter.
///
/// Only `type` is contractually required. `gen` appears once the update has
/// been generation-stamped, either by the interpreter itself (the
/// request/response flow) or by the receiving transport. Every other field
/// is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen: Option<u64>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Update {
    /// The bare ready signal a session transport emits when its socket
    /// opens. Carries nothing but `type` and `gen`.
    pub fn ready(gen: u64) -> Self {
        Self {
            kind: "update".to_string(),
            gen: Some(gen),
            rest: Map::new(),
        }
    }
}

/// An input event from the display engine, passed through uninterpreted.
///
/// Transports peek at the `type` discriminator (and the `value` field of
/// `external` events) to drive connection setup and queue draining; nothing
/// else is inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(pub Value);

impl Action {
    /// The initialization event that opens a socket connection.
    pub fn init() -> Self {
        Self(json!({ "type": "init" }))
    }

    /// The host's acknowledgment of an external event of the given kind.
    pub fn external(value: &str) -> Self {
        Self(json!({ "type": "external", "value": value }))
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn is_init(&self) -> bool {
        self.kind() == Some("init")
    }

    /// True for the host's acknowledgment of a `websocket` external event.
    pub fn is_websocket_ack(&self) -> bool {
        self.kind() == Some("external")
            && self.0.get("value").and_then(Value::as_str) == Some(WEBSOCKET_EXTEVENT)
    }
}
