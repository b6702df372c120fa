//! Delivery strategies for relaying input events to the remote interpreter.
//!
//! All three transports present the same contract to the display engine:
//! actions go in through [`Transport::send`], updates come back through
//! [`crate::types::DisplayEngine::update`]. Which strategy a page embeds is
//! decided by the hosting environment, not by the engine.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use shared::protocol::Action;

use crate::error::TransportError;

pub mod post;
pub mod session;
pub mod socket;

/// One interchangeable delivery strategy.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Relay one action payload from the display engine to the
    /// interpreter.
    async fn send(&self, action: Action) -> Result<(), TransportError>;
}

/// Monotonic generation numbering for display updates.
///
/// Numbers are handed out strictly increasing, starting from 1, and are
/// never reused within one transport instance.
#[derive(Debug)]
pub struct GenerationCounter(AtomicU64);

impl GenerationCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter whose first handed-out number is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self(AtomicU64::new(first))
    }

    /// Take the next generation number.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for GenerationCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_one_and_never_repeats() {
        let counter = GenerationCounter::new();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.next(), 3);
    }

    #[test]
    fn counter_honors_initialization_value() {
        let counter = GenerationCounter::starting_at(40);
        assert_eq!(counter.next(), 40);
        assert_eq!(counter.next(), 41);
    }
}
