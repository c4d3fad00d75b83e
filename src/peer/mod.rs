//! Peer send capability consumed by the benchmark publisher
//!
//! A peer owns the real transport and connection; the publisher only invokes
//! its send operation. Real broker transports are supplied by embedders — the
//! crate ships an in-process sink so the CLI harness and tests have a peer to
//! drive.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Send capability driven by the benchmark publisher
///
/// A failed send is terminal for the run in progress: the publisher stops the
/// loop and records the error's description. The error's type is never
/// inspected, only its text.
#[async_trait]
pub trait Peer: Send + Sync {
    /// Deliver one message payload, failing with a transport error on
    /// delivery failure
    async fn send(&self, payload: &[u8]) -> Result<()>;
}

/// In-process sink peer that discards every payload
///
/// Counts deliveries so callers can verify send volume without a broker.
#[derive(Debug, Default)]
pub struct DiscardPeer {
    sent: AtomicU64,
    bytes: AtomicU64,
}

impl DiscardPeer {
    /// Create a new discard sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payloads delivered so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    /// Total payload bytes delivered so far
    pub fn sent_bytes(&self) -> u64 {
        self.bytes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Peer for DiscardPeer {
    async fn send(&self, payload: &[u8]) -> Result<()> {
        self.sent.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(payload.len() as u64, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_discard_peer_counts_sends() {
        let peer = DiscardPeer::new();
        assert_eq!(peer.sent_count(), 0);

        peer.send(&[0u8; 16]).await.unwrap();
        peer.send(&[0u8; 16]).await.unwrap();

        assert_eq!(peer.sent_count(), 2);
        assert_eq!(peer.sent_bytes(), 32);
    }

    #[tokio::test]
    async fn test_peer_is_object_safe() {
        let peer: Box<dyn Peer> = Box::new(DiscardPeer::new());
        assert!(peer.send(&[1, 2, 3]).await.is_ok());
    }
}
