//! Shutdown coordination.
//!
//! One [`Shutdown`] per process. The HTTP server holds a [`ShutdownSignal`]
//! and stops accepting connections when it fires; configuration requests
//! already in flight finish their read-and-render and get their response.
//! Nothing else needs draining: every request reads its files fresh and
//! leaves no state behind.

use tokio::sync::broadcast;

/// Sender side, owned by signal handling or a test harness.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Ask every subscriber to stop.
    pub fn trigger(&self, reason: &str) {
        tracing::info!(reason = reason, "Shutdown requested");
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side handed to the server.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or the coordinator is dropped.
    pub async fn recv(mut self) {
        // Closed means nobody can trigger any more; stop rather than serve forever.
        let _ = self.rx.recv().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let a = shutdown.subscribe();
        let b = shutdown.subscribe();

        shutdown.trigger("test");
        tokio::time::timeout(Duration::from_secs(1), a.recv()).await.unwrap();
        tokio::time::timeout(Duration::from_secs(1), b.recv()).await.unwrap();
    }

    #[tokio::test]
    async fn test_dropped_coordinator_releases_server() {
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        drop(shutdown);
        tokio::time::timeout(Duration::from_secs(1), signal.recv()).await.unwrap();
    }

    #[tokio::test]
    async fn test_signal_waits_until_triggered() {
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        let pending = tokio::time::timeout(Duration::from_millis(50), signal.recv()).await;
        assert!(pending.is_err());
        drop(shutdown);
    }
}
