//! Listener identity and the configuration-change notification capability

use async_trait::async_trait;
use federation_gossip_core::ConfigurationRecord;
use std::fmt;
use thiserror::Error;

/// Notification delivery errors
///
/// These surface only in the dispatch tasks and the log; they never reach
/// the caller that applied the gossip snapshot.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("listener unreachable: {0}")]
    Unreachable(String),
    #[error("listener rejected configuration v{version}: {reason}")]
    Rejected { version: u64, reason: String },
}

/// Stable identity of a registered listener.
///
/// Repeated subscribe/unsubscribe calls with the same id behave
/// idempotently, so the id must not change across the listener's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub String);

impl ListenerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability implemented by anything that wants to hear about
/// configuration changes.
///
/// The call is one-way from the oracle's perspective: it runs on a detached
/// task, its result is only logged, and a slow or wedged listener delays
/// nobody else.
#[async_trait]
pub trait ConfigurationListener: Send + Sync + 'static {
    async fn on_configuration_change(
        &self,
        config: ConfigurationRecord,
    ) -> Result<(), NotifyError>;
}
