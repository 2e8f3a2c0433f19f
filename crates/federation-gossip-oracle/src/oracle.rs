//! Oracle store: the committed local snapshot and the merge-and-notify loop

use crate::listener::{ConfigurationListener, ListenerId};
use crate::notify;
use crate::registry::SubscriberRegistry;
use federation_gossip_core::{
    ConfigurationRecord, GatewayRecord, GatewayStatus, GossipSnapshot,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// Authoritative local replica of the federation gossip state.
///
/// The committed snapshot is replaced, never mutated, so [`current`] is safe
/// from any number of concurrent contexts. [`apply_and_notify`] and the
/// publication helpers assume a single logical writer: the hosting runtime
/// must serialize them (one actor turn at a time, or equivalent).
///
/// [`current`]: GossipOracle::current
/// [`apply_and_notify`]: GossipOracle::apply_and_notify
pub struct GossipOracle {
    current: RwLock<Arc<GossipSnapshot>>,
    registry: SubscriberRegistry,
}

impl GossipOracle {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(GossipSnapshot::empty())),
            registry: SubscriberRegistry::new(),
        }
    }

    /// Latest committed snapshot.
    pub fn current(&self) -> Arc<GossipSnapshot> {
        self.current.read().clone()
    }

    /// Register a listener for configuration changes. Idempotent; returns
    /// false if the id is already subscribed.
    pub fn subscribe(&self, id: ListenerId, listener: Arc<dyn ConfigurationListener>) -> bool {
        debug!(listener = %id, "subscribe to configuration events");
        self.registry.subscribe(id, listener)
    }

    /// Drop a listener registration. Returns false if the id was unknown.
    pub fn unsubscribe(&self, id: &ListenerId) -> bool {
        trace!(listener = %id, "unsubscribe from configuration events");
        self.registry.unsubscribe(id)
    }

    /// Merge an incoming gossip snapshot into the committed state, notify
    /// subscribers if the configuration changed, and return the delta.
    ///
    /// The delta tells the transport what is worth re-gossiping; an empty
    /// delta means the incoming snapshot carried nothing new. Notification
    /// failures are logged in the detached tasks and never surface here.
    ///
    /// Must run inside a tokio runtime so notification tasks can be
    /// spawned. Callers serialize invocations; see the type-level contract.
    pub fn apply_and_notify(&self, incoming: GossipSnapshot) -> GossipSnapshot {
        if incoming.is_empty() {
            return incoming;
        }

        let prev = self.current();
        let outcome = prev.merge(&incoming);
        *self.current.write() = Arc::new(outcome.merged);
        debug!(delta = %outcome.delta, "applied gossip snapshot");

        if let Some(config) = outcome.delta.configuration.clone() {
            notify::dispatch(self.registry.snapshot(), config);
        }

        outcome.delta
    }

    /// Publish or refresh one of the local cluster's own gateway entries.
    ///
    /// The caller owns version assignment for its own gateways; a stale
    /// version yields an empty delta and changes nothing.
    pub fn advertise_gateway(&self, record: GatewayRecord) -> GossipSnapshot {
        self.apply_and_notify(GossipSnapshot::from_gateway(record))
    }

    /// Inject a new configuration document, e.g. from an administrative
    /// command on this node. Subscribers hear about it exactly like a
    /// configuration learned through gossip.
    pub fn publish_configuration(&self, config: ConfigurationRecord) -> GossipSnapshot {
        self.apply_and_notify(GossipSnapshot::from_configuration(config))
    }

    /// Counters for operational visibility.
    pub fn stats(&self) -> OracleStats {
        let snapshot = self.current();
        OracleStats {
            gateways: snapshot.gateways.len(),
            active_gateways: snapshot
                .gateways
                .values()
                .filter(|r| r.status == GatewayStatus::Active)
                .count(),
            configuration_version: snapshot.configuration.as_ref().map(|c| c.version),
            listeners: self.registry.len(),
        }
    }
}

impl Default for GossipOracle {
    fn default() -> Self {
        Self::new()
    }
}

/// Oracle statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleStats {
    pub gateways: usize,
    pub active_gateways: usize,
    pub configuration_version: Option<u64>,
    pub listeners: usize,
}
