//! Idempotent registry of configuration-change subscribers

use crate::listener::{ConfigurationListener, ListenerId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Set of locally registered listeners, keyed by stable listener identity.
///
/// The oracle mutates the registry from its single writer context, but the
/// lock makes subscribe/unsubscribe safe even if the hosting runtime calls
/// them from elsewhere.
#[derive(Default)]
pub struct SubscriberRegistry {
    listeners: RwLock<HashMap<ListenerId, Arc<dyn ConfigurationListener>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener. Returns false and keeps the existing registration if
    /// the id is already present.
    pub fn subscribe(&self, id: ListenerId, listener: Arc<dyn ConfigurationListener>) -> bool {
        let mut listeners = self.listeners.write();
        if listeners.contains_key(&id) {
            return false;
        }
        listeners.insert(id, listener);
        true
    }

    /// Remove a listener. Returns false if the id was never registered.
    pub fn unsubscribe(&self, id: &ListenerId) -> bool {
        self.listeners.write().remove(id).is_some()
    }

    /// Copy of the current listener set, taken at dispatch time. Listeners
    /// subscribing after this point do not receive the in-flight
    /// notification.
    pub fn snapshot(&self) -> Vec<(ListenerId, Arc<dyn ConfigurationListener>)> {
        self.listeners
            .read()
            .iter()
            .map(|(id, listener)| (id.clone(), listener.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}
