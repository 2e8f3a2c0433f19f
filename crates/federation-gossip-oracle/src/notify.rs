//! Detached per-listener notification fan-out
//!
//! Each listener gets its own spawned task: one failing or panicking
//! listener cannot abort delivery to the rest, and the dispatching context
//! never waits for any of them. There is no ordering, retry, or timeout.

use crate::listener::{ConfigurationListener, ListenerId};
use federation_gossip_core::ConfigurationRecord;
use std::sync::Arc;
use tracing::{error, trace};

/// Fire one notification task per listener.
///
/// Must run inside a tokio runtime; the spawned tasks outlive this call.
pub fn dispatch(
    listeners: Vec<(ListenerId, Arc<dyn ConfigurationListener>)>,
    config: ConfigurationRecord,
) {
    for (id, listener) in listeners {
        let config = config.clone();
        tokio::spawn(async move {
            trace!(listener = %id, version = config.version, "notifying listener");
            let version = config.version;
            if let Err(e) = listener.on_configuration_change(config).await {
                error!(
                    listener = %id,
                    version,
                    error = %e,
                    "subscriber notification failure"
                );
            }
        });
    }
}
