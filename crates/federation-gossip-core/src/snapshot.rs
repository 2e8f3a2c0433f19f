//! Immutable gossip snapshots and the convergent merge algorithm
//!
//! A [`GossipSnapshot`] is one replica's view of the federation: the set of
//! known gateway records plus the configuration document, if any has been
//! seen. Snapshots are never mutated in place; [`GossipSnapshot::merge`]
//! produces a fresh merged snapshot together with the delta relative to the
//! pre-merge local state. Merging is commutative, associative, and
//! idempotent over the merged snapshot, which is what lets replicas apply
//! overlapping gossip in any order and still converge.

use crate::types::{ConfigurationRecord, GatewayKey, GatewayRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One replica's view of the federation gossip state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GossipSnapshot {
    /// Known gateway records, at most one per identity key
    pub gateways: BTreeMap<GatewayKey, GatewayRecord>,
    /// Cluster-wide configuration, absent until first observed
    pub configuration: Option<ConfigurationRecord>,
}

/// Result of merging an incoming snapshot into a local one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The converged snapshot; becomes the new local state
    pub merged: GossipSnapshot,
    /// Exactly the sub-state that differs from the pre-merge local snapshot
    pub delta: GossipSnapshot,
}

impl GossipSnapshot {
    /// Snapshot with no gateways and no configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot carrying a single gateway record.
    pub fn from_gateway(record: GatewayRecord) -> Self {
        Self {
            gateways: BTreeMap::from([(record.key(), record)]),
            configuration: None,
        }
    }

    /// Snapshot carrying only a configuration document.
    pub fn from_configuration(config: ConfigurationRecord) -> Self {
        Self {
            gateways: BTreeMap::new(),
            configuration: Some(config),
        }
    }

    /// True iff the snapshot carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty() && self.configuration.is_none()
    }

    /// Merge `incoming` into this snapshot.
    ///
    /// Per gateway key the higher version wins; an exact version tie keeps
    /// the local record so that re-applying known state never produces a
    /// spurious delta. The configuration with the higher version survives,
    /// absent counting as lowest. The returned delta holds exactly the
    /// records whose surviving value differs from the pre-merge local value.
    pub fn merge(&self, incoming: &GossipSnapshot) -> MergeOutcome {
        if incoming.is_empty() {
            return MergeOutcome {
                merged: self.clone(),
                delta: GossipSnapshot::empty(),
            };
        }

        let mut gateways = self.gateways.clone();
        let mut delta_gateways = BTreeMap::new();
        for (key, record) in &incoming.gateways {
            let newer = match gateways.get(key) {
                Some(local) => record.version > local.version,
                None => true,
            };
            if newer {
                gateways.insert(key.clone(), record.clone());
                delta_gateways.insert(key.clone(), record.clone());
            }
        }

        let config_newer = match (&self.configuration, &incoming.configuration) {
            (Some(local), Some(remote)) => remote.version > local.version,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        let (configuration, delta_configuration) = if config_newer {
            (incoming.configuration.clone(), incoming.configuration.clone())
        } else {
            (self.configuration.clone(), None)
        };

        MergeOutcome {
            merged: GossipSnapshot {
                gateways,
                configuration,
            },
            delta: GossipSnapshot {
                gateways: delta_gateways,
                configuration: delta_configuration,
            },
        }
    }
}

impl fmt::Display for GossipSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gateway(s)", self.gateways.len())?;
        match &self.configuration {
            Some(config) => write!(f, ", {}", config),
            None => Ok(()),
        }
    }
}
