//! Gossiped record types for the federation protocol
//!
//! Every type here travels inside gossip snapshots and therefore derives
//! serde traits; the wire encoding itself belongs to the transport layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

// =============================================================================
// IDENTITY TYPES
// =============================================================================

/// Opaque identifier of one independently-operated cluster in the federation.
#[derive(
    Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct ClusterId(pub String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity key of a gateway record: one cluster exposes a gateway at one
/// network address. A snapshot holds at most one record per key.
#[derive(
    Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct GatewayKey {
    pub cluster: ClusterId,
    pub address: SocketAddr,
}

impl fmt::Display for GatewayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cluster, self.address)
    }
}

// =============================================================================
// GATEWAY LIVENESS
// =============================================================================

/// Liveness of a gateway endpoint as last observed by its own cluster.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GatewayStatus {
    /// Reachable entry point into the owning cluster
    Active,
    /// Endpoint is retired or failed; kept around so the retirement gossips
    Inactive,
}

/// One gateway endpoint observation.
///
/// `version` totally orders competing observations of the same
/// [`GatewayKey`]; the transport assigns it monotonically per key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GatewayRecord {
    /// Cluster that owns the gateway
    pub cluster: ClusterId,
    /// Network identity of the gateway within that cluster
    pub address: SocketAddr,
    /// Last observed liveness
    pub status: GatewayStatus,
    /// Conflict-resolution version for this (cluster, address) key
    pub version: u64,
}

impl GatewayRecord {
    /// Identity key of this record within a snapshot.
    pub fn key(&self) -> GatewayKey {
        GatewayKey {
            cluster: self.cluster.clone(),
            address: self.address,
        }
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// The single cluster-wide configuration document.
///
/// Only `version` participates in conflict resolution; the payload fields
/// are carried verbatim to whichever replica loses the comparison.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ConfigurationRecord {
    /// Totally ordered version; higher wins during reconciliation
    pub version: u64,
    /// Clusters admitted to the federation under this configuration
    pub clusters: Vec<ClusterId>,
    /// Free-form administrator annotation
    pub comment: String,
}

impl ConfigurationRecord {
    pub fn new(version: u64, clusters: Vec<ClusterId>, comment: impl Into<String>) -> Self {
        Self {
            version,
            clusters,
            comment: comment.into(),
        }
    }
}

impl fmt::Display for ConfigurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration v{} ({} clusters)", self.version, self.clusters.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_record_key() {
        let record = GatewayRecord {
            cluster: ClusterId::new("us-west"),
            address: "10.0.0.1:30000".parse().unwrap(),
            status: GatewayStatus::Active,
            version: 3,
        };
        let key = record.key();
        assert_eq!(key.cluster, ClusterId::new("us-west"));
        assert_eq!(key.address, record.address);
        assert_eq!(key.to_string(), "us-west/10.0.0.1:30000");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = GatewayRecord {
            cluster: ClusterId::new("eu-central"),
            address: "192.168.1.7:30001".parse().unwrap(),
            status: GatewayStatus::Inactive,
            version: 12,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: GatewayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let config = ConfigurationRecord::new(
            7,
            vec![ClusterId::new("us-west"), ClusterId::new("eu-central")],
            "add eu-central",
        );
        let json = serde_json::to_string(&config).unwrap();
        let back: ConfigurationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
