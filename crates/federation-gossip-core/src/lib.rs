//! Federation Gossip Core Library
//!
//! This crate provides the data model and the convergent merge engine for
//! the federation gossip protocol: versioned gateway liveness records and a
//! single versioned cluster-wide configuration document, reconciled pairwise
//! until every replica holds the same snapshot.
//!
//! # Modules
//!
//! - [`types`]: Gossiped record types (ClusterId, GatewayRecord, ConfigurationRecord)
//! - [`snapshot`]: Immutable gossip snapshots and the merge algorithm

pub mod snapshot;
pub mod types;

pub use snapshot::{GossipSnapshot, MergeOutcome};
pub use types::*;
