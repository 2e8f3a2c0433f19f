//! Federation Gossip Oracle
//!
//! This crate holds the stateful side of the gossip convergence core: one
//! [`GossipOracle`] per node owns the committed snapshot, merges incoming
//! gossip through the core merge engine, and fans configuration changes out
//! to locally registered listeners.
//!
//! # Modules
//!
//! - [`listener`]: Listener identity and the notification capability trait
//! - [`registry`]: Idempotent subscriber registry
//! - [`notify`]: Detached per-listener notification fan-out
//! - [`oracle`]: The oracle store itself

pub mod listener;
pub mod notify;
pub mod oracle;
pub mod registry;

pub use listener::{ConfigurationListener, ListenerId, NotifyError};
pub use oracle::{GossipOracle, OracleStats};
pub use registry::SubscriberRegistry;
