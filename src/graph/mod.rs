//! Temporal contact-tracing graph engine.
//!
//! This module provides:
//! - **EventStore**: deduplicated contact events behind a symmetric adjacency index
//! - **ContactGraph**: direct-contact queries (who, when) over the store
//! - **ExposurePropagator**: time-windowed transitive exposure computation
//!
//! # Example
//!
//! ```ignore
//! use epitrace::graph::ContactGraph;
//! use epitrace::models::ContactEvent;
//!
//! let mut graph = ContactGraph::new();
//! graph.add_trace(ContactEvent::new("Anna", "Sanni", 100)?);
//! graph.add_trace(ContactEvent::new("Sanni", "Matt", 200)?);
//!
//! let exposed = graph.contact_trace("Anna", 50);
//! ```

#![allow(dead_code)]

pub mod config;
pub mod contacts;
pub mod propagate;
pub mod state;
pub mod store;

// Re-exports
pub use config::{ConfigError, PropagateConfig, DEFAULT_INCUBATION_WINDOW};
pub use contacts::ContactGraph;
pub use propagate::{ExposurePropagator, TraceResult};
pub use state::{RunState, VertexState};
pub use store::{ContactEdge, EventStore};
