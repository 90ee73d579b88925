//! Epitrace: temporal contact-tracing graph engine.
//!
//! Models pairwise, timestamped contact events between people and computes,
//! for a given person and contagion start time, the transitive set of people
//! who could plausibly have been exposed under an incubation-period rule.

pub mod graph;
pub mod models;

// Re-export main types
pub use graph::{
    ConfigError, ContactEdge, ContactGraph, EventStore, ExposurePropagator, PropagateConfig,
    RunState, TraceResult, VertexState, DEFAULT_INCUBATION_WINDOW,
};
pub use models::{ContactEvent, EventError};
