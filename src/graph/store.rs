//! Contact event storage with a symmetric adjacency index.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ContactEvent;

/// A traversable adjacency entry: the other participant and the contact time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEdge {
    /// The other participant in the contact.
    pub other: String,
    /// Timestamp of the contact.
    pub time: i64,
}

/// In-memory record of all contact events.
///
/// Every event is held once in a dedup set and indexed under both endpoints,
/// so adjacency queries from either side are a single lookup. The set of
/// known persons is exactly the set of distinct participants across all
/// stored events.
#[derive(Debug, Default)]
pub struct EventStore {
    /// Adjacency index: person -> events touching them.
    adjacency: HashMap<String, Vec<ContactEdge>>,
    /// Unordered-pair identity set for duplicate detection.
    events: HashSet<ContactEvent>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event unless one with the same unordered pair and
    /// timestamp is already stored.
    ///
    /// Duplicate insertion is a silent no-op; returns `false` when the
    /// event was already present.
    pub fn add_event(&mut self, event: ContactEvent) -> bool {
        if self.events.contains(&event) {
            debug!(
                "Ignoring duplicate contact event {} <-> {} at {}",
                event.person_a(),
                event.person_b(),
                event.time()
            );
            return false;
        }

        self.adjacency
            .entry(event.person_a().to_string())
            .or_default()
            .push(ContactEdge {
                other: event.person_b().to_string(),
                time: event.time(),
            });
        self.adjacency
            .entry(event.person_b().to_string())
            .or_default()
            .push(ContactEdge {
                other: event.person_a().to_string(),
                time: event.time(),
            });

        self.events.insert(event);
        true
    }

    /// All events touching `person`, in no guaranteed order.
    ///
    /// Empty for persons with no recorded events.
    pub fn events_for(&self, person: &str) -> &[ContactEdge] {
        self.adjacency
            .get(person)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over every person known to the store.
    pub fn persons(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|person| person.as_str())
    }

    /// Checks whether `person` participates in any stored event.
    pub fn contains_person(&self, person: &str) -> bool {
        self.adjacency.contains_key(person)
    }

    /// Number of distinct stored events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of distinct persons across all stored events.
    pub fn person_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Checks whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
