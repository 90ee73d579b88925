//! Symmetric contact queries over the event store.

use std::collections::HashSet;

use crate::models::ContactEvent;

use super::propagate::ExposurePropagator;
use super::store::{ContactEdge, EventStore};

/// Contact graph over the event store.
///
/// Answers direct-contact queries (who, when) and drives exposure traces.
/// All queries degrade to empty results for unknown persons; nothing here
/// errors on absence.
#[derive(Debug, Default)]
pub struct ContactGraph {
    store: EventStore,
}

impl ContactGraph {
    /// Creates an empty contact graph with no populated traces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact graph pre-populated with the given events.
    pub fn with_traces(traces: impl IntoIterator<Item = ContactEvent>) -> Self {
        let mut graph = Self::new();
        for trace in traces {
            graph.add_trace(trace);
        }
        graph
    }

    /// Records a contact event.
    ///
    /// Re-adding an event with the same unordered pair and timestamp is a
    /// no-op, so re-ingesting overlapping trace data is idempotent.
    pub fn add_trace(&mut self, event: ContactEvent) {
        self.store.add_event(event);
    }

    /// Read access to the underlying event store.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// All timestamps at which `a` and `b` were in direct contact, in
    /// ascending order with no duplicates.
    ///
    /// Empty if the two never met or either person is unknown.
    pub fn contact_times(&self, a: &str, b: &str) -> Vec<i64> {
        let mut times: Vec<i64> = self
            .store
            .events_for(a)
            .iter()
            .filter(|edge| edge.other == b)
            .map(|edge| edge.time)
            .collect();

        times.sort_unstable();
        times.dedup();
        times
    }

    /// All persons with at least one recorded direct contact with `person`.
    pub fn direct_contacts(&self, person: &str) -> HashSet<String> {
        self.store
            .events_for(person)
            .iter()
            .map(|edge| edge.other.clone())
            .collect()
    }

    /// Direct contacts of `person` at or after `timestamp` (inclusive).
    pub fn direct_contacts_after(&self, person: &str, timestamp: i64) -> HashSet<String> {
        self.store
            .events_for(person)
            .iter()
            .filter(|edge| edge.time >= timestamp)
            .map(|edge| edge.other.clone())
            .collect()
    }

    /// Traversal primitive: every `(other, time)` contact touching `person`.
    pub fn neighbors(&self, person: &str) -> &[ContactEdge] {
        self.store.events_for(person)
    }

    /// Transitive exposure set originating from `person`, who became
    /// contagious at `time_of_contagion`, under the default incubation
    /// window. The returned set never contains `person` itself.
    pub fn contact_trace(&self, person: &str, time_of_contagion: i64) -> HashSet<String> {
        ExposurePropagator::with_defaults()
            .compute(self, person, time_of_contagion)
            .exposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(a: &str, b: &str, time: i64) -> ContactEvent {
        ContactEvent::new(a, b, time).unwrap()
    }

    fn build_test_graph() -> ContactGraph {
        ContactGraph::with_traces([
            event("Anna", "Sanni", 100),
            event("Anna", "Sanni", 300),
            event("Anna", "Matt", 150),
            event("Sanni", "Matt", 120),
        ])
    }

    #[test]
    fn test_contact_times_ascending() {
        let mut graph = ContactGraph::new();
        graph.add_trace(event("Anna", "Sanni", 300));
        graph.add_trace(event("Anna", "Sanni", 100));
        graph.add_trace(event("Anna", "Sanni", 200));

        assert_eq!(graph.contact_times("Anna", "Sanni"), vec![100, 200, 300]);
    }

    #[test]
    fn test_contact_times_symmetric() {
        let graph = build_test_graph();

        assert_eq!(
            graph.contact_times("Anna", "Sanni"),
            graph.contact_times("Sanni", "Anna")
        );
        assert_eq!(graph.contact_times("Anna", "Matt"), vec![150]);
        assert_eq!(graph.contact_times("Matt", "Anna"), vec![150]);
    }

    #[test]
    fn test_contact_times_idempotent_insert() {
        let mut graph = ContactGraph::new();
        graph.add_trace(event("Anna", "Sanni", 100));
        graph.add_trace(event("Anna", "Sanni", 100));

        assert_eq!(graph.contact_times("Anna", "Sanni"), vec![100]);
    }

    #[test]
    fn test_contact_times_unknown_person() {
        let graph = build_test_graph();

        assert!(graph.contact_times("Anna", "Nobody").is_empty());
        assert!(graph.contact_times("Nobody", "Anna").is_empty());
        assert!(graph.contact_times("Nobody", "NobodyElse").is_empty());
    }

    #[test]
    fn test_direct_contacts() {
        let graph = build_test_graph();

        let contacts = graph.direct_contacts("Anna");
        assert_eq!(contacts.len(), 2);
        assert!(contacts.contains("Sanni"));
        assert!(contacts.contains("Matt"));

        assert!(graph.direct_contacts("Nobody").is_empty());
    }

    #[test]
    fn test_direct_contacts_after() {
        let graph = build_test_graph();

        // Inclusive lower bound: the event at exactly 150 qualifies
        let contacts = graph.direct_contacts_after("Anna", 150);
        assert_eq!(contacts.len(), 2);
        assert!(contacts.contains("Sanni")); // at 300
        assert!(contacts.contains("Matt")); // at 150

        let contacts = graph.direct_contacts_after("Anna", 151);
        assert_eq!(contacts.len(), 1);
        assert!(contacts.contains("Sanni"));
    }

    #[test]
    fn test_direct_contacts_after_all_too_early() {
        let mut graph = ContactGraph::new();
        graph.add_trace(event("Anna", "Sanni", 100));

        assert!(graph.direct_contacts_after("Anna", 150).is_empty());
    }

    #[test]
    fn test_neighbors() {
        let graph = build_test_graph();

        let neighbors = graph.neighbors("Matt");
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors
            .iter()
            .any(|edge| edge.other == "Anna" && edge.time == 150));
        assert!(neighbors
            .iter()
            .any(|edge| edge.other == "Sanni" && edge.time == 120));
    }

    #[test]
    fn test_with_traces_matches_incremental() {
        let bulk = build_test_graph();

        let mut incremental = ContactGraph::new();
        incremental.add_trace(event("Anna", "Sanni", 100));
        incremental.add_trace(event("Anna", "Sanni", 300));
        incremental.add_trace(event("Anna", "Matt", 150));
        incremental.add_trace(event("Sanni", "Matt", 120));

        assert_eq!(bulk.store().event_count(), incremental.store().event_count());
        assert_eq!(
            bulk.contact_times("Anna", "Sanni"),
            incremental.contact_times("Anna", "Sanni")
        );
    }
}
