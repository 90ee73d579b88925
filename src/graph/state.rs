//! Per-run vertex traversal state.

use std::collections::HashMap;

/// Traversal state for one person during a propagation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexState {
    /// Earliest time the person could have been exposed.
    ///
    /// `None` until a qualifying contact is found.
    pub earliest_exposure: Option<i64>,
    /// Whether the person belongs to the exposure set.
    pub exposed: bool,
}

/// Vertex state registry for a single propagation run.
///
/// A fresh registry is constructed for every run, so no run can observe
/// stale state from a previous one. Entries are created lazily the first
/// time a person is touched by the traversal. Mid-run reads from outside
/// the propagator carry no consistency guarantee.
#[derive(Debug, Default)]
pub struct RunState {
    states: HashMap<String, VertexState>,
}

impl RunState {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the registry and pre-seeds default state for `persons`.
    pub fn reset(&mut self, persons: impl IntoIterator<Item = String>) {
        self.states.clear();
        for person in persons {
            self.states.insert(person, VertexState::default());
        }
    }

    /// State for `person`, defaulting to never-exposed.
    pub fn get(&self, person: &str) -> VertexState {
        self.states.get(person).cloned().unwrap_or_default()
    }

    /// Replaces the state for `person`.
    pub fn set(&mut self, person: impl Into<String>, state: VertexState) {
        self.states.insert(person.into(), state);
    }

    /// Earliest exposure recorded for `person`, if any.
    pub fn earliest_exposure(&self, person: &str) -> Option<i64> {
        self.states
            .get(person)
            .and_then(|state| state.earliest_exposure)
    }

    /// Seeds the source vertex.
    ///
    /// The exposure clock starts at the contagion time, but the source
    /// itself never joins the exposure set.
    pub fn seed_source(&mut self, source: &str, time_of_contagion: i64) {
        self.states.insert(
            source.to_string(),
            VertexState {
                earliest_exposure: Some(time_of_contagion),
                exposed: false,
            },
        );
    }

    /// Marks `person` exposed at `time`.
    pub fn expose(&mut self, person: &str, time: i64) {
        let state = self.states.entry(person.to_string()).or_default();
        state.exposed = true;
        state.earliest_exposure = Some(time);
    }

    /// Consumes the registry into `(person, earliest exposure)` pairs for
    /// every exposed person.
    pub fn into_exposures(self) -> HashMap<String, i64> {
        self.states
            .into_iter()
            .filter(|(_, state)| state.exposed)
            .filter_map(|(person, state)| {
                state.earliest_exposure.map(|time| (person, time))
            })
            .collect()
    }

    /// Number of persons touched by the run so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Checks whether the run has touched no persons.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let run = RunState::new();
        let state = run.get("Anna");

        assert_eq!(state.earliest_exposure, None);
        assert!(!state.exposed);
        assert!(run.is_empty());
    }

    #[test]
    fn test_seed_source_is_not_exposed() {
        let mut run = RunState::new();
        run.seed_source("Anna", 130);

        let state = run.get("Anna");
        assert_eq!(state.earliest_exposure, Some(130));
        assert!(!state.exposed);
    }

    #[test]
    fn test_expose() {
        let mut run = RunState::new();
        run.expose("Sanni", 200);

        let state = run.get("Sanni");
        assert!(state.exposed);
        assert_eq!(state.earliest_exposure, Some(200));
        assert_eq!(run.earliest_exposure("Sanni"), Some(200));
    }

    #[test]
    fn test_reset_pre_seeds() {
        let mut run = RunState::new();
        run.expose("Sanni", 200);

        run.reset(["Anna".to_string(), "Sanni".to_string()]);
        assert_eq!(run.len(), 2);
        assert_eq!(run.get("Sanni"), VertexState::default());
    }

    #[test]
    fn test_into_exposures_skips_source() {
        let mut run = RunState::new();
        run.seed_source("Anna", 100);
        run.expose("Sanni", 200);
        run.expose("Matt", 300);

        let exposures = run.into_exposures();
        assert_eq!(exposures.len(), 2);
        assert!(!exposures.contains_key("Anna"));
        assert_eq!(exposures["Sanni"], 200);
        assert_eq!(exposures["Matt"], 300);
    }

    #[test]
    fn test_set_and_get() {
        let mut run = RunState::new();
        run.set(
            "Anna",
            VertexState {
                earliest_exposure: Some(10),
                exposed: true,
            },
        );

        assert_eq!(run.get("Anna").earliest_exposure, Some(10));
        assert!(run.get("Anna").exposed);
    }
}
