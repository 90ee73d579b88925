//! Temporal exposure propagation.
//!
//! This is not a minimum-distance search: the value relaxed at each step is
//! a time, and edge admissibility is an inequality against a threshold
//! rather than a sum comparison. A person exposed at time `t` can only pass
//! the contagion on through contacts at or after `t + incubation_window`.
//! The min-priority frontier still finalizes each vertex at its earliest
//! possible exposure time, because processing proceeds in non-decreasing
//! order of exposure time and thresholds are monotonic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::PropagateConfig;
use super::contacts::ContactGraph;
use super::state::RunState;

/// Entry in the priority frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    person: String,
    /// Exposure time at the moment the entry was pushed.
    time: i64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (earlier exposure = higher priority)
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.person.cmp(&self.person))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of an exposure propagation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResult {
    /// Earliest exposure time for each exposed person.
    pub exposures: HashMap<String, i64>,
    /// Vertices finalized during the traversal.
    pub visited_count: usize,
    /// Time taken in milliseconds.
    pub time_ms: u64,
}

impl TraceResult {
    /// The exposure set. Never contains the trace source.
    pub fn exposed(&self) -> HashSet<String> {
        self.exposures.keys().cloned().collect()
    }

    /// Checks whether `person` is in the exposure set.
    pub fn is_exposed(&self, person: &str) -> bool {
        self.exposures.contains_key(person)
    }

    /// Earliest exposure time for `person`, if exposed.
    pub fn earliest_exposure(&self, person: &str) -> Option<i64> {
        self.exposures.get(person).copied()
    }

    /// Exposed persons in ascending order of exposure time.
    pub fn timeline(&self) -> Vec<(String, i64)> {
        let mut ordered: Vec<(String, i64)> = self
            .exposures
            .iter()
            .map(|(person, &time)| (person.clone(), time))
            .collect();

        ordered.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        ordered
    }

    /// Number of exposed persons.
    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    /// Checks whether nobody was exposed.
    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }
}

/// Exposure propagation over a contact graph.
///
/// Computes the transitive set of persons reachable from a contagious
/// source under the incubation-window admissibility rule.
pub struct ExposurePropagator {
    config: PropagateConfig,
}

impl ExposurePropagator {
    /// Creates a new propagator.
    pub fn new(config: PropagateConfig) -> Self {
        Self { config }
    }

    /// Creates a new propagator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PropagateConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &PropagateConfig {
        &self.config
    }

    /// Computes the exposure set from `source`, contagious at
    /// `time_of_contagion`.
    ///
    /// An unknown source yields an empty result, not an error. The source
    /// itself is excluded from the result set by definition.
    pub fn compute(
        &self,
        graph: &ContactGraph,
        source: &str,
        time_of_contagion: i64,
    ) -> TraceResult {
        let start = Instant::now();

        let mut run = RunState::new();
        let mut finalized: HashSet<String> = HashSet::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();

        run.seed_source(source, time_of_contagion);

        // Direct contacts of the source qualify at the contagion time
        // itself; the incubation window applies only to onward hops.
        for edge in graph.neighbors(source) {
            if edge.time < time_of_contagion {
                continue;
            }
            self.relax(&mut run, &mut frontier, &edge.other, edge.time);
        }

        while let Some(FrontierEntry { person, time }) = frontier.pop() {
            if finalized.contains(&person) {
                continue;
            }
            // Stale entry: a later push already recorded an earlier time
            if run.earliest_exposure(&person) != Some(time) {
                continue;
            }
            finalized.insert(person.clone());

            let threshold = time + self.config.incubation_window;

            for edge in graph.neighbors(&person) {
                // The source never re-enters the exposure set
                if edge.other == source {
                    continue;
                }
                if edge.time < threshold {
                    continue;
                }
                self.relax(&mut run, &mut frontier, &edge.other, edge.time);
            }
        }

        let visited_count = finalized.len();
        let exposures = run.into_exposures();

        debug!(
            "Contact trace from {} at {}: {} exposed, {} visited in {}ms",
            source,
            time_of_contagion,
            exposures.len(),
            visited_count,
            start.elapsed().as_millis()
        );

        TraceResult {
            exposures,
            visited_count,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Marks `person` exposed at `time` and queues them, if this improves
    /// on their currently recorded exposure.
    fn relax(
        &self,
        run: &mut RunState,
        frontier: &mut BinaryHeap<FrontierEntry>,
        person: &str,
        time: i64,
    ) {
        let state = run.get(person);
        let improves = !state.exposed
            || state
                .earliest_exposure
                .map(|earliest| time < earliest)
                .unwrap_or(true);

        if improves {
            run.expose(person, time);
            frontier.push(FrontierEntry {
                person: person.to_string(),
                time,
            });
        }
    }
}
