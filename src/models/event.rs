#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures when constructing a contact event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Person identifier must not be empty")]
    EmptyPerson,

    #[error("A contact event requires two distinct persons")]
    SelfContact,
}

/// A timestamped record that two persons were in direct contact.
///
/// The pair is unordered: `{a, b}` at time `t` is the same event as `{b, a}`
/// at time `t`. The constructor normalizes endpoint order, so the derived
/// `Eq`/`Hash` implementations give unordered-pair identity and duplicate
/// detection is a plain set lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEvent {
    person_a: String,
    person_b: String,
    time: i64,
}

impl ContactEvent {
    /// Creates a validated contact event.
    ///
    /// Identifiers must be non-empty and name two distinct persons.
    /// Timestamps are in whatever unit the caller's trace data uses.
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        time: i64,
    ) -> Result<Self, EventError> {
        let a = a.into();
        let b = b.into();

        if a.is_empty() || b.is_empty() {
            return Err(EventError::EmptyPerson);
        }
        if a == b {
            return Err(EventError::SelfContact);
        }

        // Normalized order: person_a <= person_b
        let (person_a, person_b) = if a <= b { (a, b) } else { (b, a) };

        Ok(Self {
            person_a,
            person_b,
            time,
        })
    }

    /// First participant (normalized order).
    pub fn person_a(&self) -> &str {
        &self.person_a
    }

    /// Second participant (normalized order).
    pub fn person_b(&self) -> &str {
        &self.person_b
    }

    /// Timestamp of the contact.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Checks whether `person` is one of the two participants.
    pub fn involves(&self, person: &str) -> bool {
        person == self.person_a || person == self.person_b
    }

    /// Returns the other participant, if `person` is one of the two.
    pub fn other(&self, person: &str) -> Option<&str> {
        if person == self.person_a {
            Some(&self.person_b)
        } else if person == self.person_b {
            Some(&self.person_a)
        } else {
            None
        }
    }
}
