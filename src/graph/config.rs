//! Exposure propagation configuration.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Default incubation window, in the same unit as event timestamps.
///
/// Minimum time that must elapse between a person's own exposure and their
/// ability to expose someone else.
pub const DEFAULT_INCUBATION_WINDOW: i64 = 60;

/// Configuration for exposure propagation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropagateConfig {
    /// Incubation window applied to onward transmission.
    pub incubation_window: i64,
}

impl Default for PropagateConfig {
    fn default() -> Self {
        Self {
            incubation_window: DEFAULT_INCUBATION_WINDOW,
        }
    }
}

impl PropagateConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the incubation window.
    pub fn with_incubation_window(mut self, window: i64) -> Self {
        self.incubation_window = window;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.incubation_window < 0 {
            return Err(ConfigError::NegativeIncubationWindow);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NegativeIncubationWindow,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIncubationWindow => {
                write!(f, "Incubation window must not be negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
