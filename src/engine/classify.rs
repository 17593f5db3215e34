//! Device state classification.
//!
//! Maps a device's state string onto the severity it carries for validity
//! checking. Three reconfigurable sets drive the decision:
//! - off states and fault states make a probe fail hard
//! - alarm states only record a warning
//! - anything else has no state-based effect
//!
//! All three sets may be emptied, which disables state-based classification
//! entirely.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Severity class of a device state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    /// The device is switched off; the probe fails hard.
    Off,
    /// The device is faulted; the probe fails hard.
    Fault,
    /// The device is alarming; the probe records a warning and continues.
    Alarm,
    /// The state carries no special meaning for validity checking.
    Unclassified,
}

/// Configurable mapping from device state strings to severity classes.
///
/// One config is handed to each worker at construction and treated as
/// read-only for the duration of a run. State strings are matched exactly,
/// case included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub off_states: HashSet<String>,
    pub alarm_states: HashSet<String>,
    pub fault_states: HashSet<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        ClassificationConfig {
            off_states: HashSet::from(["OFF".to_string()]),
            alarm_states: HashSet::from(["ALARM".to_string()]),
            fault_states: HashSet::from(["FAULT".to_string()]),
        }
    }
}

impl ClassificationConfig {
    /// Config with all three sets empty, disabling state classification.
    pub fn disabled() -> Self {
        ClassificationConfig {
            off_states: HashSet::new(),
            alarm_states: HashSet::new(),
            fault_states: HashSet::new(),
        }
    }

    /// Replace the set of off states.
    pub fn with_off_states(mut self, states: &[&str]) -> Self {
        self.off_states = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the set of alarm states.
    pub fn with_alarm_states(mut self, states: &[&str]) -> Self {
        self.alarm_states = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the set of fault states.
    pub fn with_fault_states(mut self, states: &[&str]) -> Self {
        self.fault_states = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Classify a device state string.
    ///
    /// Hard classes win over the soft one: a state listed both as off (or
    /// fault) and as alarm classifies as off (or fault).
    pub fn classify(&self, state: &str) -> StateClass {
        if self.off_states.contains(state) {
            StateClass::Off
        } else if self.fault_states.contains(state) {
            StateClass::Fault
        } else if self.alarm_states.contains(state) {
            StateClass::Alarm
        } else {
            StateClass::Unclassified
        }
    }
}
