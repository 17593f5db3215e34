//! devcheck library
//!
//! Concurrent validity checking for device-backed acquisition sources.
//!
//! A batch of [`CheckerItem`]s, each a named list of [`ProbeSpec`]s against
//! remote device endpoints, is drained by a pool of worker threads. Every
//! item is reduced to a single verdict: `active` plus the diagnostic
//! `error_source`/`message` pair. The higher-level selection engine that
//! builds the batches and consumes the verdicts lives outside this crate,
//! as does the client that actually talks to the devices (injected through
//! the [`endpoint::EndpointClient`] trait).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use devcheck::endpoint::EndpointClient;
//! use devcheck::{validate_batch, CheckerItem, ClassificationConfig, ProbeSpec};
//!
//! fn check(client: Arc<dyn EndpointClient>) {
//!     let mut item = CheckerItem::new("ccd-camera");
//!     item.push_probe(ProbeSpec::attribute("image", Some("id11/ccd/1"), "Image"));
//!     item.push_probe(ProbeSpec::command("prepare", Some("id11/ccd/1"), "Prepare"));
//!
//!     let verdicts = validate_batch(vec![item], 4, client, &ClassificationConfig::default());
//!     for item in &verdicts {
//!         println!("{}: valid={}", item.label, item.is_valid());
//!     }
//! }
//! ```

pub mod checks;
pub mod endpoint;
pub mod engine;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use endpoint::EndpointClient;
use engine::worker::WorkerPool;

// Re-exports for public API
pub use engine::classify::{ClassificationConfig, StateClass};
pub use engine::summary::BatchSummary;
pub use engine::worker::{Worker, WorkerPool as Pool, DEFAULT_WORKER_COUNT};

/// The fact a probe verifies about its endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProbeKind {
    /// Read the named attribute; an unreadable or empty value is a failure.
    Attribute(String),
    /// Read the named device property; a missing property is tolerated.
    Property(String),
    /// Invoke the named command with no arguments.
    Command(String),
    /// No body; only reachability and state are checked.
    Reachability,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Attribute(name) => write!(f, "attribute {}", name),
            ProbeKind::Property(name) => write!(f, "property {}", name),
            ProbeKind::Command(name) => write!(f, "command {}", name),
            ProbeKind::Reachability => write!(f, "reachability"),
        }
    }
}

/// One verifiable fact about one remote device endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSpec {
    /// Probe name, unique within its item; reported as `error_source` on
    /// failure.
    pub name: String,
    /// Endpoint the probe targets. A missing id is a hard failure.
    pub endpoint_id: Option<String>,
    /// What to verify once the endpoint is reachable.
    pub body: ProbeKind,
}

impl ProbeSpec {
    /// Create a probe with an explicit body.
    pub fn new(name: &str, endpoint_id: Option<&str>, body: ProbeKind) -> Self {
        ProbeSpec {
            name: name.to_string(),
            endpoint_id: endpoint_id.map(|id| id.to_string()),
            body,
        }
    }

    /// Probe that reads an attribute.
    pub fn attribute(name: &str, endpoint_id: Option<&str>, attribute: &str) -> Self {
        Self::new(name, endpoint_id, ProbeKind::Attribute(attribute.to_string()))
    }

    /// Probe that reads a device property.
    pub fn property(name: &str, endpoint_id: Option<&str>, property: &str) -> Self {
        Self::new(name, endpoint_id, ProbeKind::Property(property.to_string()))
    }

    /// Probe that invokes a command.
    pub fn command(name: &str, endpoint_id: Option<&str>, command: &str) -> Self {
        Self::new(name, endpoint_id, ProbeKind::Command(command.to_string()))
    }

    /// Probe that only checks reachability and state.
    pub fn reachability(name: &str, endpoint_id: Option<&str>) -> Self {
        Self::new(name, endpoint_id, ProbeKind::Reachability)
    }
}

/// A named batch of probes standing for one configuration element.
///
/// Created by the producer, mutated by exactly one worker during a run, and
/// read back by the consumer after the pool is joined. The first hard probe
/// failure flips `active` to false and skips the remaining probes; a soft
/// failure only records `error_source`/`message` and evaluation continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerItem {
    /// Name of the configuration element this item stands for.
    pub label: String,
    /// Probes evaluated in order.
    pub probes: Vec<ProbeSpec>,
    /// Whether the element is safe to include. Starts true.
    pub active: bool,
    /// Name of the probe that produced the current diagnostics.
    pub error_source: Option<String>,
    /// Human-readable failure or warning text.
    pub message: Option<String>,
}

impl CheckerItem {
    /// Create an item with no probes yet.
    pub fn new(label: &str) -> Self {
        CheckerItem {
            label: label.to_string(),
            probes: Vec::new(),
            active: true,
            error_source: None,
            message: None,
        }
    }

    /// Append a probe to the item.
    pub fn push_probe(&mut self, probe: ProbeSpec) {
        self.probes.push(probe);
    }

    /// Append a probe, builder style.
    pub fn with_probe(mut self, probe: ProbeSpec) -> Self {
        self.probes.push(probe);
        self
    }

    /// Whether the item survived evaluation with no hard failure.
    pub fn is_valid(&self) -> bool {
        self.active
    }

    /// Diagnostic pair recorded by the last failure, if any.
    pub fn diagnostics(&self) -> Option<(&str, &str)> {
        match (&self.error_source, &self.message) {
            (Some(source), Some(message)) => Some((source.as_str(), message.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for CheckerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            match self.diagnostics() {
                Some((source, message)) => {
                    write!(f, "{}: valid ({}: {})", self.label, source, message)
                }
                None => write!(f, "{}: valid", self.label),
            }
        } else {
            match self.diagnostics() {
                Some((source, message)) => {
                    write!(f, "{}: invalid ({}: {})", self.label, source, message)
                }
                None => write!(f, "{}: invalid", self.label),
            }
        }
    }
}

/// Validate a batch of items with a pool of `worker_count` workers.
///
/// Enqueues the whole batch, starts the pool, joins it, and returns the
/// mutated items. Completion order across items is unspecified.
pub fn validate_batch(
    items: Vec<CheckerItem>,
    worker_count: usize,
    client: Arc<dyn EndpointClient>,
    config: &ClassificationConfig,
) -> Vec<CheckerItem> {
    WorkerPool::start(items, worker_count, client, config.clone()).join()
}
