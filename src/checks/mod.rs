//! Probe evaluation.
//!
//! One module per probe kind:
//! - State: reachability and device-state classification
//! - Attribute: attribute reads
//! - Command: command invocations
//! - Property: device property reads
//!
//! # Failure semantics
//!
//! All probe evaluation follows these rules:
//! - Missing endpoint id, failed connect, unreadable state: hard failure
//! - State in the off or fault set: hard failure, message `<state> STATE`
//! - State in the alarm set: soft failure, evaluation continues
//! - Unreadable or empty attribute: hard failure, message `Empty Attribute`
//! - Failed command: hard failure, message is the bare command name
//! - Missing or unreadable property: tolerated, never a failure
//!
//! Probe evaluation never panics and never propagates an error; every
//! failure is converted into a [`ProbeOutcome`] for the worker to fold into
//! the item's verdict fields. A hard failure stops the item; later probes
//! are not evaluated.

pub mod attribute;
pub mod command;
pub mod property;
pub mod state;

use tracing::warn;

use crate::endpoint::EndpointClient;
use crate::engine::classify::ClassificationConfig;
use crate::{CheckerItem, ProbeKind, ProbeSpec};

/// Outcome of evaluating a single probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The probe verified its fact.
    Pass,
    /// Soft failure: diagnostics are recorded, evaluation continues.
    Warn(String),
    /// Hard failure: the item is deactivated and evaluation stops.
    Fail(String),
}

/// Evaluate one item in place.
///
/// Probes run strictly in array order. The first hard failure deactivates
/// the item, records the failing probe's name and message, and skips every
/// remaining probe. Soft failures overwrite the diagnostic fields and keep
/// going, so the last one recorded stays visible on an active item.
pub fn evaluate_item(
    item: &mut CheckerItem,
    client: &dyn EndpointClient,
    config: &ClassificationConfig,
) {
    let mut active = true;
    let mut error_source = None;
    let mut message = None;

    for probe in &item.probes {
        match evaluate_probe(probe, client, config) {
            ProbeOutcome::Pass => {}
            ProbeOutcome::Warn(text) => {
                error_source = Some(probe.name.clone());
                message = Some(text);
            }
            ProbeOutcome::Fail(text) => {
                warn!(
                    item = %item.label,
                    probe = %probe.name,
                    reason = %text,
                    "validity check failed"
                );
                active = false;
                error_source = Some(probe.name.clone());
                message = Some(text);
                break;
            }
        }
    }

    item.active = active;
    item.error_source = error_source;
    item.message = message;
}

/// Evaluate a single probe against its endpoint.
fn evaluate_probe(
    probe: &ProbeSpec,
    client: &dyn EndpointClient,
    config: &ClassificationConfig,
) -> ProbeOutcome {
    let endpoint = match state::connect(client, probe) {
        Ok(endpoint) => endpoint,
        Err(outcome) => return outcome,
    };

    // An alarm-classified state is remembered but does not stop the probe;
    // the body still runs and a body failure overrides the warning.
    let mut warning = None;
    match state::check_state(endpoint.as_ref(), config) {
        ProbeOutcome::Pass => {}
        ProbeOutcome::Warn(text) => warning = Some(text),
        ProbeOutcome::Fail(text) => return ProbeOutcome::Fail(text),
    }

    let body = match &probe.body {
        ProbeKind::Attribute(name) => attribute::check_attribute(endpoint.as_ref(), name),
        ProbeKind::Command(name) => command::check_command(endpoint.as_ref(), name),
        ProbeKind::Property(name) => property::check_property(endpoint.as_ref(), name),
        ProbeKind::Reachability => ProbeOutcome::Pass,
    };

    match body {
        ProbeOutcome::Pass => match warning {
            Some(text) => ProbeOutcome::Warn(text),
            None => ProbeOutcome::Pass,
        },
        other => other,
    }
}
