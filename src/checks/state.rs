//! Reachability and device-state checks.
//!
//! Every probe starts here regardless of its body: the endpoint must be
//! reachable and its state must not classify as off or fault. A state that
//! cannot be read is treated the same as an endpoint that cannot be reached.

use tracing::debug;

use crate::checks::ProbeOutcome;
use crate::endpoint::{EndpointClient, RemoteEndpoint};
use crate::engine::classify::{ClassificationConfig, StateClass};
use crate::ProbeSpec;

/// Message recorded when an endpoint is missing or unreachable.
pub const CONNECTION_FAILED: &str = "Connection Failed";

/// Resolve and connect the probe's endpoint.
///
/// A probe without an endpoint id, or whose endpoint cannot be reached,
/// fails hard with [`CONNECTION_FAILED`].
pub fn connect(
    client: &dyn EndpointClient,
    probe: &ProbeSpec,
) -> Result<Box<dyn RemoteEndpoint>, ProbeOutcome> {
    let endpoint_id = match &probe.endpoint_id {
        Some(id) => id,
        None => {
            debug!(probe = %probe.name, "no endpoint configured");
            return Err(ProbeOutcome::Fail(CONNECTION_FAILED.to_string()));
        }
    };

    match client.connect(endpoint_id) {
        Ok(endpoint) => Ok(endpoint),
        Err(err) => {
            debug!(probe = %probe.name, endpoint = %endpoint_id, error = %err, "connect failed");
            Err(ProbeOutcome::Fail(CONNECTION_FAILED.to_string()))
        }
    }
}

/// Read and classify the endpoint's current state.
///
/// Off- and fault-classified states fail hard, alarm-classified states
/// warn; the message is always the state string followed by ` STATE`.
pub fn check_state(endpoint: &dyn RemoteEndpoint, config: &ClassificationConfig) -> ProbeOutcome {
    let state = match endpoint.state() {
        Ok(state) => state,
        Err(err) => {
            debug!(error = %err, "state read failed");
            return ProbeOutcome::Fail(CONNECTION_FAILED.to_string());
        }
    };

    match config.classify(&state) {
        StateClass::Off | StateClass::Fault => ProbeOutcome::Fail(format!("{} STATE", state)),
        StateClass::Alarm => ProbeOutcome::Warn(format!("{} STATE", state)),
        StateClass::Unclassified => ProbeOutcome::Pass,
    }
}
