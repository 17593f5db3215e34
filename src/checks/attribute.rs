//! Attribute probe checks.

use tracing::debug;

use crate::checks::ProbeOutcome;
use crate::endpoint::RemoteEndpoint;

/// Message recorded when an attribute is unreadable or empty.
pub const EMPTY_ATTRIBUTE: &str = "Empty Attribute";

/// Read the named attribute and verify it carries data.
///
/// A read error and a successful read of an empty value are the same hard
/// failure; the verdict does not distinguish the two paths.
pub fn check_attribute(endpoint: &dyn RemoteEndpoint, name: &str) -> ProbeOutcome {
    match endpoint.read_attribute(name) {
        Ok(value) if !value.is_empty() => ProbeOutcome::Pass,
        Ok(_) => {
            debug!(attribute = %name, "attribute read returned no data");
            ProbeOutcome::Fail(EMPTY_ATTRIBUTE.to_string())
        }
        Err(err) => {
            debug!(attribute = %name, error = %err, "attribute read failed");
            ProbeOutcome::Fail(EMPTY_ATTRIBUTE.to_string())
        }
    }
}
