//! Command probe checks.

use tracing::debug;

use crate::checks::ProbeOutcome;
use crate::endpoint::RemoteEndpoint;

/// Invoke the named command with no arguments, discarding its result.
///
/// On failure the recorded message is the bare command name.
pub fn check_command(endpoint: &dyn RemoteEndpoint, name: &str) -> ProbeOutcome {
    match endpoint.invoke_command(name) {
        Ok(()) => ProbeOutcome::Pass,
        Err(err) => {
            debug!(command = %name, error = %err, "command invocation failed");
            ProbeOutcome::Fail(name.to_string())
        }
    }
}
