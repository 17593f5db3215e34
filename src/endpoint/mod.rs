//! Remote endpoint abstraction layer.
//!
//! Provides the seam between the checker and whatever control-system client
//! actually talks to the devices:
//! - `EndpointClient`: resolves an endpoint id to a live connection
//! - `RemoteEndpoint`: one connected device (state, attributes, properties,
//!   commands)
//! - `AttributeValue`: a read attribute value, distinguishing empty reads
//! - `EndpointError`: everything that can go wrong on the remote side
//!
//! The checker consumes every `EndpointError` as a value and converts it into
//! verdict fields; no error from this module ever crosses the worker pool.
//! Remote calls are assumed to carry their own client-side timeout.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a remote endpoint client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EndpointError {
    /// No endpoint address is configured for the probe.
    #[error("no endpoint address configured")]
    Unresolved,
    /// The endpoint could not be reached.
    #[error("failed to connect to {endpoint}: {reason}")]
    Connection { endpoint: String, reason: String },
    /// The device state could not be read.
    #[error("failed to read device state: {reason}")]
    StateRead { reason: String },
    /// The named attribute could not be read.
    #[error("failed to read attribute {name}: {reason}")]
    AttributeRead { name: String, reason: String },
    /// The named property is not defined on the device.
    #[error("property {name} is not defined")]
    PropertyMissing { name: String },
    /// The named property exists but could not be read.
    #[error("failed to read property {name}: {reason}")]
    PropertyRead { name: String, reason: String },
    /// The named command failed or does not exist.
    #[error("command {name} failed: {reason}")]
    CommandFailed { name: String, reason: String },
}

/// Value read from a device attribute.
///
/// An attribute read can succeed and still deliver nothing; the checker
/// treats such reads the same as a failed read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// The read delivered no data.
    Empty,
    /// A single scalar value.
    Scalar(String),
    /// An array of values.
    Array(Vec<String>),
}

impl AttributeValue {
    /// Whether the read delivered no usable data.
    pub fn is_empty(&self) -> bool {
        match self {
            AttributeValue::Empty => true,
            AttributeValue::Scalar(value) => value.is_empty(),
            AttributeValue::Array(values) => values.is_empty(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Empty => write!(f, "<empty>"),
            AttributeValue::Scalar(value) => write!(f, "{}", value),
            AttributeValue::Array(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// A live connection to one remote device.
///
/// Handles are owned by the worker that obtained them and dropped as soon as
/// the probe is finished; nothing is cached across probes.
pub trait RemoteEndpoint {
    /// Read the device's current state string (e.g. "ON", "ALARM").
    fn state(&self) -> Result<String, EndpointError>;

    /// Read the named attribute.
    fn read_attribute(&self, name: &str) -> Result<AttributeValue, EndpointError>;

    /// Read the named device property.
    fn read_property(&self, name: &str) -> Result<Vec<String>, EndpointError>;

    /// Invoke the named command with no arguments, discarding its result.
    fn invoke_command(&self, name: &str) -> Result<(), EndpointError>;
}

/// Client able to resolve endpoint ids into live device connections.
///
/// Implementations wrap the actual control-system client. A single client
/// instance is shared by every worker in a pool, so it must be `Send + Sync`;
/// connection handles themselves are not shared.
pub trait EndpointClient: Send + Sync {
    /// Connect to the endpoint with the given id.
    fn connect(&self, endpoint_id: &str) -> Result<Box<dyn RemoteEndpoint>, EndpointError>;
}
