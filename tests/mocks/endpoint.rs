//! Mock endpoint client for testing without a live control system.
//!
//! Provides a configurable in-memory device registry that simulates:
//! - Healthy, alarming, faulted, and switched-off devices
//! - Unreachable endpoints and unreadable states
//! - Attributes with values, empty values, or read errors
//! - Present and missing properties and commands
//!
//! Every remote call is appended to a shared call log so tests can assert
//! which probes were actually evaluated.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use devcheck::endpoint::{AttributeValue, EndpointClient, EndpointError, RemoteEndpoint};

/// Configuration of one mock device.
#[derive(Debug, Clone)]
pub struct MockDevice {
    pub state: String,
    pub reachable: bool,
    pub state_unreadable: bool,
    pub attributes: HashMap<String, AttributeValue>,
    pub unreadable_attributes: HashSet<String>,
    pub properties: HashMap<String, Vec<String>>,
    pub unreadable_properties: HashSet<String>,
    pub commands: HashSet<String>,
}

impl Default for MockDevice {
    fn default() -> Self {
        MockDevice {
            state: "ON".to_string(),
            reachable: true,
            state_unreadable: false,
            attributes: HashMap::new(),
            unreadable_attributes: HashSet::new(),
            properties: HashMap::new(),
            unreadable_properties: HashSet::new(),
            commands: HashSet::new(),
        }
    }
}

impl MockDevice {
    /// A reachable device in the "ON" state with nothing configured.
    pub fn healthy() -> Self {
        MockDevice::default()
    }

    /// A registered but unreachable device.
    pub fn unreachable() -> Self {
        MockDevice {
            reachable: false,
            ..MockDevice::default()
        }
    }

    /// A reachable device in the given state.
    pub fn in_state(state: &str) -> Self {
        MockDevice {
            state: state.to_string(),
            ..MockDevice::default()
        }
    }

    /// A reachable device whose state read fails.
    pub fn state_unreadable() -> Self {
        MockDevice {
            state_unreadable: true,
            ..MockDevice::default()
        }
    }

    /// Add a readable attribute.
    pub fn with_attribute(mut self, name: &str, value: AttributeValue) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Add an attribute whose read raises an error.
    pub fn with_unreadable_attribute(mut self, name: &str) -> Self {
        self.unreadable_attributes.insert(name.to_string());
        self
    }

    /// Add a readable device property.
    pub fn with_property(mut self, name: &str, values: &[&str]) -> Self {
        self.properties
            .insert(name.to_string(), values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Add a property whose read raises an error.
    pub fn with_unreadable_property(mut self, name: &str) -> Self {
        self.unreadable_properties.insert(name.to_string());
        self
    }

    /// Add an invokable command.
    pub fn with_command(mut self, name: &str) -> Self {
        self.commands.insert(name.to_string());
        self
    }
}

/// In-memory endpoint client backed by a registry of mock devices.
pub struct MockEndpointClient {
    devices: HashMap<String, MockDevice>,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockEndpointClient {
    pub fn new() -> Self {
        MockEndpointClient {
            devices: HashMap::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a device under the given endpoint id.
    pub fn register(&mut self, endpoint_id: &str, device: MockDevice) {
        self.devices.insert(endpoint_id.to_string(), device);
    }

    /// Snapshot of every remote call made so far.
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl Default for MockEndpointClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointClient for MockEndpointClient {
    fn connect(&self, endpoint_id: &str) -> Result<Box<dyn RemoteEndpoint>, EndpointError> {
        self.log.lock().unwrap().push(format!("connect {}", endpoint_id));

        match self.devices.get(endpoint_id) {
            Some(device) if device.reachable => Ok(Box::new(MockRemoteEndpoint {
                endpoint_id: endpoint_id.to_string(),
                device: device.clone(),
                log: Arc::clone(&self.log),
            })),
            Some(_) => Err(EndpointError::Connection {
                endpoint: endpoint_id.to_string(),
                reason: "device not exported".to_string(),
            }),
            None => Err(EndpointError::Connection {
                endpoint: endpoint_id.to_string(),
                reason: "no such device".to_string(),
            }),
        }
    }
}

/// One connected mock device.
struct MockRemoteEndpoint {
    endpoint_id: String,
    device: MockDevice,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockRemoteEndpoint {
    fn record(&self, call: String) {
        self.log.lock().unwrap().push(call);
    }
}

impl RemoteEndpoint for MockRemoteEndpoint {
    fn state(&self) -> Result<String, EndpointError> {
        self.record(format!("state {}", self.endpoint_id));

        if self.device.state_unreadable {
            return Err(EndpointError::StateRead {
                reason: "state attribute timed out".to_string(),
            });
        }
        Ok(self.device.state.clone())
    }

    fn read_attribute(&self, name: &str) -> Result<AttributeValue, EndpointError> {
        self.record(format!("read_attribute {}/{}", self.endpoint_id, name));

        if self.device.unreadable_attributes.contains(name) {
            return Err(EndpointError::AttributeRead {
                name: name.to_string(),
                reason: "read raised".to_string(),
            });
        }
        match self.device.attributes.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(EndpointError::AttributeRead {
                name: name.to_string(),
                reason: "no such attribute".to_string(),
            }),
        }
    }

    fn read_property(&self, name: &str) -> Result<Vec<String>, EndpointError> {
        self.record(format!("read_property {}/{}", self.endpoint_id, name));

        if self.device.unreadable_properties.contains(name) {
            return Err(EndpointError::PropertyRead {
                name: name.to_string(),
                reason: "database unavailable".to_string(),
            });
        }
        match self.device.properties.get(name) {
            Some(values) => Ok(values.clone()),
            None => Err(EndpointError::PropertyMissing {
                name: name.to_string(),
            }),
        }
    }

    fn invoke_command(&self, name: &str) -> Result<(), EndpointError> {
        self.record(format!("invoke {}/{}", self.endpoint_id, name));

        if self.device.commands.contains(name) {
            Ok(())
        } else {
            Err(EndpointError::CommandFailed {
                name: name.to_string(),
                reason: "no such command".to_string(),
            })
        }
    }
}
