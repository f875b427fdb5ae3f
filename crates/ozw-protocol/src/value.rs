//! Node and value metadata reported by the driver
//!
//! These records mirror what the native driver hands back once it has
//! interrogated a node: descriptive strings for the node itself, and one
//! `ValueInfo` per value the node exposes. The binding treats value
//! payloads as opaque strings; command-class semantics stay with the
//! driver.

use crate::CommandClass;

/// Descriptive information about a node on the mesh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeInfo {
    /// Manufacturer name, empty until the node has been interrogated
    pub manufacturer: String,
    /// Product name
    pub product: String,
    /// Device type (e.g. "Binary Power Switch")
    pub node_type: String,
    /// User-assigned location, often empty
    pub location: String,
}

impl NodeInfo {
    /// Create node info with the fields the driver reports on node ready
    pub fn new(
        manufacturer: impl Into<String>,
        product: impl Into<String>,
        node_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            product: product.into(),
            node_type: node_type.into(),
            location: location.into(),
        }
    }
}

/// A single value a node exposes, tagged with its command class
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueInfo {
    /// Node that owns this value
    pub node_id: u8,
    /// Command class that produced the value
    pub class: CommandClass,
    /// Instance within the node (multi-instance devices)
    pub instance: u8,
    /// Value index within the command class
    pub index: u8,
    /// Current value, reported opaquely as a string
    pub value: String,
}

impl ValueInfo {
    /// Create a value record for a node/class pair
    pub fn new(node_id: u8, class: CommandClass, instance: u8, index: u8, value: impl Into<String>) -> Self {
        Self {
            node_id,
            class,
            instance,
            index,
            value: value.into(),
        }
    }
}
