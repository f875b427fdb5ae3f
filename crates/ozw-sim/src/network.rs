//! Scripted network topology for the simulated engine

use ozw_protocol::{CommandClass, NodeInfo, ValueInfo};

/// A scripted node with the values it exposes
#[derive(Debug, Clone)]
pub struct SimulatedNode {
    /// Node id on the simulated mesh
    pub node_id: u8,
    /// Descriptive info reported on node ready
    pub info: NodeInfo,
    /// Values reported during interrogation
    pub values: Vec<ValueInfo>,
}

impl SimulatedNode {
    /// Create a node with no values
    pub fn new(node_id: u8, info: NodeInfo) -> Self {
        Self {
            node_id,
            info,
            values: Vec::new(),
        }
    }

    /// Add a value to the node's script
    pub fn with_value(mut self, class: CommandClass, index: u8, value: impl Into<String>) -> Self {
        self.values
            .push(ValueInfo::new(self.node_id, class, 1, index, value));
        self
    }
}

/// The network a [`SimulatedEngine`] plays back on start
///
/// [`SimulatedEngine`]: crate::SimulatedEngine
#[derive(Debug, Clone, Default)]
pub struct SimulatedNetwork {
    nodes: Vec<SimulatedNode>,
}

impl SimulatedNetwork {
    /// Create an empty network (the controller node is implicit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the network
    pub fn with_node(mut self, node: SimulatedNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Nodes in interrogation order
    pub fn nodes(&self) -> &[SimulatedNode] {
        &self.nodes
    }

    /// A small demo network: a binary switch and a multilevel sensor
    pub fn demo() -> Self {
        Self::new()
            .with_node(
                SimulatedNode::new(
                    2,
                    NodeInfo::new("Aeotec", "Smart Switch 6", "Binary Power Switch", "office"),
                )
                .with_value(CommandClass::SwitchBinary, 0, "false")
                .with_value(CommandClass::Meter, 0, "0.0"),
            )
            .with_node(
                SimulatedNode::new(
                    3,
                    NodeInfo::new("Aeotec", "MultiSensor 6", "Routing Multilevel Sensor", ""),
                )
                .with_value(CommandClass::SensorMultilevel, 1, "21.5")
                .with_value(CommandClass::Battery, 0, "87"),
            )
    }
}
