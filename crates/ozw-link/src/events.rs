//! Typed event stream from the protocol engine
//!
//! Every callback the native engine would deliver is modelled as a variant
//! of a single event enum and pushed through one single-consumer channel.
//! Delivery is sequential in emission order; there is never concurrent
//! delivery of two events for the same node.

use ozw_protocol::{CommandClass, NodeInfo, NotificationCode, ValueInfo};

/// Lifecycle and domain events emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// The engine accepted the port and opened the serial connection
    Connected {
        /// Port the connection was opened on
        port: String,
    },

    /// The driver finished initializing against the controller
    DriverReady {
        /// Home id of the Z-Wave network
        home_id: u32,
    },

    /// The driver gave up on the controller after a successful open
    DriverFailed,

    /// A node was discovered on the mesh
    NodeAdded {
        /// Id of the new node
        node_id: u8,
    },

    /// A node finished capability interrogation
    NodeReady {
        /// Id of the node
        node_id: u8,
        /// Descriptive info reported by the node
        info: NodeInfo,
    },

    /// A node value was seen for the first time
    ValueAdded {
        /// The new value
        value: ValueInfo,
    },

    /// A known node value changed
    ValueChanged {
        /// The updated value
        value: ValueInfo,
    },

    /// A node value was removed
    ValueRemoved {
        /// Node that owned the value
        node_id: u8,
        /// Command class of the removed value
        class: CommandClass,
        /// Index of the removed value
        index: u8,
    },

    /// A node sent a basic-set style event
    NodeEvent {
        /// Source node
        node_id: u8,
        /// Event payload byte
        data: u8,
    },

    /// The engine reported a notification code for a node
    Notification {
        /// Node the notification concerns
        node_id: u8,
        /// The notification code
        code: NotificationCode,
    },

    /// Initial network scan finished; all reachable nodes interrogated
    ScanComplete,

    /// The connection was closed
    Disconnected {
        /// Port the connection was on
        port: String,
    },
}

impl DriverEvent {
    /// Check if this is a connection lifecycle event
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            DriverEvent::Connected { .. }
                | DriverEvent::DriverReady { .. }
                | DriverEvent::DriverFailed
                | DriverEvent::ScanComplete
                | DriverEvent::Disconnected { .. }
        )
    }

    /// Check if this is a value event
    pub fn is_value_event(&self) -> bool {
        matches!(
            self,
            DriverEvent::ValueAdded { .. }
                | DriverEvent::ValueChanged { .. }
                | DriverEvent::ValueRemoved { .. }
        )
    }

    /// Get the node id if this event concerns a specific node
    pub fn node_id(&self) -> Option<u8> {
        match self {
            DriverEvent::NodeAdded { node_id }
            | DriverEvent::NodeReady { node_id, .. }
            | DriverEvent::ValueRemoved { node_id, .. }
            | DriverEvent::NodeEvent { node_id, .. }
            | DriverEvent::Notification { node_id, .. } => Some(*node_id),
            DriverEvent::ValueAdded { value } | DriverEvent::ValueChanged { value } => {
                Some(value.node_id)
            }
            _ => None,
        }
    }
}
