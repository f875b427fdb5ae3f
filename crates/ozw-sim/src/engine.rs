//! Simulated protocol engine
//!
//! Plays back a scripted network through the binding's event contract:
//! `Connected`, `DriverReady`, then per node `NodeAdded`, the node's
//! `ValueAdded`s, `NodeReady`, and finally `ScanComplete`. The playback
//! order is the ordering contract real engines are held to.

use std::sync::{Arc, Mutex};

use ozw_link::{DriverConfig, DriverEvent, EventSender, LinkError, ProtocolEngine};
use ozw_protocol::{CommandClass, ValueInfo};
use tracing::{debug, info};

use crate::network::SimulatedNetwork;

/// Shared sender slot: present while the engine is running
type SharedSender = Arc<Mutex<Option<EventSender>>>;

/// In-process stand-in for the native Z-Wave engine
pub struct SimulatedEngine {
    network: SimulatedNetwork,
    home_id: u32,
    /// Fail this many starts before succeeding (for retry testing)
    fail_starts: u32,
    starts: u32,
    events: SharedSender,
}

/// Handle for driving a running simulated network from outside
///
/// Obtained via [`SimulatedEngine::handle`] before the engine is handed to
/// a controller. Cheap to clone.
#[derive(Clone)]
pub struct SimulatedHandle {
    events: SharedSender,
}

impl SimulatedHandle {
    /// Report a value change on the running network
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotConnected`] when the engine is stopped.
    pub fn set_value(
        &self,
        node_id: u8,
        class: CommandClass,
        index: u8,
        value: impl Into<String>,
    ) -> Result<(), LinkError> {
        let guard = self.events.lock().map_err(|_| LinkError::ChannelClosed)?;
        let events = guard.as_ref().ok_or(LinkError::NotConnected)?;
        let value = ValueInfo::new(node_id, class, 1, index, value);
        debug!("Simulated value change: node {} -> {:?}", node_id, value.value);
        events
            .send(DriverEvent::ValueChanged { value })
            .map_err(|_| LinkError::ChannelClosed)
    }

    /// Report a node event (basic-set style) on the running network
    pub fn node_event(&self, node_id: u8, data: u8) -> Result<(), LinkError> {
        let guard = self.events.lock().map_err(|_| LinkError::ChannelClosed)?;
        let events = guard.as_ref().ok_or(LinkError::NotConnected)?;
        events
            .send(DriverEvent::NodeEvent { node_id, data })
            .map_err(|_| LinkError::ChannelClosed)
    }
}

impl SimulatedEngine {
    /// Create an engine over a scripted network
    pub fn new(network: SimulatedNetwork) -> Self {
        Self {
            network,
            home_id: 0x016a_1db5,
            fail_starts: 0,
            starts: 0,
            events: Arc::new(Mutex::new(None)),
        }
    }

    /// Fail the first `count` start calls with an engine error
    pub fn fail_first_starts(mut self, count: u32) -> Self {
        self.fail_starts = count;
        self
    }

    /// Set the home id reported on driver ready
    pub fn with_home_id(mut self, home_id: u32) -> Self {
        self.home_id = home_id;
        self
    }

    /// Handle for injecting runtime events into the network
    pub fn handle(&self) -> SimulatedHandle {
        SimulatedHandle {
            events: Arc::clone(&self.events),
        }
    }

    /// How many times `start` has been called
    pub fn start_count(&self) -> u32 {
        self.starts
    }

    /// Check if the engine is running
    pub fn is_running(&self) -> bool {
        self.events.lock().map(|g| g.is_some()).unwrap_or(false)
    }

    fn play_scan(&self, events: &EventSender, port: &str) -> Result<(), LinkError> {
        let send = |event: DriverEvent| {
            events.send(event).map_err(|_| LinkError::ChannelClosed)
        };

        send(DriverEvent::Connected {
            port: port.to_string(),
        })?;
        send(DriverEvent::DriverReady {
            home_id: self.home_id,
        })?;

        for node in self.network.nodes() {
            send(DriverEvent::NodeAdded {
                node_id: node.node_id,
            })?;
            for value in &node.values {
                send(DriverEvent::ValueAdded {
                    value: value.clone(),
                })?;
            }
            send(DriverEvent::NodeReady {
                node_id: node.node_id,
                info: node.info.clone(),
            })?;
        }

        send(DriverEvent::ScanComplete)
    }
}

impl ProtocolEngine for SimulatedEngine {
    fn start(
        &mut self,
        port: &str,
        config: &DriverConfig,
        events: EventSender,
    ) -> Result<(), LinkError> {
        self.starts += 1;
        if self.starts <= self.fail_starts {
            return Err(LinkError::Engine(format!(
                "simulated start failure {}",
                self.starts
            )));
        }

        info!(
            "Simulated engine starting on {} (config dir {})",
            port,
            config.config_dir.display()
        );

        self.play_scan(&events, port)?;
        if let Ok(mut guard) = self.events.lock() {
            *guard = Some(events);
        }
        Ok(())
    }

    fn stop(&mut self) {
        let stopped = self
            .events
            .lock()
            .map(|mut g| g.take().is_some())
            .unwrap_or(false);
        if stopped {
            info!("Simulated engine stopped");
        }
    }
}
