//! Integration tests for the binding against the simulated engine
//!
//! These tests verify end-to-end behavior of the connection manager:
//! - Lifecycle event ordering (connected, ready, per-node scan, complete)
//! - Driver start retry behavior
//! - Value change delivery after the initial scan
//! - Disconnect semantics and stream termination

use ozw_link::{Controller, DriverConfig, DriverEvent, EventStream, LinkError};
use ozw_protocol::{CommandClass, NodeInfo};
use ozw_sim::{SimulatedEngine, SimulatedNetwork, SimulatedNode};

// ============================================================================
// Helper Functions
// ============================================================================

mod helpers {
    use super::*;

    /// Controller over the demo network with default config
    pub fn demo_controller() -> Controller<SimulatedEngine> {
        Controller::new(
            SimulatedEngine::new(SimulatedNetwork::demo()),
            DriverConfig::default(),
        )
    }

    /// Drain every event currently queued on the stream
    pub fn drain(events: &mut EventStream) -> Vec<DriverEvent> {
        let mut collected = Vec::new();
        while let Some(event) = events.try_next() {
            collected.push(event);
        }
        collected
    }

    /// Index of the first event matching the predicate
    pub fn position(events: &[DriverEvent], pred: impl Fn(&DriverEvent) -> bool) -> usize {
        events.iter().position(pred).expect("event not found")
    }
}

// ============================================================================
// Lifecycle Ordering Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn connected_is_first_scan_complete_is_last() {
        let mut controller = helpers::demo_controller();
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();

        let scan = helpers::drain(&mut events);

        assert!(matches!(scan.first(), Some(DriverEvent::Connected { port }) if port == "/dev/ttyUSB0"));
        assert_eq!(scan.last(), Some(&DriverEvent::ScanComplete));
    }

    #[tokio::test]
    async fn driver_ready_precedes_node_discovery() {
        let mut controller = helpers::demo_controller();
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let scan = helpers::drain(&mut events);

        let ready = helpers::position(&scan, |e| matches!(e, DriverEvent::DriverReady { .. }));
        let first_node = helpers::position(&scan, |e| matches!(e, DriverEvent::NodeAdded { .. }));
        assert!(ready < first_node);
    }

    #[tokio::test]
    async fn node_added_then_values_then_ready_per_node() {
        let mut controller = helpers::demo_controller();
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let scan = helpers::drain(&mut events);

        for node_id in [2u8, 3u8] {
            let added = helpers::position(
                &scan,
                |e| matches!(e, DriverEvent::NodeAdded { node_id: n } if *n == node_id),
            );
            let ready = helpers::position(
                &scan,
                |e| matches!(e, DriverEvent::NodeReady { node_id: n, .. } if *n == node_id),
            );
            assert!(added < ready, "node {} added after ready", node_id);

            // Every value of this node lands between added and ready
            for (i, event) in scan.iter().enumerate() {
                if let DriverEvent::ValueAdded { value } = event {
                    if value.node_id == node_id {
                        assert!(added < i && i < ready);
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn node_ready_carries_node_info() {
        let mut controller = helpers::demo_controller();
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let scan = helpers::drain(&mut events);

        let info = scan
            .iter()
            .find_map(|e| match e {
                DriverEvent::NodeReady { node_id: 2, info } => Some(info.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(info.manufacturer, "Aeotec");
        assert_eq!(info.product, "Smart Switch 6");
        assert_eq!(info.location, "office");
    }

    #[tokio::test]
    async fn empty_network_still_completes_scan() {
        let engine = SimulatedEngine::new(SimulatedNetwork::new());
        let mut controller = Controller::new(engine, DriverConfig::default());
        let mut events = controller.connect("/dev/ttyACM0").unwrap();

        let scan = helpers::drain(&mut events);
        assert_eq!(scan.len(), 3); // connected, ready, scan complete
        assert_eq!(scan[2], DriverEvent::ScanComplete);
    }

    #[tokio::test]
    async fn home_id_propagates() {
        let engine = SimulatedEngine::new(SimulatedNetwork::new()).with_home_id(0xdead_beef);
        let mut controller = Controller::new(engine, DriverConfig::default());
        let mut events = controller.connect("/dev/ttyACM0").unwrap();
        let scan = helpers::drain(&mut events);

        assert!(scan
            .iter()
            .any(|e| matches!(e, DriverEvent::DriverReady { home_id } if *home_id == 0xdead_beef)));
    }
}

// ============================================================================
// Retry Tests
// ============================================================================

mod retry_tests {
    use super::*;

    #[tokio::test]
    async fn flaky_start_recovers_within_attempts() {
        let engine = SimulatedEngine::new(SimulatedNetwork::demo()).fail_first_starts(2);
        let mut controller = Controller::new(engine, DriverConfig::default());

        // Default is three attempts; two failures still connect
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        assert!(matches!(
            events.next().await,
            Some(DriverEvent::Connected { .. })
        ));
        assert_eq!(controller.into_engine().start_count(), 3);
    }

    #[tokio::test]
    async fn persistent_failure_exhausts_attempts() {
        let engine = SimulatedEngine::new(SimulatedNetwork::demo()).fail_first_starts(10);
        let config = DriverConfig {
            driver_attempts: 2,
            ..Default::default()
        };
        let mut controller = Controller::new(engine, config);

        let err = controller.connect("/dev/ttyUSB0").unwrap_err();
        match err {
            LinkError::DriverFailed {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 2);
                assert!(last_error.contains("simulated start failure"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(controller.into_engine().start_count(), 2);
    }
}

// ============================================================================
// Runtime Event Tests
// ============================================================================

mod runtime_tests {
    use super::*;

    #[tokio::test]
    async fn value_change_arrives_after_scan() {
        let engine = SimulatedEngine::new(SimulatedNetwork::demo());
        let handle = engine.handle();
        let mut controller = Controller::new(engine, DriverConfig::default());
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let _scan = helpers::drain(&mut events);

        handle
            .set_value(2, CommandClass::SwitchBinary, 0, "true")
            .unwrap();

        match events.next().await {
            Some(DriverEvent::ValueChanged { value }) => {
                assert_eq!(value.node_id, 2);
                assert_eq!(value.class, CommandClass::SwitchBinary);
                assert_eq!(value.value, "true");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn node_event_delivery() {
        let engine = SimulatedEngine::new(SimulatedNetwork::demo());
        let handle = engine.handle();
        let mut controller = Controller::new(engine, DriverConfig::default());
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let _scan = helpers::drain(&mut events);

        handle.node_event(3, 255).unwrap();

        assert_eq!(
            events.next().await,
            Some(DriverEvent::NodeEvent {
                node_id: 3,
                data: 255
            })
        );
    }

    #[tokio::test]
    async fn runtime_events_rejected_after_disconnect() {
        let engine = SimulatedEngine::new(SimulatedNetwork::demo());
        let handle = engine.handle();
        let mut controller = Controller::new(engine, DriverConfig::default());
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let _scan = helpers::drain(&mut events);

        controller.disconnect().unwrap();

        let err = handle
            .set_value(2, CommandClass::SwitchBinary, 0, "true")
            .unwrap_err();
        assert!(matches!(err, LinkError::NotConnected));
    }

    #[tokio::test]
    async fn disconnect_ends_stream_after_final_event() {
        let mut controller = helpers::demo_controller();
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();
        let _scan = helpers::drain(&mut events);

        controller.disconnect().unwrap();

        assert_eq!(
            events.next().await,
            Some(DriverEvent::Disconnected {
                port: "/dev/ttyUSB0".to_string()
            })
        );
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn reconnect_after_disconnect() {
        let mut controller = helpers::demo_controller();
        let _first = controller.connect("/dev/ttyUSB0").unwrap();
        controller.disconnect().unwrap();

        let mut second = controller.connect("/dev/ttyUSB1").unwrap();
        assert!(matches!(
            second.next().await,
            Some(DriverEvent::Connected { port }) if port == "/dev/ttyUSB1"
        ));
    }

    #[tokio::test]
    async fn single_node_network_event_count() {
        let network = SimulatedNetwork::new().with_node(
            SimulatedNode::new(5, NodeInfo::new("Fibaro", "Door Sensor", "Sensor", ""))
                .with_value(CommandClass::SensorBinary, 0, "false"),
        );
        let mut controller =
            Controller::new(SimulatedEngine::new(network), DriverConfig::default());
        let mut events = controller.connect("/dev/ttyUSB0").unwrap();

        let scan = helpers::drain(&mut events);
        // connected, ready, added, value added, node ready, scan complete
        assert_eq!(scan.len(), 6);
        assert_eq!(scan[2], DriverEvent::NodeAdded { node_id: 5 });
    }
}
