//! Z-Wave Engine Binding Layer
//!
//! This crate manages the connection between a caller and a native Z-Wave
//! protocol engine. The engine itself (serial framing, the request/ack
//! state machine, node interrogation, value caching) is out of tree and
//! reached only through the [`ProtocolEngine`] trait; this crate owns what
//! sits around it:
//!
//! - **Configuration**: an immutable [`DriverConfig`] with an explicit
//!   merge-with-defaults step ([`DriverConfigOverrides`])
//! - **Events**: one typed [`DriverEvent`] enum, delivered through a
//!   single-consumer channel in emission order
//! - **Connection management**: a [`Controller`] composing the engine
//!   handle with the event channel, retrying engine start up to the
//!   configured attempt count
//!
//! # Example
//!
//! ```rust,ignore
//! use ozw_link::{Controller, DriverConfig, DriverEvent};
//!
//! let mut controller = Controller::new(engine, DriverConfig::default());
//! let mut events = controller.connect("/dev/ttyUSB0")?;
//!
//! while let Some(event) = events.next().await {
//!     match event {
//!         DriverEvent::NodeReady { node_id, info } => {
//!             println!("node {} ready: {} {}", node_id, info.manufacturer, info.product);
//!         }
//!         DriverEvent::ScanComplete => break,
//!         _ => {}
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod events;

pub use config::{DriverConfig, DriverConfigOverrides, DEFAULT_DRIVER_ATTEMPTS};
pub use controller::{Controller, EventStream};
pub use engine::{EventSender, ProtocolEngine};
pub use error::LinkError;
pub use events::DriverEvent;
