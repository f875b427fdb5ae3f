//! Simulated Z-Wave Engine
//!
//! This crate provides an in-process [`ProtocolEngine`] implementation for
//! exercising the binding without controller hardware. A scripted
//! [`SimulatedNetwork`] is played back through the real event contract, so
//! everything downstream of the engine boundary behaves exactly as it
//! would against the native library.
//!
//! # Example
//!
//! ```rust,no_run
//! use ozw_link::{Controller, DriverConfig};
//! use ozw_sim::{SimulatedEngine, SimulatedNetwork};
//!
//! let engine = SimulatedEngine::new(SimulatedNetwork::demo());
//! let mut controller = Controller::new(engine, DriverConfig::default());
//! let events = controller.connect("/dev/null").unwrap();
//! ```
//!
//! [`ProtocolEngine`]: ozw_link::ProtocolEngine

pub mod engine;
pub mod network;

pub use engine::{SimulatedEngine, SimulatedHandle};
pub use network::{SimulatedNetwork, SimulatedNode};
