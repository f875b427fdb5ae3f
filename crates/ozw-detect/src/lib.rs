//! Z-Wave Controller Detection Library
//!
//! This crate identifies attached Z-Wave USB controllers by matching
//! enumerated serial devices against a registry of known hardware
//! fingerprints (manufacturer string plus USB vendor/product id pair).
//!
//! Matching is exact by design: a misidentified serial device would later
//! receive Z-Wave control traffic, so unknown devices are silently excluded
//! rather than fuzzily matched.
//!
//! # Example
//!
//! ```rust,no_run
//! use ozw_detect::ControllerScanner;
//!
//! let scanner = ControllerScanner::new();
//! for device in scanner.scan().unwrap() {
//!     println!("{} {} on {}", device.vendor, device.description, device.device.port);
//! }
//! ```

pub mod error;
pub mod fingerprint;
pub mod matcher;
pub mod scanner;

pub use error::{DetectError, IdField};
pub use fingerprint::{Fingerprint, KNOWN_CONTROLLERS};
pub use matcher::{list_matching_devices, match_descriptor, DeviceDescriptor, MatchedDevice};
pub use scanner::{ControllerScanner, ScannerConfig};
