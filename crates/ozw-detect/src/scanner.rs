//! Serial port scanner
//!
//! Wraps OS serial port enumeration and feeds the results through the
//! fingerprint matcher. Enumeration is a one-shot operation: it completes
//! once with a descriptor list or fails with an enumeration error; there is
//! no retry or partial delivery at this layer.

use serialport::{available_ports, SerialPortType};
use tracing::{debug, info};

use crate::error::DetectError;
use crate::fingerprint::{Fingerprint, KNOWN_CONTROLLERS};
use crate::matcher::{list_matching_devices, DeviceDescriptor, MatchedDevice};

/// Scanner configuration
#[derive(Debug, Clone, Default)]
pub struct ScannerConfig {
    /// Skip ports whose name contains any of these patterns
    pub skip_patterns: Vec<String>,
}

/// Scans serial ports for known Z-Wave controllers
pub struct ControllerScanner {
    config: ScannerConfig,
    registry: &'static [Fingerprint],
}

impl ControllerScanner {
    /// Create a scanner over the built-in controller registry
    pub fn new() -> Self {
        Self {
            config: ScannerConfig {
                skip_patterns: vec![
                    // Bluetooth ports on macOS
                    "Bluetooth".to_string(),
                    // Debug/logging ports
                    "debug".to_string(),
                ],
            },
            registry: KNOWN_CONTROLLERS,
        }
    }

    /// Create a scanner with custom configuration
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            config,
            registry: KNOWN_CONTROLLERS,
        }
    }

    /// Use a different fingerprint registry
    pub fn with_registry(mut self, registry: &'static [Fingerprint]) -> Self {
        self.registry = registry;
        self
    }

    /// Enumerate USB serial ports as raw descriptors
    ///
    /// Non-USB ports carry no vendor/product ids and can never match a
    /// fingerprint, so they are dropped here along with skip-listed ports.
    pub fn enumerate_ports(&self) -> Result<Vec<DeviceDescriptor>, DetectError> {
        info!("Enumerating serial ports...");
        let ports = available_ports().map_err(|e| DetectError::EnumerationFailed(e.to_string()))?;

        let result: Vec<_> = ports
            .into_iter()
            .filter_map(|p| match p.port_type {
                SerialPortType::UsbPort(usb) => Some(DeviceDescriptor {
                    port: p.port_name,
                    manufacturer: usb.manufacturer.unwrap_or_default(),
                    vendor_id: format!("{:04x}", usb.vid),
                    product_id: format!("{:04x}", usb.pid),
                    serial_number: usb.serial_number,
                }),
                _ => {
                    debug!("Skipping non-USB port {}", p.port_name);
                    None
                }
            })
            .filter(|d| !self.should_skip_port(d))
            .collect();

        if result.is_empty() {
            info!("No USB serial ports found");
        } else {
            info!("Found {} USB serial port(s)", result.len());
            for port in &result {
                info!(
                    "  {} - {} ({}:{})",
                    port.port, port.manufacturer, port.vendor_id, port.product_id
                );
            }
        }

        Ok(result)
    }

    /// Enumerate ports and return the known controllers among them
    pub fn scan(&self) -> Result<Vec<MatchedDevice>, DetectError> {
        let descriptors = self.enumerate_ports()?;
        let matched = list_matching_devices(&descriptors, self.registry)?;

        for device in &matched {
            info!(
                "Found controller: {} {} on {}",
                device.vendor, device.description, device.device.port
            );
        }

        Ok(matched)
    }

    /// Check if a port should be skipped
    fn should_skip_port(&self, descriptor: &DeviceDescriptor) -> bool {
        for pattern in &self.config.skip_patterns {
            if descriptor.port.contains(pattern) {
                return true;
            }
        }
        false
    }
}

impl Default for ControllerScanner {
    fn default() -> Self {
        Self::new()
    }
}
