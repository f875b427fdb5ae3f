//! Known Z-Wave controller fingerprints
//!
//! A fingerprint identifies a controller by the manufacturer string the OS
//! reports for it plus its USB vendor/product id pair. Matching is exact:
//! sending Z-Wave control sequences to an unrelated serial device is worse
//! than missing a controller, so there is no fuzzy or partial matching.

/// A registry entry for a known controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    /// Vendor brand name (what we report to the user)
    pub vendor: &'static str,
    /// Human-readable product description
    pub description: &'static str,
    /// Manufacturer string exactly as the OS enumerator reports it
    pub manufacturer: &'static str,
    /// USB vendor id
    pub vendor_id: u16,
    /// USB product id
    pub product_id: u16,
}

impl Fingerprint {
    pub const fn new(
        vendor: &'static str,
        description: &'static str,
        manufacturer: &'static str,
        vendor_id: u16,
        product_id: u16,
    ) -> Self {
        Self {
            vendor,
            description,
            manufacturer,
            vendor_id,
            product_id,
        }
    }
}

/// Built-in registry of known controllers
///
/// The registry is iterated in reverse during matching, so on a duplicate
/// vendor/product/manufacturer triple the later entry wins. Append new
/// hardware at the end.
pub const KNOWN_CONTROLLERS: &[Fingerprint] = &[
    Fingerprint::new(
        "AEOTEC",
        "Z-Stick Series 2",
        "Silicon Labs",
        0x10c4,
        0xea60,
    ),
    Fingerprint::new(
        "Z-Wave.Me",
        "UZB Stick",
        "Sigma Designs, Inc.",
        0x0658,
        0x0200,
    ),
    Fingerprint::new(
        "AEOTEC",
        "Z-Stick Gen5",
        "Sigma Designs, Inc.",
        0x0658,
        0x0200,
    ),
];
