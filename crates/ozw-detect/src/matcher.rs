//! Fingerprint matching over enumerated device descriptors
//!
//! This is a pure classification step: descriptors come from the (one-shot)
//! enumeration boundary with their USB ids still hex-encoded, and only the
//! descriptors whose manufacturer string and parsed ids exactly equal a
//! registry fingerprint come out the other side, annotated with the
//! fingerprint's vendor metadata.

use serde::{Deserialize, Serialize};

use crate::error::{DetectError, IdField};
use crate::fingerprint::Fingerprint;

/// A raw device descriptor from the enumeration boundary
///
/// USB ids arrive as hexadecimal strings (e.g. `"10c4"`), matching what OS
/// device enumerators report. They are parsed base-16 at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Port identifier used to open a connection later (e.g. /dev/ttyUSB0)
    pub port: String,
    /// Manufacturer string, empty when the OS reported none
    #[serde(default)]
    pub manufacturer: String,
    /// USB vendor id, hex-encoded
    pub vendor_id: String,
    /// USB product id, hex-encoded
    pub product_id: String,
    /// USB serial number, if the OS reported one
    #[serde(default)]
    pub serial_number: Option<String>,
}

/// A descriptor that matched a known controller fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedDevice {
    /// The descriptor as enumerated
    #[serde(flatten)]
    pub device: DeviceDescriptor,
    /// Vendor brand from the matching fingerprint
    pub vendor: String,
    /// Product description from the matching fingerprint
    pub description: String,
}

fn parse_id(descriptor: &DeviceDescriptor, field: IdField) -> Result<u16, DetectError> {
    let raw = match field {
        IdField::Vendor => &descriptor.vendor_id,
        IdField::Product => &descriptor.product_id,
    };
    u16::from_str_radix(raw, 16).map_err(|_| DetectError::InvalidId {
        port: descriptor.port.clone(),
        field,
        value: raw.clone(),
    })
}

/// Match a single descriptor against the registry
///
/// The registry is iterated in reverse insertion order so later entries win
/// when duplicates exist. A match requires the manufacturer string to equal
/// the fingerprint's exactly and both parsed ids to be equal; at most one
/// result is produced per descriptor.
///
/// # Errors
///
/// Returns [`DetectError::InvalidId`] when the descriptor's vendor or
/// product id is not valid hexadecimal. Ids are parsed before any
/// comparison, so a malformed descriptor errors even when no fingerprint
/// could have matched it.
pub fn match_descriptor(
    descriptor: &DeviceDescriptor,
    registry: &[Fingerprint],
) -> Result<Option<MatchedDevice>, DetectError> {
    let vendor_id = parse_id(descriptor, IdField::Vendor)?;
    let product_id = parse_id(descriptor, IdField::Product)?;

    for fingerprint in registry.iter().rev() {
        if fingerprint.manufacturer == descriptor.manufacturer
            && fingerprint.vendor_id == vendor_id
            && fingerprint.product_id == product_id
        {
            return Ok(Some(MatchedDevice {
                device: descriptor.clone(),
                vendor: fingerprint.vendor.to_string(),
                description: fingerprint.description.to_string(),
            }));
        }
    }

    Ok(None)
}

/// Match a list of descriptors against the registry
///
/// Pure over its inputs: descriptor order is preserved in the result,
/// unknown devices are silently excluded, and an empty descriptor list or
/// empty registry yields an empty result rather than an error.
///
/// # Errors
///
/// The call halts on the first descriptor whose ids fail hexadecimal
/// parsing. Callers that prefer to skip malformed descriptors and keep
/// scanning can drive [`match_descriptor`] themselves.
pub fn list_matching_devices(
    descriptors: &[DeviceDescriptor],
    registry: &[Fingerprint],
) -> Result<Vec<MatchedDevice>, DetectError> {
    let mut matched = Vec::new();
    for descriptor in descriptors {
        if let Some(device) = match_descriptor(descriptor, registry)? {
            matched.push(device);
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::KNOWN_CONTROLLERS;

    fn registry_one() -> Vec<Fingerprint> {
        vec![Fingerprint::new(
            "AEOTEC",
            "Z-Stick Series 2",
            "Silicon Labs",
            0x10c4,
            0xea60,
        )]
    }

    fn descriptor(port: &str, manufacturer: &str, vid: &str, pid: &str) -> DeviceDescriptor {
        DeviceDescriptor {
            port: port.to_string(),
            manufacturer: manufacturer.to_string(),
            vendor_id: vid.to_string(),
            product_id: pid.to_string(),
            serial_number: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        // The concrete scenario: one known stick, one unrelated adapter
        let descriptors = vec![
            descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea60"),
            descriptor("/dev/ttyUSB1", "Other Corp", "0000", "0001"),
        ];

        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].device.port, "/dev/ttyUSB0");
        assert_eq!(matched[0].vendor, "AEOTEC");
        assert_eq!(matched[0].description, "Z-Stick Series 2");
    }

    #[test]
    fn test_empty_descriptors_yield_empty() {
        let matched = list_matching_devices(&[], &registry_one()).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_registry_yields_empty() {
        let descriptors = vec![descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea60")];
        let matched = list_matching_devices(&descriptors, &[]).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_one_bit_id_difference_does_not_match() {
        // Same manufacturer, product id off by one bit
        let descriptors = vec![descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea61")];
        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();
        assert!(matched.is_empty());

        let descriptors = vec![descriptor("/dev/ttyUSB0", "Silicon Labs", "10c5", "ea60")];
        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_manufacturer_must_match_exactly() {
        let descriptors = vec![descriptor("/dev/ttyUSB0", "silicon labs", "10c4", "ea60")];
        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_malformed_hex_identifies_descriptor() {
        let descriptors = vec![
            descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea60"),
            descriptor("/dev/ttyUSB1", "Other Corp", "zz", "0001"),
        ];

        let err = list_matching_devices(&descriptors, &registry_one()).unwrap_err();
        assert_eq!(
            err,
            DetectError::InvalidId {
                port: "/dev/ttyUSB1".to_string(),
                field: IdField::Vendor,
                value: "zz".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_hex_errors_even_without_candidate_match() {
        // Ids parse before comparison, so an unknown manufacturer does not
        // mask the parse failure
        let d = descriptor("/dev/ttyS9", "Nobody", "10c4", "not-hex");
        let err = match_descriptor(&d, &registry_one()).unwrap_err();
        assert!(matches!(
            err,
            DetectError::InvalidId {
                field: IdField::Product,
                ..
            }
        ));
    }

    #[test]
    fn test_descriptor_order_preserved() {
        let descriptors = vec![
            descriptor("/dev/ttyUSB2", "Silicon Labs", "10c4", "ea60"),
            descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea60"),
            descriptor("/dev/ttyUSB1", "Silicon Labs", "10c4", "ea60"),
        ];

        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();
        let ports: Vec<_> = matched.iter().map(|m| m.device.port.as_str()).collect();
        assert_eq!(ports, ["/dev/ttyUSB2", "/dev/ttyUSB0", "/dev/ttyUSB1"]);
    }

    #[test]
    fn test_later_registry_entry_wins_on_duplicate() {
        // Duplicate vid/pid/manufacturer triples exist in the shipped
        // registry: UZB Stick and Z-Stick Gen5 share 0658:0200
        let descriptors = vec![descriptor(
            "/dev/ttyACM0",
            "Sigma Designs, Inc.",
            "0658",
            "0200",
        )];

        let matched = list_matching_devices(&descriptors, KNOWN_CONTROLLERS).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].description, "Z-Stick Gen5");
    }

    #[test]
    fn test_at_most_one_match_per_descriptor() {
        let mut registry = registry_one();
        registry.push(Fingerprint::new(
            "AEOTEC",
            "Z-Stick Series 2 (rev B)",
            "Silicon Labs",
            0x10c4,
            0xea60,
        ));

        let descriptors = vec![descriptor("/dev/ttyUSB0", "Silicon Labs", "10c4", "ea60")];
        let matched = list_matching_devices(&descriptors, &registry).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].description, "Z-Stick Series 2 (rev B)");
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let descriptors = vec![descriptor("/dev/ttyUSB0", "Silicon Labs", "10C4", "EA60")];
        let matched = list_matching_devices(&descriptors, &registry_one()).unwrap();
        assert_eq!(matched.len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_descriptor() -> impl Strategy<Value = DeviceDescriptor> {
            (
                "/dev/tty[A-Z]{3}[0-9]",
                prop_oneof![
                    Just("Silicon Labs".to_string()),
                    Just("Sigma Designs, Inc.".to_string()),
                    "[A-Za-z ]{0,12}",
                ],
                "[0-9a-f]{1,4}",
                "[0-9a-f]{1,4}",
            )
                .prop_map(|(port, manufacturer, vid, pid)| DeviceDescriptor {
                    port,
                    manufacturer,
                    vendor_id: vid,
                    product_id: pid,
                    serial_number: None,
                })
        }

        proptest! {
            #[test]
            fn matching_is_deterministic(descriptors in prop::collection::vec(arb_descriptor(), 0..8)) {
                let first = list_matching_devices(&descriptors, KNOWN_CONTROLLERS).unwrap();
                let second = list_matching_devices(&descriptors, KNOWN_CONTROLLERS).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn empty_registry_never_matches(descriptors in prop::collection::vec(arb_descriptor(), 0..8)) {
                let matched = list_matching_devices(&descriptors, &[]).unwrap();
                prop_assert!(matched.is_empty());
            }

            #[test]
            fn result_never_larger_than_input(descriptors in prop::collection::vec(arb_descriptor(), 0..8)) {
                let matched = list_matching_devices(&descriptors, KNOWN_CONTROLLERS).unwrap();
                prop_assert!(matched.len() <= descriptors.len());
            }

            #[test]
            fn matched_ports_come_from_input(descriptors in prop::collection::vec(arb_descriptor(), 0..8)) {
                let matched = list_matching_devices(&descriptors, KNOWN_CONTROLLERS).unwrap();
                for m in &matched {
                    prop_assert!(descriptors.iter().any(|d| *d == m.device));
                }
            }
        }
    }
}
