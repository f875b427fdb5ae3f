//! Error types for controller detection

use thiserror::Error;

/// Which USB id field of a descriptor failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    /// The vendor id field
    Vendor,
    /// The product id field
    Product,
}

impl std::fmt::Display for IdField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdField::Vendor => write!(f, "vendor id"),
            IdField::Product => write!(f, "product id"),
        }
    }
}

/// Errors that can occur during detection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Failed to enumerate serial ports
    #[error("failed to enumerate ports: {0}")]
    EnumerationFailed(String),

    /// A descriptor carried a USB id that is not valid hexadecimal
    #[error("invalid {field} {value:?} on port {port}")]
    InvalidId {
        /// Port the offending descriptor came from
        port: String,
        /// Which id field was malformed
        field: IdField,
        /// The offending string, as reported by the enumerator
        value: String,
    },
}
