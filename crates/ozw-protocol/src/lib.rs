//! Z-Wave Protocol Vocabulary
//!
//! This crate provides the protocol constant tables and shared metadata
//! types used across the binding workspace:
//!
//! - **Command classes**: the numeric command-class identifiers a Z-Wave
//!   node advertises (switch, sensor, thermostat families and so on)
//! - **Notification tables**: the notification type and code values the
//!   native driver reports through its watcher callback
//! - **Node/value metadata**: the descriptive records the driver hands
//!   back once a node or value has been interrogated
//!
//! The binding never interprets command-class payloads itself; the tables
//! exist so callers can name what the driver reported instead of pattern
//! matching on raw bytes.
//!
//! # Example
//!
//! ```rust
//! use ozw_protocol::{CommandClass, NotificationType};
//!
//! let class = CommandClass::from_raw(0x25).unwrap();
//! assert_eq!(class, CommandClass::SwitchBinary);
//! assert_eq!(class.name(), "Switch Binary");
//!
//! // Out-of-range notification types collapse to Unknown rather than erroring
//! assert_eq!(NotificationType::from_raw(200), NotificationType::Unknown);
//! ```

pub mod command_class;
pub mod notification;
pub mod value;

pub use command_class::{CommandClass, UnknownClassError};
pub use notification::{NotificationCode, NotificationType, UnknownCodeError};
pub use value::{NodeInfo, ValueInfo};
