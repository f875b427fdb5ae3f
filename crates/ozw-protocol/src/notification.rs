//! Driver notification tables
//!
//! The native driver reports everything through a single watcher callback
//! carrying a notification type, and some notification types carry an
//! additional code byte (timeout, node asleep, node dead, ...).

use thiserror::Error;

/// Raised when a raw byte does not map to a known notification code
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown notification code: {0}")]
pub struct UnknownCodeError(pub u8);

/// Notification type reported by the driver's watcher callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NotificationType {
    ValueAdded = 0,
    ValueRemoved = 1,
    ValueChanged = 2,
    ValueRefreshed = 3,
    Group = 4,
    NodeNew = 5,
    NodeAdded = 6,
    NodeRemoved = 7,
    NodeProtocolInfo = 8,
    NodeNaming = 9,
    NodeEvent = 10,
    PollingDisabled = 11,
    PollingEnabled = 12,
    SceneEvent = 13,
    CreateButton = 14,
    DeleteButton = 15,
    ButtonOn = 16,
    ButtonOff = 17,
    DriverReady = 18,
    DriverFailed = 19,
    DriverReset = 20,
    EssentialNodeQueriesComplete = 21,
    NodeQueriesComplete = 22,
    AwakeNodesQueried = 23,
    AllNodesQueriedSomeDead = 24,
    AllNodesQueried = 25,
    Unknown = 26,
}

impl NotificationType {
    /// Look up a notification type by its raw value
    ///
    /// Values the table does not know collapse to `Unknown` instead of
    /// erroring, matching how the driver reports notification types it
    /// gained after this table was written.
    pub fn from_raw(raw: u8) -> NotificationType {
        match raw {
            0 => NotificationType::ValueAdded,
            1 => NotificationType::ValueRemoved,
            2 => NotificationType::ValueChanged,
            3 => NotificationType::ValueRefreshed,
            4 => NotificationType::Group,
            5 => NotificationType::NodeNew,
            6 => NotificationType::NodeAdded,
            7 => NotificationType::NodeRemoved,
            8 => NotificationType::NodeProtocolInfo,
            9 => NotificationType::NodeNaming,
            10 => NotificationType::NodeEvent,
            11 => NotificationType::PollingDisabled,
            12 => NotificationType::PollingEnabled,
            13 => NotificationType::SceneEvent,
            14 => NotificationType::CreateButton,
            15 => NotificationType::DeleteButton,
            16 => NotificationType::ButtonOn,
            17 => NotificationType::ButtonOff,
            18 => NotificationType::DriverReady,
            19 => NotificationType::DriverFailed,
            20 => NotificationType::DriverReset,
            21 => NotificationType::EssentialNodeQueriesComplete,
            22 => NotificationType::NodeQueriesComplete,
            23 => NotificationType::AwakeNodesQueried,
            24 => NotificationType::AllNodesQueriedSomeDead,
            25 => NotificationType::AllNodesQueried,
            _ => NotificationType::Unknown,
        }
    }

    /// Raw value for this notification type
    pub fn raw(&self) -> u8 {
        *self as u8
    }

    /// True for the notification types that mark the end of initial scan
    pub fn is_scan_complete(&self) -> bool {
        matches!(
            self,
            NotificationType::AwakeNodesQueried
                | NotificationType::AllNodesQueriedSomeDead
                | NotificationType::AllNodesQueried
        )
    }
}

/// Notification code carried by `NotificationType::NodeEvent` style reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NotificationCode {
    MsgComplete = 0,
    Timeout = 1,
    NoOperation = 2,
    Awake = 3,
    Sleep = 4,
    Dead = 5,
    Alive = 6,
}

impl NotificationCode {
    /// Look up a notification code by its raw value
    pub fn from_raw(raw: u8) -> Option<NotificationCode> {
        match raw {
            0 => Some(NotificationCode::MsgComplete),
            1 => Some(NotificationCode::Timeout),
            2 => Some(NotificationCode::NoOperation),
            3 => Some(NotificationCode::Awake),
            4 => Some(NotificationCode::Sleep),
            5 => Some(NotificationCode::Dead),
            6 => Some(NotificationCode::Alive),
            _ => None,
        }
    }

    /// Raw value for this notification code
    pub fn raw(&self) -> u8 {
        *self as u8
    }

    /// Returns a human-readable name for the code
    pub fn name(&self) -> &'static str {
        match self {
            NotificationCode::MsgComplete => "message complete",
            NotificationCode::Timeout => "timeout",
            NotificationCode::NoOperation => "no operation",
            NotificationCode::Awake => "awake",
            NotificationCode::Sleep => "sleep",
            NotificationCode::Dead => "dead",
            NotificationCode::Alive => "alive",
        }
    }
}

impl TryFrom<u8> for NotificationCode {
    type Error = UnknownCodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        NotificationCode::from_raw(raw).ok_or(UnknownCodeError(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        for raw in 0..=26u8 {
            let ty = NotificationType::from_raw(raw);
            assert_eq!(ty.raw(), raw);
        }
    }

    #[test]
    fn test_out_of_range_type_is_unknown() {
        assert_eq!(NotificationType::from_raw(27), NotificationType::Unknown);
        assert_eq!(NotificationType::from_raw(255), NotificationType::Unknown);
    }

    #[test]
    fn test_scan_complete_classification() {
        assert!(NotificationType::AllNodesQueried.is_scan_complete());
        assert!(NotificationType::AwakeNodesQueried.is_scan_complete());
        assert!(!NotificationType::DriverReady.is_scan_complete());
    }

    #[test]
    fn test_code_round_trip() {
        for raw in 0..=6u8 {
            assert_eq!(NotificationCode::from_raw(raw).unwrap().raw(), raw);
        }
        assert_eq!(NotificationCode::from_raw(7), None);
        assert_eq!(NotificationCode::try_from(9), Err(UnknownCodeError(9)));
    }
}
