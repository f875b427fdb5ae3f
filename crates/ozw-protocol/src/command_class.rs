//! Z-Wave command class identifiers
//!
//! A command class groups related device capabilities (binary switch,
//! multilevel sensor, thermostat setpoint, ...). The driver reports values
//! tagged with the class that produced them; this table gives those raw
//! identifiers names.

use thiserror::Error;

/// Raised when a raw byte does not map to a known command class
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown command class: 0x{0:02x}")]
pub struct UnknownClassError(pub u8);

/// Z-Wave command class identifier
///
/// Discriminants are the on-air class identifiers. The set covers the
/// classes the wrapped driver reports values for; interpreting a class's
/// payload stays with the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CommandClass {
    NoOperation = 0x00,
    Basic = 0x20,
    ControllerReplication = 0x21,
    ApplicationStatus = 0x22,
    SwitchBinary = 0x25,
    SwitchMultilevel = 0x26,
    SwitchAll = 0x27,
    SwitchToggleBinary = 0x28,
    SwitchToggleMultilevel = 0x29,
    SceneActivation = 0x2b,
    SensorBinary = 0x30,
    SensorMultilevel = 0x31,
    Meter = 0x32,
    MeterPulse = 0x35,
    ThermostatMode = 0x40,
    ThermostatOperatingState = 0x42,
    ThermostatSetpoint = 0x43,
    ThermostatFanMode = 0x44,
    ThermostatFanState = 0x45,
    ClimateControlSchedule = 0x46,
    BasicWindowCovering = 0x50,
    Crc16Encap = 0x56,
    MultiInstanceChannel = 0x60,
    UserCode = 0x63,
    Configuration = 0x70,
    Alarm = 0x71,
    ManufacturerSpecific = 0x72,
    Powerlevel = 0x73,
    Protection = 0x75,
    Lock = 0x76,
    Battery = 0x80,
    Clock = 0x81,
    Hail = 0x82,
    WakeUp = 0x84,
    Association = 0x85,
    Version = 0x86,
    Indicator = 0x87,
    Proprietary = 0x88,
    Language = 0x89,
    MultiInstanceAssociation = 0x8e,
    MultiCmd = 0x8f,
    EnergyProduction = 0x90,
    AssociationCommandConfiguration = 0x9b,
    SensorAlarm = 0x9c,
}

impl CommandClass {
    /// All known command classes, in ascending identifier order
    pub const ALL: &'static [CommandClass] = &[
        CommandClass::NoOperation,
        CommandClass::Basic,
        CommandClass::ControllerReplication,
        CommandClass::ApplicationStatus,
        CommandClass::SwitchBinary,
        CommandClass::SwitchMultilevel,
        CommandClass::SwitchAll,
        CommandClass::SwitchToggleBinary,
        CommandClass::SwitchToggleMultilevel,
        CommandClass::SceneActivation,
        CommandClass::SensorBinary,
        CommandClass::SensorMultilevel,
        CommandClass::Meter,
        CommandClass::MeterPulse,
        CommandClass::ThermostatMode,
        CommandClass::ThermostatOperatingState,
        CommandClass::ThermostatSetpoint,
        CommandClass::ThermostatFanMode,
        CommandClass::ThermostatFanState,
        CommandClass::ClimateControlSchedule,
        CommandClass::BasicWindowCovering,
        CommandClass::Crc16Encap,
        CommandClass::MultiInstanceChannel,
        CommandClass::UserCode,
        CommandClass::Configuration,
        CommandClass::Alarm,
        CommandClass::ManufacturerSpecific,
        CommandClass::Powerlevel,
        CommandClass::Protection,
        CommandClass::Lock,
        CommandClass::Battery,
        CommandClass::Clock,
        CommandClass::Hail,
        CommandClass::WakeUp,
        CommandClass::Association,
        CommandClass::Version,
        CommandClass::Indicator,
        CommandClass::Proprietary,
        CommandClass::Language,
        CommandClass::MultiInstanceAssociation,
        CommandClass::MultiCmd,
        CommandClass::EnergyProduction,
        CommandClass::AssociationCommandConfiguration,
        CommandClass::SensorAlarm,
    ];

    /// Look up a command class by its raw identifier
    pub fn from_raw(raw: u8) -> Option<CommandClass> {
        match raw {
            0x00 => Some(CommandClass::NoOperation),
            0x20 => Some(CommandClass::Basic),
            0x21 => Some(CommandClass::ControllerReplication),
            0x22 => Some(CommandClass::ApplicationStatus),
            0x25 => Some(CommandClass::SwitchBinary),
            0x26 => Some(CommandClass::SwitchMultilevel),
            0x27 => Some(CommandClass::SwitchAll),
            0x28 => Some(CommandClass::SwitchToggleBinary),
            0x29 => Some(CommandClass::SwitchToggleMultilevel),
            0x2b => Some(CommandClass::SceneActivation),
            0x30 => Some(CommandClass::SensorBinary),
            0x31 => Some(CommandClass::SensorMultilevel),
            0x32 => Some(CommandClass::Meter),
            0x35 => Some(CommandClass::MeterPulse),
            0x40 => Some(CommandClass::ThermostatMode),
            0x42 => Some(CommandClass::ThermostatOperatingState),
            0x43 => Some(CommandClass::ThermostatSetpoint),
            0x44 => Some(CommandClass::ThermostatFanMode),
            0x45 => Some(CommandClass::ThermostatFanState),
            0x46 => Some(CommandClass::ClimateControlSchedule),
            0x50 => Some(CommandClass::BasicWindowCovering),
            0x56 => Some(CommandClass::Crc16Encap),
            0x60 => Some(CommandClass::MultiInstanceChannel),
            0x63 => Some(CommandClass::UserCode),
            0x70 => Some(CommandClass::Configuration),
            0x71 => Some(CommandClass::Alarm),
            0x72 => Some(CommandClass::ManufacturerSpecific),
            0x73 => Some(CommandClass::Powerlevel),
            0x75 => Some(CommandClass::Protection),
            0x76 => Some(CommandClass::Lock),
            0x80 => Some(CommandClass::Battery),
            0x81 => Some(CommandClass::Clock),
            0x82 => Some(CommandClass::Hail),
            0x84 => Some(CommandClass::WakeUp),
            0x85 => Some(CommandClass::Association),
            0x86 => Some(CommandClass::Version),
            0x87 => Some(CommandClass::Indicator),
            0x88 => Some(CommandClass::Proprietary),
            0x89 => Some(CommandClass::Language),
            0x8e => Some(CommandClass::MultiInstanceAssociation),
            0x8f => Some(CommandClass::MultiCmd),
            0x90 => Some(CommandClass::EnergyProduction),
            0x9b => Some(CommandClass::AssociationCommandConfiguration),
            0x9c => Some(CommandClass::SensorAlarm),
            _ => None,
        }
    }

    /// Raw identifier for this command class
    pub fn raw(&self) -> u8 {
        *self as u8
    }

    /// Returns a human-readable name for the command class
    pub fn name(&self) -> &'static str {
        match self {
            CommandClass::NoOperation => "No Operation",
            CommandClass::Basic => "Basic",
            CommandClass::ControllerReplication => "Controller Replication",
            CommandClass::ApplicationStatus => "Application Status",
            CommandClass::SwitchBinary => "Switch Binary",
            CommandClass::SwitchMultilevel => "Switch Multilevel",
            CommandClass::SwitchAll => "Switch All",
            CommandClass::SwitchToggleBinary => "Switch Toggle Binary",
            CommandClass::SwitchToggleMultilevel => "Switch Toggle Multilevel",
            CommandClass::SceneActivation => "Scene Activation",
            CommandClass::SensorBinary => "Sensor Binary",
            CommandClass::SensorMultilevel => "Sensor Multilevel",
            CommandClass::Meter => "Meter",
            CommandClass::MeterPulse => "Meter Pulse",
            CommandClass::ThermostatMode => "Thermostat Mode",
            CommandClass::ThermostatOperatingState => "Thermostat Operating State",
            CommandClass::ThermostatSetpoint => "Thermostat Setpoint",
            CommandClass::ThermostatFanMode => "Thermostat Fan Mode",
            CommandClass::ThermostatFanState => "Thermostat Fan State",
            CommandClass::ClimateControlSchedule => "Climate Control Schedule",
            CommandClass::BasicWindowCovering => "Basic Window Covering",
            CommandClass::Crc16Encap => "CRC16 Encapsulation",
            CommandClass::MultiInstanceChannel => "Multi Instance/Channel",
            CommandClass::UserCode => "User Code",
            CommandClass::Configuration => "Configuration",
            CommandClass::Alarm => "Alarm",
            CommandClass::ManufacturerSpecific => "Manufacturer Specific",
            CommandClass::Powerlevel => "Powerlevel",
            CommandClass::Protection => "Protection",
            CommandClass::Lock => "Lock",
            CommandClass::Battery => "Battery",
            CommandClass::Clock => "Clock",
            CommandClass::Hail => "Hail",
            CommandClass::WakeUp => "Wake Up",
            CommandClass::Association => "Association",
            CommandClass::Version => "Version",
            CommandClass::Indicator => "Indicator",
            CommandClass::Proprietary => "Proprietary",
            CommandClass::Language => "Language",
            CommandClass::MultiInstanceAssociation => "Multi Instance Association",
            CommandClass::MultiCmd => "Multi Command",
            CommandClass::EnergyProduction => "Energy Production",
            CommandClass::AssociationCommandConfiguration => "Association Command Configuration",
            CommandClass::SensorAlarm => "Sensor Alarm",
        }
    }
}

impl TryFrom<u8> for CommandClass {
    type Error = UnknownClassError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        CommandClass::from_raw(raw).ok_or(UnknownClassError(raw))
    }
}
