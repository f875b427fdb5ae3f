//! Error types for the connection manager

use thiserror::Error;

/// Errors that can occur managing an engine connection
#[derive(Debug, Error)]
pub enum LinkError {
    /// A connection is already open
    #[error("already connected to {0}")]
    AlreadyConnected(String),

    /// No connection is open
    #[error("not connected")]
    NotConnected,

    /// The engine failed to start after the configured number of attempts
    #[error("driver failed to start after {attempts} attempt(s): {last_error}")]
    DriverFailed {
        /// How many starts were attempted
        attempts: u32,
        /// The error from the final attempt
        last_error: String,
    },

    /// The engine reported an error
    #[error("engine error: {0}")]
    Engine(String),

    /// The event channel was closed while a connection was open
    #[error("event channel closed")]
    ChannelClosed,
}
