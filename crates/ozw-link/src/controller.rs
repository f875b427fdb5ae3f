//! Controller connection manager
//!
//! Composes an engine handle with an event channel instead of merging
//! capabilities onto one object: the controller owns the engine and the
//! sending half of the channel, callers own the [`EventStream`]. One
//! connection at a time, one consumer per stream.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::DriverConfig;
use crate::engine::ProtocolEngine;
use crate::error::LinkError;
use crate::events::DriverEvent;

/// Receiving half of a connection's event channel
///
/// Single consumer; events arrive in emission order. The stream ends
/// (yields `None`) once the connection is closed and all pending events
/// have been consumed.
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<DriverEvent>,
}

impl EventStream {
    fn new(rx: mpsc::UnboundedReceiver<DriverEvent>) -> Self {
        Self { rx }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<DriverEvent> {
        self.rx.recv().await
    }

    /// Receive the next event without awaiting, if one is queued
    pub fn try_next(&mut self) -> Option<DriverEvent> {
        self.rx.try_recv().ok()
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

/// Manages one connection between a protocol engine and its consumer
pub struct Controller<E: ProtocolEngine> {
    engine: E,
    config: DriverConfig,
    connected_port: Option<String>,
    event_tx: Option<mpsc::UnboundedSender<DriverEvent>>,
}

impl<E: ProtocolEngine> Controller<E> {
    /// Create a controller over an engine with a merged config
    pub fn new(engine: E, config: DriverConfig) -> Self {
        Self {
            engine,
            config,
            connected_port: None,
            event_tx: None,
        }
    }

    /// The config this controller starts engines with
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Port of the open connection, if any
    pub fn port(&self) -> Option<&str> {
        self.connected_port.as_deref()
    }

    /// Check if a connection is open
    pub fn is_connected(&self) -> bool {
        self.connected_port.is_some()
    }

    /// Open a connection on the given port
    ///
    /// Starts the engine up to `driver_attempts` times (a value of 0 is
    /// treated as 1). On success the returned stream delivers the engine's
    /// lifecycle starting with `Connected`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::AlreadyConnected`] when a connection is open,
    /// or [`LinkError::DriverFailed`] once every start attempt failed.
    pub fn connect(&mut self, port: &str) -> Result<EventStream, LinkError> {
        if let Some(open) = &self.connected_port {
            return Err(LinkError::AlreadyConnected(open.clone()));
        }

        let attempts = self.config.driver_attempts.max(1);
        let (tx, rx) = mpsc::unbounded_channel();

        let mut last_error = String::new();
        for attempt in 1..=attempts {
            match self.engine.start(port, &self.config, tx.clone()) {
                Ok(()) => {
                    info!("Driver started on {} (attempt {})", port, attempt);
                    self.connected_port = Some(port.to_string());
                    self.event_tx = Some(tx);
                    return Ok(EventStream::new(rx));
                }
                Err(e) => {
                    warn!("Driver start failed on {} (attempt {}): {}", port, attempt, e);
                    last_error = e.to_string();
                }
            }
        }

        Err(LinkError::DriverFailed {
            attempts,
            last_error,
        })
    }

    /// Close the open connection
    ///
    /// Stops the engine and delivers a final `Disconnected` event before
    /// the stream ends.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotConnected`] when no connection is open.
    pub fn disconnect(&mut self) -> Result<(), LinkError> {
        let port = self.connected_port.take().ok_or(LinkError::NotConnected)?;
        self.engine.stop();

        if let Some(tx) = self.event_tx.take() {
            // Consumer may already be gone; that just means nobody is left
            // to observe the Disconnected event
            let _ = tx.send(DriverEvent::Disconnected { port: port.clone() });
        }

        info!("Disconnected from {}", port);
        Ok(())
    }

    /// Tear down, stopping the engine if a connection is still open
    pub fn into_engine(mut self) -> E {
        if self.connected_port.take().is_some() {
            self.engine.stop();
        }
        self.engine
    }
}
