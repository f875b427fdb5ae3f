//! The protocol engine boundary
//!
//! The actual Z-Wave work (serial framing, the request/ack state machine,
//! node interrogation, value caching, RF retry handling) lives in a native
//! engine outside this workspace. This module pins down the narrow contract
//! the binding relies on: start the engine against a port with a config and
//! an event sender, stop it later.

use tokio::sync::mpsc;

use crate::config::DriverConfig;
use crate::error::LinkError;
use crate::events::DriverEvent;

/// Sending half of the event channel handed to an engine on start
pub type EventSender = mpsc::UnboundedSender<DriverEvent>;

/// A black-box Z-Wave protocol engine
///
/// Implementations own the serial port and everything protocol-level. The
/// binding only starts them, stops them, and consumes their events.
///
/// Contract:
/// - `start` is called at most once per connection; it either opens the
///   port (emitting `Connected` and driving the rest of the lifecycle
///   through `events`) or returns an error without emitting anything
/// - events are emitted strictly in order; the sender is the only
///   producer for its channel
/// - `stop` is idempotent and releases the port
pub trait ProtocolEngine: Send {
    /// Start the engine against a serial port
    fn start(
        &mut self,
        port: &str,
        config: &DriverConfig,
        events: EventSender,
    ) -> Result<(), LinkError>;

    /// Stop the engine and release the port
    fn stop(&mut self);
}
