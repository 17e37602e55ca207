use std::time::Duration;
use tracing::{debug, info};

/// Reactions attached to every connection handle the manager creates
///
/// The manager owns exactly one listener and feeds it the events of each
/// handle in turn, so the same reactions survive every reconnect.
///
/// # Ordering
/// Hooks are invoked strictly sequentially from the manager's task. Two hooks
/// never run at the same time, for the same handle or across handles.
///
/// # Example
///
/// ```ignore
/// struct Printer;
///
/// impl ConnectionListener for Printer {
///     fn on_open(&mut self) {
///         println!("up");
///     }
///
///     fn on_message(&mut self, payload: &str) {
///         println!("{payload}");
///     }
///
///     fn on_close(&mut self) {
///         println!("down");
///     }
/// }
/// ```
pub trait ConnectionListener: Send + 'static {
    /// The transport signalled that the handle is open
    fn on_open(&mut self);

    /// An inbound message arrived on the open handle
    ///
    /// The payload is passed through exactly as the transport delivered it.
    fn on_message(&mut self, payload: &str);

    /// The handle closed, for whatever reason
    fn on_close(&mut self);

    /// A new handle will be opened after `delay`
    fn on_reconnect_scheduled(&mut self, _delay: Duration) {}
}

/// Default listener that writes lifecycle lines and payloads to the log
///
/// At `info` a connection's life reads as "socket connection opened.", its
/// payloads, then "socket connection closed. reconnecting...".
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl ConnectionListener for ConsoleLogger {
    fn on_open(&mut self) {
        info!("socket connection opened.");
    }

    fn on_message(&mut self, payload: &str) {
        info!("{}", payload);
    }

    fn on_close(&mut self) {
        debug!("socket connection closed.");
    }

    fn on_reconnect_scheduled(&mut self, delay: Duration) {
        info!("socket connection closed. reconnecting...");
        debug!("next attempt in {:?}", delay);
    }
}
