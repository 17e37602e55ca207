//! # Autosocket Traits
//!
//! The seams of the reconnecting client:
//!
//! - **Transport / ConnectionHandle**: the socket capability and its handles
//! - **ConnectionListener**: reactions to open, message and close
//! - **OutputSink**: where the capability-missing notice is rendered
//! - **ReconnectionStrategy**: delay and retry predicate between attempts

pub mod error;
pub mod listener;
pub mod reconnect;
pub mod sink;
pub mod transport;

// Re-export commonly used types
pub use error::{AutoSocketError, Result};
pub use listener::{ConnectionListener, ConsoleLogger};
pub use reconnect::{FixedDelay, ReconnectionStrategy, DEFAULT_RECONNECT_DELAY};
pub use sink::{OutputSink, StderrSink};
pub use transport::{ConnectionHandle, Transport, TransportEvent};
