//! # Autosocket core
//!
//! The reconnect state machine and the default tokio-tungstenite transport.
//!
//! ## Example
//!
//! ```rust,ignore
//! use autosocket::ConnectionManager;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> autosocket::Result<()> {
//!     let connection = ConnectionManager::builder()
//!         .reconnect_delay(Duration::from_secs(1))
//!         .build()
//!         .setup_connection("wss://example.com/ws")?;
//!
//!     // Runs until the process exits
//!     connection.join().await
//! }
//! ```

pub mod builder;
pub mod config;
pub mod connection_state;
pub mod manager;
pub mod ws_transport;

// Re-export main types
pub use builder::ManagerBuilder;
pub use config::ManagerConfig;
pub use connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState};
pub use manager::{
    setup_connection, ClientEvent, ConnectionManager, ManagedConnection, Metrics,
    CAPABILITY_MISSING_MESSAGE,
};
pub use ws_transport::{TungsteniteHandle, TungsteniteTransport};

/// Create a new connection manager builder
pub fn builder() -> ManagerBuilder {
    ManagerBuilder::new()
}
