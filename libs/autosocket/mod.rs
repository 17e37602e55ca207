//! # Autosocket
//!
//! Keeps one WebSocket endpoint connected for the life of the process.
//!
//! ## Features
//!
//! - **Single handle**: at most one connection attempt is pending or open
//! - **Fixed-delay retry**: every close, for any reason, is retried after one second
//! - **Pluggable seams**: transport, listener, output sink and retry strategy are traits
//! - **Observable**: atomic state, counters and a lifecycle event channel

pub mod traits;
pub mod core;

// Re-export all traits
pub use traits::*;

// Re-export core functionality
pub use self::core::{
    builder, config, connection_state, manager, ws_transport,
    builder::ManagerBuilder,
    config::ManagerConfig,
    connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState},
    manager::{
        setup_connection, ClientEvent, ConnectionManager, ManagedConnection, Metrics,
        CAPABILITY_MISSING_MESSAGE,
    },
    ws_transport::{TungsteniteHandle, TungsteniteTransport},
};

// Convenience function
pub use self::core::builder as manager_builder;
