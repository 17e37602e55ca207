//! Lock-free connection state and counters
//!
//! Written only from the manager's task, read from anywhere through
//! [`ManagedConnection`](crate::core::ManagedConnection).

use crate::traits::AutoSocketError;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Position of the manager in the reconnect cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    /// A handle exists and has not signalled open yet
    Connecting = 0,
    /// The current handle is open
    Open = 1,
    /// No handle is live; a retry may be pending
    Closed = 2,
    /// Setup found no transport capability. Terminal.
    Unsupported = 3,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Open,
            3 => ConnectionState::Unsupported,
            _ => ConnectionState::Closed,
        }
    }

    /// Whether this state counts as a live handle
    pub fn is_active(self) -> bool {
        matches!(self, ConnectionState::Connecting | ConnectionState::Open)
    }
}

impl AutoSocketError {
    /// The terminal state a failed setup leaves behind, if any
    pub fn terminal_state(&self) -> Option<ConnectionState> {
        match self {
            AutoSocketError::CapabilityMissing => Some(ConnectionState::Unsupported),
            _ => None,
        }
    }
}

/// Atomic cell holding a [`ConnectionState`]
#[derive(Debug)]
pub struct AtomicConnectionState {
    inner: AtomicU8,
}

impl AtomicConnectionState {
    pub fn new(state: ConnectionState) -> Self {
        Self {
            inner: AtomicU8::new(state as u8),
        }
    }

    #[inline]
    pub fn get(&self) -> ConnectionState {
        ConnectionState::from_u8(self.inner.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, state: ConnectionState) {
        self.inner.store(state as u8, Ordering::Release);
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.get() == ConnectionState::Open
    }
}

/// Atomic counters for one managed connection
#[derive(Debug, Default)]
pub struct AtomicMetrics {
    messages_received: AtomicU64,
    connect_count: AtomicU64,
    reconnect_count: AtomicU64,
}

impl AtomicMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment_received(&self) {
        self.messages_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one handle instantiation
    #[inline]
    pub fn increment_connects(&self) {
        self.connect_count.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_reconnects(&self) {
        self.reconnect_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received.load(Ordering::Relaxed)
    }

    pub fn connect_count(&self) -> u64 {
        self.connect_count.load(Ordering::Relaxed)
    }

    pub fn reconnect_count(&self) -> u64 {
        self.reconnect_count.load(Ordering::Relaxed)
    }
}
