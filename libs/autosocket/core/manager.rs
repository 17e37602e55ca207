use crate::config::ManagerConfig;
use crate::connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState};
use crate::builder::ManagerBuilder;
use crate::traits::*;
use crossbeam_channel::{bounded, Receiver, RecvError, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Text handed to the output sink when the transport capability is missing
pub const CAPABILITY_MISSING_MESSAGE: &str =
    "WebSocket is not supported in this environment, cannot connect.";

/// Lifecycle notifications published by a running manager
///
/// Only published when the manager was built with
/// [`ManagerBuilder::events`]; a full queue drops new events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// A new handle was instantiated (consecutive failed attempts so far)
    Connecting(usize),
    /// The current handle opened
    Opened,
    /// A message arrived on the current handle
    Message(String),
    /// The current handle closed
    Closed,
    /// The next handle will be opened after this delay
    ReconnectScheduled(Duration),
}

/// Counters snapshot for a managed connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub messages_received: u64,
    pub connect_count: u64,
    pub reconnect_count: u64,
    pub connection_state: ConnectionState,
}

/// Keeps a single WebSocket endpoint connected, indefinitely
///
/// The manager owns the slot for the one current handle. Each time that
/// handle closes it is dropped, the reconnection strategy picks a delay,
/// and after the delay a fresh handle is opened against the same URI and
/// fed to the same [`ConnectionListener`].
///
/// ```text
/// Connecting ──open──> Open ──close──> Closed ──(delay)──> Connecting ...
///      └──────────────close──────────────┘
/// ```
///
/// Once started there is no way to stop it; clean and error-induced
/// closes are handled identically.
pub struct ConnectionManager {
    config: ManagerConfig,
}

impl ConnectionManager {
    /// Create a manager from an explicit configuration
    pub fn new(config: ManagerConfig) -> Self {
        Self { config }
    }

    /// Start building a manager
    pub fn builder() -> ManagerBuilder {
        ManagerBuilder::new()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Connect to `uri` and keep reconnecting for as long as the process lives
    ///
    /// The capability gate runs first: if the transport reports itself
    /// unavailable, the output sink receives [`CAPABILITY_MISSING_MESSAGE`]
    /// once, no handle is ever opened, and
    /// [`AutoSocketError::CapabilityMissing`] is returned.
    ///
    /// Otherwise the reconnect loop is spawned on the current tokio runtime
    /// and a read-only [`ManagedConnection`] is returned.
    pub fn setup_connection(self, uri: impl Into<String>) -> Result<ManagedConnection> {
        let uri: String = uri.into();
        if uri.trim().is_empty() {
            return Err(AutoSocketError::Configuration(
                "endpoint URI must not be empty".to_string(),
            ));
        }

        if !self.config.transport.is_available() {
            warn!("WebSocket transport unavailable, not connecting to {}", uri);
            self.config.output.output(CAPABILITY_MISSING_MESSAGE);
            return Err(AutoSocketError::CapabilityMissing);
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            AutoSocketError::Configuration(format!("no tokio runtime to drive the connection: {}", e))
        })?;

        let uri: Arc<str> = Arc::from(uri);
        let state = Arc::new(AtomicConnectionState::new(ConnectionState::Connecting));
        let metrics = Arc::new(AtomicMetrics::new());
        let (event_tx, event_rx) = match self.config.event_capacity {
            Some(capacity) => {
                let (tx, rx) = bounded(capacity);
                (Some(tx), Some(rx))
            }
            None => (None, None),
        };

        let task = {
            let uri = Arc::clone(&uri);
            let state = Arc::clone(&state);
            let metrics = Arc::clone(&metrics);

            runtime.spawn(async move {
                run_manager(self.config, uri, state, metrics, event_tx).await;
            })
        };

        Ok(ManagedConnection {
            uri,
            state,
            metrics,
            event_rx,
            task,
        })
    }
}

/// Read-only view of a running manager
///
/// Dropping it does not stop the connection.
pub struct ManagedConnection {
    uri: Arc<str>,
    state: Arc<AtomicConnectionState>,
    metrics: Arc<AtomicMetrics>,
    event_rx: Option<Receiver<ClientEvent>>,
    task: tokio::task::JoinHandle<()>,
}

impl ManagedConnection {
    /// The endpoint every attempt targets
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[inline]
    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            messages_received: self.metrics.messages_received(),
            connect_count: self.metrics.connect_count(),
            reconnect_count: self.metrics.reconnect_count(),
            connection_state: self.state.get(),
        }
    }

    /// Try to receive a lifecycle event (non-blocking)
    ///
    /// Always `None` when events were not enabled on the builder.
    pub fn try_recv_event(&self) -> Option<ClientEvent> {
        self.event_rx.as_ref()?.try_recv().ok()
    }

    /// Receive a lifecycle event, blocking the calling thread
    pub fn recv_event(&self) -> std::result::Result<ClientEvent, RecvError> {
        match &self.event_rx {
            Some(rx) => rx.recv(),
            None => Err(RecvError),
        }
    }

    /// Receive a lifecycle event, giving up after `timeout`
    pub fn recv_event_timeout(
        &self,
        timeout: Duration,
    ) -> std::result::Result<ClientEvent, RecvTimeoutError> {
        match &self.event_rx {
            Some(rx) => rx.recv_timeout(timeout),
            None => Err(RecvTimeoutError::Disconnected),
        }
    }

    /// Wait for the reconnect loop to end
    ///
    /// The event queue is released first, so nothing accumulates while
    /// waiting. With an uncapped strategy this never resolves.
    pub async fn join(self) -> Result<()> {
        let ManagedConnection { event_rx, task, .. } = self;
        drop(event_rx);

        task.await.map_err(|e| AutoSocketError::Join(e.to_string()))
    }
}

/// Connect to `uri` with every default: tokio-tungstenite transport,
/// console logging, stderr output and a fixed one second retry delay
pub fn setup_connection(uri: impl Into<String>) -> Result<ManagedConnection> {
    ConnectionManager::new(ManagerConfig::default()).setup_connection(uri)
}

/// The reconnect loop
async fn run_manager(
    mut config: ManagerConfig,
    uri: Arc<str>,
    state: Arc<AtomicConnectionState>,
    metrics: Arc<AtomicMetrics>,
    event_tx: Option<Sender<ClientEvent>>,
) {
    let publish = |event: ClientEvent| {
        if let Some(tx) = &event_tx {
            let _ = tx.try_send(event);
        }
    };
    let mut attempt = 0usize;

    loop {
        state.set(ConnectionState::Connecting);
        metrics.increment_connects();
        publish(ClientEvent::Connecting(attempt));
        debug!("Opening connection to {} (attempt {})", uri, attempt);

        // The current handle lives only for this iteration
        let mut handle = config.transport.open(&uri);
        drive_handle(handle.as_mut(), &mut config, &mut attempt, &state, &metrics, &publish).await;
        drop(handle);

        state.set(ConnectionState::Closed);
        config.listener.on_close();
        publish(ClientEvent::Closed);

        let Some(delay) = config.reconnect_strategy.next_delay(attempt) else {
            warn!("Reconnection strategy exhausted after {} attempts, stopping", attempt);
            break;
        };

        config.listener.on_reconnect_scheduled(delay);
        publish(ClientEvent::ReconnectScheduled(delay));

        tokio::time::sleep(delay).await;

        attempt = attempt.saturating_add(1);
        metrics.increment_reconnects();
    }

    info!("Connection manager for {} exiting", uri);
}

/// Feed one handle's events to the listener until it closes
async fn drive_handle(
    handle: &mut dyn ConnectionHandle,
    config: &mut ManagerConfig,
    attempt: &mut usize,
    state: &AtomicConnectionState,
    metrics: &AtomicMetrics,
    publish: &(dyn Fn(ClientEvent) + Sync),
) {
    loop {
        match handle.next_event().await {
            TransportEvent::Open => {
                state.set(ConnectionState::Open);
                *attempt = 0;
                config.reconnect_strategy.reset();
                config.listener.on_open();
                publish(ClientEvent::Opened);
            }
            TransportEvent::Message(payload) => {
                metrics.increment_received();
                config.listener.on_message(&payload);
                publish(ClientEvent::Message(payload));
            }
            TransportEvent::Close => return,
        }
    }
}
