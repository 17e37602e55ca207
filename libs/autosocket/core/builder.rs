use crate::config::ManagerConfig;
use crate::manager::ConnectionManager;
use crate::traits::*;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`ConnectionManager`]
///
/// Anything left unset falls back to the [`ManagerConfig`] default.
///
/// # Example
/// ```ignore
/// let connection = autosocket::builder()
///     .listener(MyListener::new())
///     .reconnect_delay(Duration::from_millis(500))
///     .build()
///     .setup_connection("wss://example.com/ws")?;
/// ```
#[derive(Default)]
pub struct ManagerBuilder {
    transport: Option<Arc<dyn Transport>>,
    listener: Option<Box<dyn ConnectionListener>>,
    output: Option<Arc<dyn OutputSink>>,
    reconnect_strategy: Option<Box<dyn ReconnectionStrategy>>,
    event_capacity: Option<usize>,
}

impl ManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom transport instead of tokio-tungstenite
    pub fn transport(mut self, transport: impl Transport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn listener(mut self, listener: impl ConnectionListener) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn output(mut self, output: impl OutputSink + 'static) -> Self {
        self.output = Some(Arc::new(output));
        self
    }

    pub fn reconnect_strategy(mut self, strategy: impl ReconnectionStrategy + 'static) -> Self {
        self.reconnect_strategy = Some(Box::new(strategy));
        self
    }

    /// Shorthand for an uncapped [`FixedDelay`] strategy
    pub fn reconnect_delay(self, delay: Duration) -> Self {
        self.reconnect_strategy(FixedDelay::new(delay, None))
    }

    /// Publish [`ClientEvent`](crate::core::ClientEvent)s on a queue holding at most `capacity`
    ///
    /// Events that do not fit are dropped. Without this call no queue exists.
    pub fn events(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity.max(1));
        self
    }

    pub fn build(self) -> ConnectionManager {
        let defaults = ManagerConfig::default();
        ConnectionManager::new(ManagerConfig {
            transport: self.transport.unwrap_or(defaults.transport),
            listener: self.listener.unwrap_or(defaults.listener),
            output: self.output.unwrap_or(defaults.output),
            reconnect_strategy: self
                .reconnect_strategy
                .unwrap_or(defaults.reconnect_strategy),
            event_capacity: self.event_capacity,
        })
    }
}
