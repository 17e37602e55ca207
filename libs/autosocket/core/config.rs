use crate::traits::*;
use std::sync::Arc;

/// Configuration for a [`ConnectionManager`](crate::core::ConnectionManager)
///
/// Assembled by [`ManagerBuilder`](crate::core::ManagerBuilder); every
/// collaborator has a default so `ManagerConfig::default()` is a working
/// setup against a real WebSocket server.
pub struct ManagerConfig {
    /// Socket capability used to open each handle
    pub(crate) transport: Arc<dyn Transport>,

    /// Reactions shared by every handle
    pub(crate) listener: Box<dyn ConnectionListener>,

    /// Where the capability-missing notice goes
    pub(crate) output: Arc<dyn OutputSink>,

    /// Delay and retry predicate applied after each close
    pub(crate) reconnect_strategy: Box<dyn ReconnectionStrategy>,

    /// Capacity of the lifecycle event queue; `None` publishes no events
    pub(crate) event_capacity: Option<usize>,
}

impl ManagerConfig {
    /// Delay the strategy would apply before the first retry
    pub fn first_retry_delay(&self) -> Option<std::time::Duration> {
        self.reconnect_strategy.next_delay(0)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            transport: Arc::new(crate::core::TungsteniteTransport::new()),
            listener: Box::new(ConsoleLogger),
            output: Arc::new(StderrSink),
            reconnect_strategy: Box::new(FixedDelay::default()),
            event_capacity: None,
        }
    }
}
