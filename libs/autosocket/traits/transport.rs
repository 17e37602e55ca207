use async_trait::async_trait;

/// Lifecycle signal produced by a connection handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The handshake completed and the channel is usable
    Open,
    /// An inbound message, delivered as opaque text
    Message(String),
    /// The channel is gone. Graceful close, network error, failed handshake
    /// and server-initiated close all look the same from here.
    Close,
}

/// Full-duplex, message-oriented socket capability
///
/// The manager only relies on instantiation given a URI plus the three
/// events of [`TransportEvent`]; handshake and framing are the transport's
/// own business.
pub trait Transport: Send + Sync + 'static {
    /// Whether the environment can provide this transport at all
    ///
    /// Checked once before the first instantiation. A `false` here is
    /// terminal for the manager.
    fn is_available(&self) -> bool {
        true
    }

    /// Instantiate a new handle against `uri`
    ///
    /// Instantiation itself never fails; a connection that cannot be
    /// established reports [`TransportEvent::Close`] from its first poll.
    fn open(&self, uri: &str) -> Box<dyn ConnectionHandle>;
}

/// One connection attempt/session over a [`Transport`]
#[async_trait]
pub trait ConnectionHandle: Send {
    /// Wait for the next lifecycle event
    ///
    /// Once [`TransportEvent::Close`] has been returned the handle is
    /// finished and is not polled again.
    async fn next_event(&mut self) -> TransportEvent;
}
