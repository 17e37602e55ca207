//! Default transport backed by tokio-tungstenite

use crate::traits::*;
use async_trait::async_trait;
use futures::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// `ws://` / `wss://` transport over tokio-tungstenite
#[derive(Debug, Default, Clone, Copy)]
pub struct TungsteniteTransport;

impl TungsteniteTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for TungsteniteTransport {
    /// The socket stack runs on tokio; without a reachable runtime there is
    /// nothing to drive it.
    fn is_available(&self) -> bool {
        tokio::runtime::Handle::try_current().is_ok()
    }

    fn open(&self, uri: &str) -> Box<dyn ConnectionHandle> {
        Box::new(TungsteniteHandle::new(uri))
    }
}

enum HandleState {
    /// Handshake not started yet
    Pending(String),
    Connected(WsStream),
    Finished,
}

/// One tokio-tungstenite connection
///
/// The handshake runs on the first poll so that instantiation stays
/// synchronous and infallible.
pub struct TungsteniteHandle {
    state: HandleState,
}

impl TungsteniteHandle {
    pub fn new(uri: &str) -> Self {
        Self {
            state: HandleState::Pending(uri.to_string()),
        }
    }
}

#[async_trait]
impl ConnectionHandle for TungsteniteHandle {
    async fn next_event(&mut self) -> TransportEvent {
        loop {
            match std::mem::replace(&mut self.state, HandleState::Finished) {
                HandleState::Pending(uri) => {
                    return match connect_async(uri.as_str()).await {
                        Ok((stream, _)) => {
                            info!("Connected to {}", uri);
                            self.state = HandleState::Connected(stream);
                            TransportEvent::Open
                        }
                        Err(e) => {
                            warn!("Failed to connect to {}: {}", uri, e);
                            TransportEvent::Close
                        }
                    };
                }
                HandleState::Connected(mut stream) => match stream.next().await {
                    Some(Ok(msg)) => match classify(msg) {
                        Some(TransportEvent::Close) => {
                            debug!("Close frame received");
                            return TransportEvent::Close;
                        }
                        Some(event) => {
                            self.state = HandleState::Connected(stream);
                            return event;
                        }
                        None => {
                            self.state = HandleState::Connected(stream);
                        }
                    },
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        return TransportEvent::Close;
                    }
                    None => {
                        debug!("WebSocket stream ended");
                        return TransportEvent::Close;
                    }
                },
                HandleState::Finished => return TransportEvent::Close,
            }
        }
    }
}

/// Map a tungstenite frame to a transport event, `None` for control frames
fn classify(msg: Message) -> Option<TransportEvent> {
    match msg {
        Message::Text(text) => Some(TransportEvent::Message(text)),
        Message::Binary(data) => Some(TransportEvent::Message(
            String::from_utf8_lossy(&data).into_owned(),
        )),
        Message::Close(_) => Some(TransportEvent::Close),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => None,
    }
}
