//! Common test utilities for autosocket integration tests
//!
//! - `MockTransport`: scripted transport driven by the test, recording every
//!   instantiation with the (possibly paused) tokio clock
//! - `RecordingListener`: listener that keeps every reaction it sees
//! - `MockWsServer`: real WebSocket server that greets and hangs up

#![allow(dead_code)]

use async_trait::async_trait;
use autosocket::{ConnectionHandle, ConnectionListener, Transport, TransportEvent};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, watch, Notify};
use tokio::time::Instant;

pub const URI: &str = "wss://example.com/ws";

/// One call to `Transport::open`
#[derive(Debug, Clone)]
pub struct Attempt {
    pub uri: String,
    pub at: Instant,
}

struct MockInner {
    available: bool,
    attempts: Mutex<Vec<Attempt>>,
    controllers: Mutex<Vec<mpsc::UnboundedSender<TransportEvent>>>,
    count_tx: watch::Sender<usize>,
    live: AtomicUsize,
    max_live: AtomicUsize,
}

/// Transport whose handles emit exactly what the test tells them to
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

impl MockTransport {
    pub fn available() -> Self {
        Self::with_availability(true)
    }

    pub fn unavailable() -> Self {
        Self::with_availability(false)
    }

    fn with_availability(available: bool) -> Self {
        let (count_tx, _) = watch::channel(0);
        Self {
            inner: Arc::new(MockInner {
                available,
                attempts: Mutex::new(Vec::new()),
                controllers: Mutex::new(Vec::new()),
                count_tx,
                live: AtomicUsize::new(0),
                max_live: AtomicUsize::new(0),
            }),
        }
    }

    /// Wait until at least `n` handles have been instantiated
    pub async fn wait_for_attempts(&self, n: usize) {
        let mut rx = self.inner.count_tx.subscribe();
        rx.wait_for(|count| *count >= n)
            .await
            .expect("mock transport dropped");
    }

    /// Push an event to the `index`-th handle ever created
    pub fn emit(&self, index: usize, event: TransportEvent) {
        let controllers = self.inner.controllers.lock();
        controllers[index]
            .send(event)
            .expect("handle already dropped");
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.inner.attempts.lock().clone()
    }

    pub fn attempt_count(&self) -> usize {
        self.inner.attempts.lock().len()
    }

    /// Handles currently alive
    pub fn live(&self) -> usize {
        self.inner.live.load(Ordering::SeqCst)
    }

    /// Highest number of handles ever alive at once
    pub fn max_live(&self) -> usize {
        self.inner.max_live.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    fn is_available(&self) -> bool {
        self.inner.available
    }

    fn open(&self, uri: &str) -> Box<dyn ConnectionHandle> {
        let (tx, rx) = mpsc::unbounded_channel();

        let live = self.inner.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.max_live.fetch_max(live, Ordering::SeqCst);

        self.inner.controllers.lock().push(tx);
        let count = {
            let mut attempts = self.inner.attempts.lock();
            attempts.push(Attempt {
                uri: uri.to_string(),
                at: Instant::now(),
            });
            attempts.len()
        };
        self.inner.count_tx.send_replace(count);

        Box::new(MockHandle {
            rx,
            inner: Arc::clone(&self.inner),
        })
    }
}

struct MockHandle {
    rx: mpsc::UnboundedReceiver<TransportEvent>,
    inner: Arc<MockInner>,
}

#[async_trait]
impl ConnectionHandle for MockHandle {
    async fn next_event(&mut self) -> TransportEvent {
        self.rx.recv().await.unwrap_or(TransportEvent::Close)
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.inner.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// What a listener saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Open,
    Message(String),
    Close,
    RetryScheduled(Duration),
}

/// Listener keeping every reaction with the clock reading it arrived at
#[derive(Clone, Default)]
pub struct RecordingListener {
    log: Arc<Mutex<Vec<(Reaction, Instant)>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reactions(&self) -> Vec<Reaction> {
        self.log.lock().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter_map(|(r, _)| match r {
                Reaction::Message(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clock readings of every close reaction, in order
    pub fn closed_at(&self) -> Vec<Instant> {
        self.log
            .lock()
            .iter()
            .filter(|(r, _)| *r == Reaction::Close)
            .map(|(_, at)| *at)
            .collect()
    }

    fn record(&self, reaction: Reaction) {
        self.log.lock().push((reaction, Instant::now()));
    }
}

impl ConnectionListener for RecordingListener {
    fn on_open(&mut self) {
        self.record(Reaction::Open);
    }

    fn on_message(&mut self, payload: &str) {
        self.record(Reaction::Message(payload.to_string()));
    }

    fn on_close(&mut self) {
        self.record(Reaction::Close);
    }

    fn on_reconnect_scheduled(&mut self, delay: Duration) {
        self.record(Reaction::RetryScheduled(delay));
    }
}

/// Output sink collecting lines
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl autosocket::OutputSink for RecordingSink {
    fn output(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}

/// A mock WebSocket server that sends one greeting per connection and then
/// closes it, forcing the client to reconnect
pub struct MockWsServer {
    pub addr: SocketAddr,
    accepted: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
}

impl MockWsServer {
    /// Create and start a new mock WebSocket server
    pub async fn start(greeting: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(Notify::new());

        let accepted_clone = Arc::clone(&accepted);
        let shutdown_clone = Arc::clone(&shutdown);
        let greeting = greeting.to_string();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                let greeting = greeting.clone();
                                let accepted = Arc::clone(&accepted_clone);
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, greeting, accepted).await;
                                });
                            }
                            Err(e) => {
                                eprintln!("Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_clone.notified() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            accepted,
            shutdown,
        }
    }

    async fn handle_connection(
        stream: tokio::net::TcpStream,
        greeting: String,
        accepted: Arc<AtomicUsize>,
    ) {
        use futures::SinkExt;
        use tokio_tungstenite::accept_async;
        use tokio_tungstenite::tungstenite::Message;

        let mut ws_stream = match accept_async(stream).await {
            Ok(ws) => ws,
            Err(e) => {
                eprintln!("WebSocket handshake failed: {}", e);
                return;
            }
        };
        accepted.fetch_add(1, Ordering::SeqCst);

        if ws_stream.send(Message::Text(greeting)).await.is_ok() {
            let _ = ws_stream.close(None).await;
        }
    }

    /// Get the WebSocket URL for this server
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Completed handshakes so far
    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Shutdown the server
    pub fn shutdown(&self) {
        self.shutdown.notify_waiters();
    }
}

impl Drop for MockWsServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
