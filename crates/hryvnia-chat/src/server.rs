//! Websocket connection handling and the server entry point.

use axum::Router;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{ConnectInfo, State};
use axum::response::Response;
use axum::routing::get;
use futures::{SinkExt, StreamExt};
use hryvnia_aggregate::rates_for_query;
use hryvnia_fetch::{ClientConfig, RateClient, RateSource};
use hryvnia_types::{HryvniaError, RateQuery, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::{ChatHub, Command, Peer};

/// Configuration for the chat server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Client used to answer `exchange` requests.
    pub client: ClientConfig,
    /// Messages buffered per peer before a slow peer starts missing some.
    pub broadcast_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            client: ClientConfig::default(),
            broadcast_capacity: 256,
        }
    }
}

/// Chat relay state shared by every connection.
pub struct ChatServer {
    hub: ChatHub,
    source: Arc<dyn RateSource>,
    concurrency: usize,
}

impl std::fmt::Debug for ChatServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatServer")
            .field("hub", &self.hub)
            .field("base_url", &self.source.base_url())
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl ChatServer {
    /// Creates a server answering rate requests from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn RateSource>, concurrency: usize, broadcast_capacity: usize) -> Self {
        Self {
            hub: ChatHub::new(broadcast_capacity),
            source,
            concurrency,
        }
    }

    /// Creates a server backed by a [`RateClient`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client =
            RateClient::new(config.client.clone()).map_err(|e| HryvniaError::Http(e.to_string()))?;
        Ok(Self::new(
            Arc::new(client),
            config.client.concurrency,
            config.broadcast_capacity,
        ))
    }

    /// Returns the peer registry.
    #[must_use]
    pub const fn hub(&self) -> &ChatHub {
        &self.hub
    }

    /// Builds the router serving the websocket endpoint at `/`.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new().route("/", get(upgrade)).with_state(self)
    }

    /// Handles one text message from `peer`.
    ///
    /// Chat text is broadcast to every peer and `None` is returned. Rate
    /// requests are answered with the reply meant for `peer` alone.
    pub async fn handle_message(&self, peer: &Peer, text: &str) -> Option<String> {
        match Command::parse(text) {
            Command::Exchange(query) => Some(self.answer(&query).await),
            Command::Say(message) => {
                self.hub.broadcast(format!("{}: {message}", peer.name));
                None
            }
        }
    }

    /// Runs a rate query and renders the reply, one line per date.
    pub async fn answer(&self, query: &RateQuery) -> String {
        let report = rates_for_query(self.source.as_ref(), query, self.concurrency).await;
        if report.lines.is_empty() {
            return format!(
                "No exchange rates available for the last {} day(s)",
                query.days
            );
        }
        report
            .lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serves one websocket connection until the client goes away.
    async fn run_connection(self: Arc<Self>, socket: WebSocket, addr: SocketAddr) {
        let (peer, feed) = self.hub.register(addr).await;
        let (mut sink, mut stream) = socket.split();
        let (direct, direct_rx) = mpsc::unbounded_channel::<String>();

        let mut writer = tokio::spawn(async move {
            let mut outgoing = std::pin::pin!(outgoing_messages(feed, direct_rx));
            while let Some(text) = outgoing.next().await {
                if sink.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        });

        loop {
            let message = tokio::select! {
                message = stream.next() => message,
                _ = &mut writer => break,
            };
            match message {
                Some(Ok(Message::Text(text))) => {
                    if let Some(reply) = self.handle_message(&peer, text.as_str()).await {
                        if direct.send(reply).is_err() {
                            break;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!(%addr, error = %e, "websocket error");
                    break;
                }
            }
        }

        writer.abort();
        self.hub.unregister(peer.id).await;
    }
}

/// Merges the shared feed and a peer's direct replies into one stream.
fn outgoing_messages(
    feed: broadcast::Receiver<String>,
    direct: mpsc::UnboundedReceiver<String>,
) -> impl futures::Stream<Item = String> + Send {
    let feed = futures::stream::unfold(feed, |mut feed| async move {
        loop {
            match feed.recv().await {
                Ok(text) => return Some((text, feed)),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "peer fell behind the chat feed");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });
    let direct = futures::stream::unfold(direct, |mut direct| async move {
        direct.recv().await.map(|text| (text, direct))
    });
    futures::stream::select(feed, direct)
}

async fn upgrade(
    ws: WebSocketUpgrade,
    State(server): State<Arc<ChatServer>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    ws.on_upgrade(move |socket| server.run_connection(socket, addr))
}

/// Binds `addr` and serves the chat relay until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(server: Arc<ChatServer>, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    serve_listener(server, listener, shutdown).await
}

/// Serves the chat relay on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve_listener<F>(
    server: Arc<ChatServer>,
    listener: TcpListener,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "chat server listening");

    axum::serve(
        listener,
        server
            .router()
            .into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    info!("chat server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hryvnia_fetch::FetchError;
    use hryvnia_types::{Rate, RateEntry, RateRecord};
    use std::time::Duration;
    use tokio_tungstenite::tungstenite::Message as WsMessage;

    struct StaticSource {
        available: bool,
    }

    #[async_trait]
    impl RateSource for StaticSource {
        async fn fetch(&self, url: &str) -> std::result::Result<RateRecord, FetchError> {
            if !self.available {
                return Err(FetchError::Status { status: 500 });
            }
            let date = url.rsplit("date=").next().unwrap_or_default().to_string();
            let entry = |currency: &str, buy: f64| RateEntry {
                base_currency: None,
                currency: currency.to_string(),
                purchase_rate_nb: Some(Rate::new(buy)),
                sale_rate_nb: Some(Rate::new(buy)),
                purchase_rate: None,
                sale_rate: None,
            };
            Ok(RateRecord {
                date,
                bank: None,
                base_currency: None,
                base_currency_lit: None,
                exchange_rate: vec![entry("EUR", 39.2), entry("USD", 36.1)],
            })
        }
    }

    fn server(available: bool) -> ChatServer {
        ChatServer::new(Arc::new(StaticSource { available }), 10, 16)
    }

    fn addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 40000))
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.broadcast_capacity, 256);
    }

    #[tokio::test]
    async fn test_from_config() {
        let server = ChatServer::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(server.hub().peer_count().await, 0);
    }

    #[tokio::test]
    async fn test_chat_text_is_broadcast_with_name() {
        let server = server(true);
        let (alice, mut alice_feed) = server.hub().register(addr()).await;
        let (_bob, mut bob_feed) = server.hub().register(addr()).await;

        assert_eq!(server.handle_message(&alice, "hi all").await, None);

        let expected = format!("{}: hi all", alice.name);
        assert_eq!(alice_feed.recv().await.unwrap(), expected);
        assert_eq!(bob_feed.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_exchange_replies_only_to_sender() {
        let server = server(true);
        let (alice, _alice_feed) = server.hub().register(addr()).await;
        let (_bob, mut bob_feed) = server.hub().register(addr()).await;

        let reply = server.handle_message(&alice, "exchange 3").await.unwrap();
        let lines: Vec<_> = reply.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(" --- EUR: buy: 39.2, sale: 39.2 --- USD: buy: 36.1"));
        assert!(bob_feed.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_exchange_with_currency_filter() {
        let server = server(true);
        let (alice, _feed) = server.hub().register(addr()).await;

        let reply = server.handle_message(&alice, "exchange usd").await.unwrap();
        assert!(reply.ends_with(" --- USD: buy: 36.1, sale: 36.1"));
        assert!(!reply.contains("EUR"));
    }

    #[tokio::test]
    async fn test_exchange_with_no_data() {
        let server = server(false);
        let (alice, _feed) = server.hub().register(addr()).await;

        let reply = server.handle_message(&alice, "exchange 2").await.unwrap();
        assert_eq!(reply, "No exchange rates available for the last 2 day(s)");
    }

    #[tokio::test]
    async fn test_outgoing_merges_feed_and_direct() {
        let (feed_tx, feed_rx) = broadcast::channel(4);
        let (direct_tx, direct_rx) = mpsc::unbounded_channel();
        let mut outgoing = Box::pin(outgoing_messages(feed_rx, direct_rx));

        feed_tx.send("from feed".to_string()).unwrap();
        direct_tx.send("direct".to_string()).unwrap();

        let mut received = vec![
            outgoing.next().await.unwrap(),
            outgoing.next().await.unwrap(),
        ];
        received.sort();
        assert_eq!(received, ["direct", "from feed"]);
    }

    type Client = tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >;

    async fn next_text(client: &mut Client) -> String {
        loop {
            let message = tokio::time::timeout(Duration::from_secs(5), client.next())
                .await
                .unwrap()
                .unwrap()
                .unwrap();
            if let WsMessage::Text(text) = message {
                return text.as_str().to_owned();
            }
        }
    }

    async fn wait_for_peers(server: &ChatServer, count: usize) {
        for _ in 0..100 {
            if server.hub().peer_count().await == count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("expected {count} peers, have {}", server.hub().peer_count().await);
    }

    #[tokio::test]
    async fn test_websocket_session() {
        let server = Arc::new(server(true));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("ws://{}/", listener.local_addr().unwrap());
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let running = tokio::spawn(serve_listener(server.clone(), listener, async {
            let _ = stopped.await;
        }));

        let (mut alice, _) = tokio_tungstenite::connect_async(url.as_str()).await.unwrap();
        let (mut bob, _) = tokio_tungstenite::connect_async(url.as_str()).await.unwrap();
        wait_for_peers(&server, 2).await;

        alice.send(WsMessage::Text("hi all".into())).await.unwrap();
        let echoed = next_text(&mut alice).await;
        assert!(echoed.ends_with(": hi all"), "{echoed}");
        assert_eq!(next_text(&mut bob).await, echoed);

        alice.send(WsMessage::Text("exchange 2".into())).await.unwrap();
        let reply = next_text(&mut alice).await;
        assert_eq!(reply.lines().count(), 2);
        assert!(reply.contains(" --- EUR: buy: 39.2"));

        alice.close(None).await.unwrap();
        wait_for_peers(&server, 1).await;
        bob.close(None).await.unwrap();
        wait_for_peers(&server, 0).await;

        stop.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), running)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
    }
}
