//! Registry of connected peers and the shared broadcast feed.

use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::sync::{RwLock, broadcast};
use tracing::info;
use uuid::Uuid;

use crate::random_name;

/// A connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// Connection id.
    pub id: Uuid,
    /// Name shown in front of relayed messages.
    pub name: String,
    /// Remote address of the connection.
    pub addr: SocketAddr,
}

/// Connected peers and the feed every one of them is subscribed to.
#[derive(Debug)]
pub struct ChatHub {
    feed: broadcast::Sender<String>,
    peers: RwLock<HashMap<Uuid, Peer>>,
}

impl ChatHub {
    /// Creates a hub whose feed buffers up to `capacity` messages per peer.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (feed, _) = broadcast::channel(capacity.max(1));
        Self {
            feed,
            peers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a new connection, returning the peer and its feed.
    pub async fn register(&self, addr: SocketAddr) -> (Peer, broadcast::Receiver<String>) {
        let id = Uuid::new_v4();
        let peer = Peer {
            id,
            name: random_name(&mut rand::rng()),
            addr,
        };
        let feed = self.feed.subscribe();
        self.peers.write().await.insert(id, peer.clone());
        info!(%addr, name = %peer.name, "connects");
        (peer, feed)
    }

    /// Removes a connection from the registry.
    pub async fn unregister(&self, id: Uuid) -> Option<Peer> {
        let peer = self.peers.write().await.remove(&id);
        if let Some(peer) = &peer {
            info!(addr = %peer.addr, name = %peer.name, "disconnects");
        }
        peer
    }

    /// Sends a message to every subscribed peer, returning how many got it.
    pub fn broadcast(&self, message: String) -> usize {
        self.feed.send(message).unwrap_or(0)
    }

    /// Returns the number of registered peers.
    pub async fn peer_count(&self) -> usize {
        self.peers.read().await.len()
    }
}
