//! Websocket chat relay that answers exchange rate requests.
//!
//! Every text message a client sends is relayed to all connected clients
//! under the sender's display name. Messages starting with `exchange` are
//! answered to the sender alone with the rate lines for the requested days
//! and currencies, e.g. `exchange 3 gbp`.
//!
//! - [`ChatServer`] - Connection handling and command dispatch
//! - [`ChatHub`] - Registry of connected peers and the broadcast feed
//! - [`Command`] - Parsed client message
//! - [`serve`] - Binds and runs the server until shutdown
//! - [`serve_listener`] - Runs the server on an already bound listener

#![doc(issue_tracker_base_url = "https://github.com/hryvnia-rs/hryvnia/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod hub;
mod names;
mod server;

pub use command::{Command, EXCHANGE_COMMAND};
pub use hub::{ChatHub, Peer};
pub use names::random_name;
pub use server::{ChatServer, ServerConfig, serve, serve_listener};
