//! Client message parsing.

use hryvnia_types::RateQuery;

/// Prefix that turns a chat message into a rate request.
pub const EXCHANGE_COMMAND: &str = "exchange";

/// A parsed client message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rate request, answered to the sender only.
    Exchange(RateQuery),
    /// Plain chat text, relayed to every peer.
    Say(String),
}

impl Command {
    /// Parses a text message.
    ///
    /// Messages starting with [`EXCHANGE_COMMAND`] become rate requests; the
    /// remaining whitespace-separated tokens are scanned with
    /// [`RateQuery::from_tokens`]. The day count is taken from this message
    /// alone and defaults to one day.
    #[must_use]
    pub fn parse(message: &str) -> Self {
        if message.starts_with(EXCHANGE_COMMAND) {
            Self::Exchange(RateQuery::from_tokens(message.split_whitespace().skip(1)))
        } else {
            Self::Say(message.to_string())
        }
    }
}
