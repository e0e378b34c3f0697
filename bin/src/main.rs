//! hryvnia CLI - Historical PrivatBank exchange rates.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use hryvnia_lib::prelude::*;
use hryvnia_lib::url::BASE_URL;
use std::net::SocketAddr;
use std::time::Duration;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "hryvnia")]
#[command(about = "Historical PrivatBank exchange rates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print exchange rates for the last days
    ///
    /// Tokens are scanned positionally: a number sets how many days to fetch
    /// (1-10, the last one wins) and a three-letter code adds a currency.
    /// Without codes EUR and USD are shown.
    Rates {
        /// Day count and currency codes, e.g. `3 eur pln`
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Run the websocket chat relay
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,

        /// Messages buffered per peer
        #[arg(long, default_value = "256")]
        broadcast_capacity: usize,

        #[command(flatten)]
        client: ClientArgs,
    },
}

/// Upstream client options shared by every command.
#[derive(Args)]
struct ClientArgs {
    /// Exchange rate endpoint
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Maximum concurrent requests
    #[arg(long, default_value = "10")]
    concurrency: usize,
}

impl From<ClientArgs> for ClientConfig {
    fn from(args: ClientArgs) -> Self {
        Self {
            base_url: args.base_url,
            timeout: Duration::from_secs(args.timeout),
            concurrency: args.concurrency,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Rates {
            tokens,
            format,
            client,
        } => commands::rates::rates(&tokens, format, client.into()).await,
        Commands::Serve {
            addr,
            broadcast_capacity,
            client,
        } => {
            let config = ServerConfig {
                addr,
                client: client.into(),
                broadcast_capacity,
            };
            commands::serve::serve(config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rates_tokens_accept_negative_numbers() {
        let cli = Cli::try_parse_from(["hryvnia", "rates", "3", "eur", "-2"]).unwrap();
        let Some(Commands::Rates { tokens, format, .. }) = cli.command else {
            panic!("expected rates command");
        };
        assert_eq!(tokens, ["3", "eur", "-2"]);
        assert!(matches!(format, Format::Text));
    }

    #[test]
    fn test_client_args_into_config() {
        let cli = Cli::try_parse_from(["hryvnia", "rates", "--timeout", "5", "--concurrency", "3"])
            .unwrap();
        let Some(Commands::Rates { client, .. }) = cli.command else {
            panic!("expected rates command");
        };
        let config = ClientConfig::from(client);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["hryvnia", "serve"]).unwrap();
        let Some(Commands::Serve {
            addr,
            broadcast_capacity,
            ..
        }) = cli.command
        else {
            panic!("expected serve command");
        };
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(broadcast_capacity, 256);
    }
}
