//! Log output for the hryvnia CLI.

use tracing::Level;

/// Installs the stderr log subscriber.
///
/// Stdout is left to rate output so it can be piped.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
