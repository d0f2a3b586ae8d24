use clap::{Parser, Subcommand};

/// ChecksFinder multiworld client
///
/// cfclient bridges the ChecksFinder desktop game with a multiworld session
/// by exchanging state files through a shared communication directory. The
/// directory is detected from the process environment: native Windows uses
/// `%localappdata%`, while Wine setups are detected through `WINEPREFIX` or
/// a wine binary on the search path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare a game session for a multiworld server
    ///
    /// Resolves the communication directory, creates it if missing, and
    /// builds the session state handed to the game bridge.
    Connect {
        /// Server address (host:port), overrides config.toml
        #[arg(value_name = "SERVER")]
        server: Option<String>,

        /// Server password
        #[arg(short, long, value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// Print the resolved game communication directory
    Path,

    /// Show platform detection details and client configuration
    Status,
}
