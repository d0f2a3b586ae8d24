use crate::cli::{Cli, Commands};
use anyhow::Result;

mod connect;
mod path;
mod status;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Connect { server, password } => connect::execute(server, password),

        Commands::Path => path::execute(),

        Commands::Status => status::execute(),
    }
}
