use clap::Parser;
use cfclient::cli::Cli;
use cfclient::commands;
use cfclient::{notify, CommPathError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing; --verbose raises the fallback filter
    let fallback = if cli.verbose {
        "cfclient=debug"
    } else {
        "cfclient=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Execute command
    if let Err(err) = commands::execute(cli) {
        // An undeterminable communication path is fatal: nothing downstream can
        // run without it. Log once, notify once, exit non-zero.
        if let Some(path_err) = err.downcast_ref::<CommPathError>() {
            tracing::error!("Error: {path_err}");
            notify::messagebox("Error", &path_err.to_string(), true);
        } else {
            notify::error(&format!("{err:#}"));
        }
        std::process::exit(1);
    }
}
