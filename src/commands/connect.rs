use crate::{comm_path, notify, session, ClientSession, Config, Environment, SearchPath};
use anyhow::Result;

const DEFAULT_SERVER: &str = "localhost:38281";

pub fn execute(server: Option<String>, password: Option<String>) -> Result<()> {
    let config = Config::load_default()?;

    let server = server
        .or(config.server)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let password = password.or(config.password);

    let env = Environment::capture();
    let path = comm_path::resolve(&env, &SearchPath)?;

    let session = ClientSession::new(server, password, path);
    session.ensure_comm_dir()?;
    tracing::debug!(
        game = session::GAME,
        items_handling = session::ITEMS_HANDLING,
        "session state prepared"
    );

    notify::status("Game", session::GAME);
    notify::status("Server", &session.server_address);
    notify::status("Exchange", session.comm_dir().display());
    notify::success("Ready", "session prepared; waiting for the game bridge");

    Ok(())
}
