use crate::{comm_path, notify, Config, Environment, SearchPath, ToolLocator};
use anyhow::Result;

pub fn execute() -> Result<()> {
    let env = Environment::capture();
    let search = SearchPath;

    let present = |found: bool| if found { "present" } else { "not set" };
    notify::status("localappdata", present(env.localappdata.is_some()));
    notify::status("WINEPREFIX", present(env.wineprefix.is_some()));
    notify::status(
        "wine",
        if search.locate("wine") || search.locate("wine-stable") {
            "found on PATH"
        } else {
            "not found"
        },
    );

    let config = Config::load_default()?;
    notify::status(
        "Server",
        config.server.as_deref().unwrap_or("not configured"),
    );

    let path = comm_path::resolve(&env, &search)?;
    notify::status("Exchange", path.display());

    Ok(())
}
