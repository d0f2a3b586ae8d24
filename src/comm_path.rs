use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::environment::Environment;
use crate::tools::ToolLocator;

/// Directory name the game uses under each platform root
const GAME_DIR: &str = "ChecksFinder";

/// User profile subpath inside a Wine `drive_c`, expanded with `$USER`
const WINE_USER_SUBPATH: &str = "users/$USER/Local Settings/Application Data/ChecksFinder";

/// Wine binaries that indicate a usable default prefix; either one suffices
const WINE_TOOLS: [&str; 2] = ["wine", "wine-stable"];

/// The single failure mode of path resolution. Always fatal at the process
/// boundary: the game bridge cannot run without a communication directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommPathError {
    #[error("ChecksFinder client couldn't detect the system type. Unable to infer the required game communication path")]
    Undeterminable,
}

/// Resolve the directory used to exchange state files with the game.
///
/// Checks are ordered and the first match wins:
/// 1. `localappdata` set - native Windows, `<localappdata>/ChecksFinder`
/// 2. `WINEPREFIX` set - explicit Wine root, user profile under its `drive_c`
/// 3. `wine` or `wine-stable` on the search path - default `~/.wine` root
///
/// `$USER` in the Wine profile subpath is substituted from the snapshot and
/// left literal when unset. The produced path is not validated for existence
/// or writability; that is the bridge's concern.
pub fn resolve(env: &Environment, tools: &dyn ToolLocator) -> Result<PathBuf, CommPathError> {
    if let Some(localappdata) = &env.localappdata {
        return Ok(Path::new(localappdata).join(GAME_DIR));
    }

    // Not windows. The game is an exe, so look for wine to run it.
    if let Some(wineprefix) = &env.wineprefix {
        return Ok(Path::new(wineprefix)
            .join("drive_c")
            .join(expand_user_subpath(env)));
    }

    if WINE_TOOLS.iter().any(|tool| tools.locate(tool)) {
        // Default root of wine system data, deep in which is app data
        return Ok(default_wine_root(env)
            .join("drive_c")
            .join(expand_user_subpath(env)));
    }

    Err(CommPathError::Undeterminable)
}

/// Expand `$USER` from the snapshot; unknown variables stay literal
fn expand_user_subpath(env: &Environment) -> String {
    shellexpand::env_with_context_no_errors(WINE_USER_SUBPATH, |var| {
        if var == "USER" {
            env.user.clone()
        } else {
            None
        }
    })
    .into_owned()
}

/// `~/.wine`, or the literal token when home is undeterminable
fn default_wine_root(env: &Environment) -> PathBuf {
    match &env.home {
        Some(home) => home.join(".wine"),
        None => PathBuf::from("~/.wine"),
    }
}
