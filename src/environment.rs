use std::env;
use std::path::PathBuf;

/// Read-only snapshot of the environment signals used for platform detection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `%localappdata%` - present on native Windows
    pub localappdata: Option<String>,
    /// `WINEPREFIX` - explicit Wine filesystem root
    pub wineprefix: Option<String>,
    /// `USER` - substituted into the Wine user profile subpath
    pub user: Option<String>,
    /// Home directory, when determinable
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Snapshot the current process environment
    ///
    /// Windows exposes environment variables case-insensitively, so both
    /// `LOCALAPPDATA` and `localappdata` spellings are accepted.
    pub fn capture() -> Self {
        Self {
            localappdata: env::var("LOCALAPPDATA")
                .or_else(|_| env::var("localappdata"))
                .ok(),
            wineprefix: env::var("WINEPREFIX").ok(),
            user: env::var("USER").ok(),
            home: directories::BaseDirs::new().map(|bd| bd.home_dir().to_path_buf()),
        }
    }
}
