use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Game identifier reported to the multiworld server
pub const GAME: &str = "ChecksFinder";

/// Items handling flags: full remote
pub const ITEMS_HANDLING: u8 = 0b111;

/// Client-side session state for one multiworld connection
///
/// Carries the resolved game communication path along with the bookkeeping
/// the bridge and the network layer operate on. The network protocol itself
/// is handled elsewhere; this type only holds state.
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub server_address: String,
    pub password: Option<String>,
    pub send_index: usize,
    pub syncing: bool,
    pub awaiting_bridge: bool,
    /// Files go in this path to pass data between us and the actual game
    pub game_communication_path: PathBuf,
}

impl ClientSession {
    pub fn new(
        server_address: String,
        password: Option<String>,
        game_communication_path: PathBuf,
    ) -> Self {
        Self {
            server_address,
            password,
            send_index: 0,
            syncing: false,
            awaiting_bridge: false,
            game_communication_path,
        }
    }

    /// Create the communication directory if the game hasn't made it yet
    pub fn ensure_comm_dir(&self) -> Result<()> {
        if !self.game_communication_path.exists() {
            fs::create_dir_all(&self.game_communication_path).with_context(|| {
                format!(
                    "Failed to create game communication directory {:?}",
                    self.game_communication_path
                )
            })?;
        }
        Ok(())
    }

    pub fn comm_dir(&self) -> &Path {
        &self.game_communication_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_new_session_defaults() {
        let session = ClientSession::new(
            "localhost:38281".to_string(),
            None,
            PathBuf::from("/tmp/ChecksFinder"),
        );

        assert_eq!(session.send_index, 0);
        assert!(!session.syncing);
        assert!(!session.awaiting_bridge);
        assert_eq!(session.comm_dir(), Path::new("/tmp/ChecksFinder"));
        assert_eq!(ITEMS_HANDLING, 0b111);
    }

    #[test]
    fn test_ensure_comm_dir_creates_missing() {
        let temp = TempDir::new().unwrap();
        let comm = temp.path().join("ChecksFinder");
        let session = ClientSession::new("localhost:38281".to_string(), None, comm.clone());

        session.ensure_comm_dir().unwrap();
        assert!(comm.is_dir());

        // Idempotent when the directory already exists
        session.ensure_comm_dir().unwrap();
        assert!(comm.is_dir());
    }
}
