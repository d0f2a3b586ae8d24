use std::env;
use std::path::{Path, PathBuf};

/// Capability query: can an executable be located on the current search path?
pub trait ToolLocator {
    fn locate(&self, name: &str) -> bool;
}

/// Locates executables by scanning the directories in `$PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPath;

impl SearchPath {
    /// Find the first executable regular file named `name` in the search path
    pub fn which(&self, name: &str) -> Option<PathBuf> {
        let paths = env::var_os("PATH")?;
        for dir in env::split_paths(&paths) {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl ToolLocator for SearchPath {
    fn locate(&self, name: &str) -> bool {
        self.which(name).is_some()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

// Windows resolves executables by extension, not permission bits
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_tool(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_which_finds_executable_in_path() {
        let temp = TempDir::new().unwrap();
        let wine = fake_tool(temp.path(), "wine", 0o755);
        env::set_var("PATH", temp.path());

        let search = SearchPath;
        assert_eq!(search.which("wine"), Some(wine));
        assert!(search.locate("wine"));
        assert!(!search.locate("wine-stable"));
    }

    #[test]
    #[serial]
    fn test_which_requires_executable_bit() {
        let temp = TempDir::new().unwrap();
        fake_tool(temp.path(), "wine", 0o644);
        env::set_var("PATH", temp.path());

        assert!(!SearchPath.locate("wine"));
    }

    #[test]
    #[serial]
    fn test_which_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("wine")).unwrap();
        env::set_var("PATH", temp.path());

        assert!(!SearchPath.locate("wine"));
    }

    #[test]
    #[serial]
    fn test_which_empty_path() {
        env::set_var("PATH", "");
        assert_eq!(SearchPath.which("wine"), None);
    }
}
