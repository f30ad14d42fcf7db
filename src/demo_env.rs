//! Isolated demo environment layout.
//!
//! Each recorded demo runs inside a disposable directory tree standing in
//! for the operator's home and working repository, so recordings never touch
//! the real environment. All paths derive from three fields; nothing here
//! touches the filesystem.

use std::path::PathBuf;

/// Isolated demo environment with its own repo and home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoEnv {
    pub name: String,
    pub out_dir: PathBuf,
    pub repo_name: String,
}

impl DemoEnv {
    pub fn new(name: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            out_dir: out_dir.into(),
            repo_name: "worktrunk".to_string(),
        }
    }

    pub fn with_repo_name(mut self, repo_name: impl Into<String>) -> Self {
        self.repo_name = repo_name.into();
        self
    }

    /// Sandbox root: `<out_dir>/.demo-<name>`.
    pub fn root(&self) -> PathBuf {
        self.out_dir.join(format!(".demo-{}", self.name))
    }

    /// Sandbox HOME; same directory as the root.
    pub fn home(&self) -> PathBuf {
        self.root()
    }

    /// Parent directory for working checkouts.
    pub fn work_base(&self) -> PathBuf {
        self.home().join("w")
    }

    /// Working checkout of the demoed repository.
    pub fn repo(&self) -> PathBuf {
        self.work_base().join(&self.repo_name)
    }

    /// Bare remote the checkout pushes to.
    pub fn bare_remote(&self) -> PathBuf {
        self.root().join("remote.git")
    }
}

/// The operator's actual home directory, for callers that need to contrast
/// sandbox HOME against the real one (e.g. when whitelisting env vars).
pub fn real_home() -> Option<PathBuf> {
    home::home_dir()
}
