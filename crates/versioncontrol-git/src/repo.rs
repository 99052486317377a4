//! The [`GitRepo`] handle — one local Git repository, as exposed to the
//! host framework through the core traits.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use versioncontrol_core::{
    Branch, RepoId, RevisionFormat, RevisionId, VcsError, VcsRepository,
};

use crate::backend::GitBackend;
use crate::branches;

/// A [`VcsRepository`] implementation backed by the installed `git` binary.
///
/// Construct via [`GitRepo::open`] or [`GitRepo::open_with_timeout`]. The
/// handle is cheap: opening performs no I/O, and the repository metadata
/// directory is resolved lazily on the first command invocation.
#[derive(Debug)]
pub struct GitRepo {
    repo_id: RepoId,
    root: PathBuf,
    /// Lazily validated `<root>/.git`, resolved at most once per handle and
    /// handed to every child process as scoped `GIT_DIR` environment.
    git_dir: OnceLock<PathBuf>,
    timeout: Duration,
    backend: GitBackend,
}

impl GitRepo {
    /// Default deadline for one `git` invocation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a handle for the repository rooted at `root`.
    pub fn open(repo_id: RepoId, root: impl Into<PathBuf>) -> Self {
        Self::open_with_timeout(repo_id, root, Self::DEFAULT_TIMEOUT)
    }

    /// Create a handle with a custom per-invocation deadline.
    ///
    /// The deadline guards against hangs on unresponsive filesystems; on
    /// expiry the child process is killed and the operation fails with
    /// [`VcsError::ToolTimeout`].
    pub fn open_with_timeout(
        repo_id: RepoId,
        root: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        Self {
            repo_id,
            root: root.into(),
            git_dir: OnceLock::new(),
            timeout,
            backend: GitBackend,
        }
    }

    /// The backend registration value this handle belongs to.
    #[must_use]
    pub fn backend(&self) -> &GitBackend {
        &self.backend
    }

    /// The repository's root directory on disk.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The host framework's identifier for this repository.
    #[must_use]
    pub fn repo_id(&self) -> RepoId {
        self.repo_id
    }

    /// The per-invocation deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the repository's metadata directory (`<root>/.git`).
    ///
    /// This is the environment setup step: validated and resolved at most
    /// once per handle, idempotent thereafter, and safe under concurrent
    /// callers. The result is passed to each child process as scoped
    /// subprocess environment — nothing process-global is mutated.
    ///
    /// # Errors
    /// [`VcsError::Configuration`] if the root path is empty.
    pub fn git_dir(&self) -> Result<&Path, VcsError> {
        if self.root.as_os_str().is_empty() {
            return Err(VcsError::Configuration {
                path: self.root.clone(),
                reason: "repository root path is empty".to_owned(),
            });
        }
        Ok(self.git_dir.get_or_init(|| self.root.join(".git")))
    }
}

impl VcsRepository for GitRepo {
    fn root(&self) -> &Path {
        &self.root
    }

    fn repo_id(&self) -> RepoId {
        self.repo_id
    }

    fn branches(&self) -> Result<BTreeMap<String, Branch>, VcsError> {
        branches::fetch_branches(self)
    }

    /// Git's short form is the first 7 characters of the hash, like
    /// `git log --abbrev-commit` does by default. Input shorter than that
    /// is returned unchanged.
    fn format_revision(&self, revision: &RevisionId, format: RevisionFormat) -> String {
        match format {
            RevisionFormat::Short => revision.as_str().chars().take(7).collect(),
            RevisionFormat::Full => revision.as_str().to_owned(),
        }
    }
}
