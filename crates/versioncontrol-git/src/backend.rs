//! Backend registration for the Git plugin.

use versioncontrol_core::{Capabilities, VcsBackend};

/// The Git backend's registration value.
///
/// Declares the backend's name, description, and capability bits to the
/// host framework. Git identifies whole commits with a single hash, so it
/// registers [`Capabilities::ATOMIC_COMMITS`] rather than per-file
/// revisions.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitBackend;

impl VcsBackend for GitBackend {
    fn name(&self) -> &str {
        "Git"
    }

    fn description(&self) -> &str {
        "Git is a fast, scalable, distributed revision control system with \
         an unusually rich command set that provides both high-level \
         operations and full access to internals."
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ATOMIC_COMMITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_atomic_commits() {
        let backend = GitBackend;
        assert_eq!(backend.name(), "Git");
        assert!(backend.capabilities().contains(Capabilities::ATOMIC_COMMITS));
    }
}
