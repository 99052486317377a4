//! The backend traits — the abstraction boundary between the host framework
//! and version-control plugins.
//!
//! The host framework interacts with a version-control system exclusively
//! through [`VcsRepository`]; plugins register themselves through
//! [`VcsBackend`]. Both traits are object-safe so the framework can hold
//! `Box<dyn VcsRepository>` per configured repository.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::VcsError;
use crate::types::{Branch, Capabilities, Item, RepoId, RevisionFormat, RevisionId};

/// Registration surface of a version-control backend plugin.
///
/// One value per plugin, created at registration time. Purely descriptive:
/// the framework uses it to present the backend and gate optional features
/// on [`capabilities`](Self::capabilities).
pub trait VcsBackend {
    /// Human-readable backend name (e.g. `"Git"`).
    fn name(&self) -> &str;

    /// One-paragraph description shown in administration interfaces.
    fn description(&self) -> &str;

    /// The optional features this backend supports.
    fn capabilities(&self) -> Capabilities;
}

/// One configured repository, as seen by the host framework.
///
/// Implementations wrap whatever handle the backend needs (a working
/// directory, a connection, a subprocess environment) and answer queries
/// about the repository's state.
pub trait VcsRepository {
    /// The repository's root directory on disk.
    fn root(&self) -> &Path;

    /// The host framework's identifier for this repository.
    fn repo_id(&self) -> RepoId;

    /// Enumerate the repository's local branches.
    ///
    /// Returns a snapshot mapping branch name to its [`Branch`] record. A
    /// repository with no branches yields an empty map, never an error.
    /// Records are built fresh on every call.
    fn branches(&self) -> Result<BTreeMap<String, Branch>, VcsError>;

    /// Render a revision identifier for display.
    ///
    /// The default renders every format verbatim; backends with a
    /// conventional abbreviated form override this (Git truncates to 7
    /// characters for [`RevisionFormat::Short`]).
    fn format_revision(&self, revision: &RevisionId, format: RevisionFormat) -> String {
        let _ = format;
        revision.as_str().to_owned()
    }
}

/// Host-framework routine that finds the label two items have in common.
///
/// Invoked when two items must be compared for shared label ancestry and no
/// cheaper answer is available. The algorithm itself (walking the label
/// graph) lives in the host framework; backends only call it.
pub trait LabelIntersector {
    /// Return the nearest label shared by `a` and `b`, or `None` if the
    /// items have no label in common.
    ///
    /// `hints` are optional label names the caller believes are likely
    /// candidates; implementations may use them to short-circuit the search.
    fn branch_intersect(
        &self,
        repo: &dyn VcsRepository,
        a: &Item,
        b: &Item,
        hints: &[String],
    ) -> Result<Option<Branch>, VcsError>;
}
