//! Core types for the version-control abstraction layer.
//!
//! These types form the vocabulary shared between the traits in
//! [`backend`](crate::backend) and every backend plugin. They intentionally
//! contain nothing backend-specific — a revision identifier is whatever
//! opaque string the backend's tool emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RevisionId
// ---------------------------------------------------------------------------

/// A revision identifier as produced by the backend's tool.
///
/// For Git this is a full 40-character lowercase hex hash; other backends
/// may use shorter or structured identifiers. The value is opaque to the
/// host framework — only non-emptiness is enforced, the backend is trusted
/// to emit well-formed identifiers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionId(String);

impl RevisionId {
    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevisionId({})", self.0)
    }
}

impl FromStr for RevisionId {
    type Err = RevisionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RevisionIdError);
        }
        Ok(Self(s.to_owned()))
    }
}

/// Error from parsing an empty string into a [`RevisionId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevisionIdError;

impl fmt::Display for RevisionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("revision identifier must not be empty")
    }
}

impl std::error::Error for RevisionIdError {}

// ---------------------------------------------------------------------------
// RevisionFormat
// ---------------------------------------------------------------------------

/// Rendering format for a revision identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevisionFormat {
    /// The identifier verbatim.
    #[default]
    Full,
    /// An abbreviated form; for Git, the first 7 characters (the tool's own
    /// default abbreviation length, not a collision-safe truncation).
    Short,
}

impl FromStr for RevisionFormat {
    type Err = std::convert::Infallible;

    /// Parse a format mode string from host configuration.
    ///
    /// Permissive: `"short"` selects [`Short`](Self::Short), anything else
    /// (including `"full"` and unknown modes) falls back to
    /// [`Full`](Self::Full). Unknown modes are not an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            _ => Ok(Self::Full),
        }
    }
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Host-framework identifier of a registered repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(pub u64);

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-framework identifier of a persisted label row.
///
/// Branch enumeration never assigns one — label persistence is the host
/// framework's job, so freshly enumerated records carry `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(pub u64);

// ---------------------------------------------------------------------------
// Branch records
// ---------------------------------------------------------------------------

/// What happened to a branch, from the host framework's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchAction {
    /// The branch was created.
    Added,
    /// The branch exists or moved. Enumeration is a snapshot, not an event
    /// stream, so enumerated records always carry this action.
    Modified,
    /// The branch was deleted.
    Deleted,
}

/// One local branch of a repository.
///
/// Constructed fresh on every enumeration call; never cached or diffed
/// against a previous snapshot. `name` is never empty — the parser discards
/// records whose derived name is empty rather than storing them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// The repository this branch belongs to.
    pub repo_id: RepoId,
    /// Branch name with the ref namespace prefix stripped
    /// (e.g. `"main"`, not `"refs/heads/main"`).
    pub name: String,
    /// Snapshot action tag.
    pub action: BranchAction,
    /// Persisted label row, if the host framework has assigned one.
    pub label_id: Option<LabelId>,
    /// The revision the branch tip points at.
    pub tip: RevisionId,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A versioned item: one path at one revision inside a repository.
///
/// Items participate in label selection (see
/// [`LabelIntersector`](crate::backend::LabelIntersector)): an item may
/// already wear a label chosen by the host framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The repository the item lives in.
    pub repo_id: RepoId,
    /// Path of the item relative to the repository root.
    pub path: String,
    /// The revision this item was captured at.
    pub revision: RevisionId,
    /// The label the host framework has already selected for this item,
    /// if any.
    pub selected_label: Option<Branch>,
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Optional features a backend declares at registration time.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// One revision identifier names a whole commit rather than an
        /// individual revision per file.
        const ATOMIC_COMMITS = 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
