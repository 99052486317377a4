//! Label selection between two items.
//!
//! The host framework asks the backend which label an item should wear when
//! it is compared against another item. The generic answer walks the label
//! graph (the framework's [`LabelIntersector`]); Git allows a shortcut.

use versioncontrol_core::{Branch, Item, LabelIntersector, VcsError};

use crate::repo::GitRepo;

/// Pick the label `item` should wear when compared against `other`.
///
/// Git revision identifiers are global: if two items carry the same
/// revision, an item at another path with that revision can wear the same
/// label, so `other`'s already-selected label is reused without running the
/// intersection. (That assumption does not hold for VCSes without global
/// revision identifiers, which is why it lives here and not in the
/// framework.) Otherwise the framework's intersector decides.
///
/// `hints` are optional label names forwarded to the intersector.
pub fn selected_label_from_item(
    repo: &GitRepo,
    item: &Item,
    other: &Item,
    hints: &[String],
    intersector: &dyn LabelIntersector,
) -> Result<Option<Branch>, VcsError> {
    if item.revision == other.revision {
        return Ok(other.selected_label.clone());
    }

    intersector.branch_intersect(repo, item, other, hints)
}
