//! Branch enumeration — running `git show-ref --heads` and parsing its
//! output into branch records.

use std::collections::BTreeMap;

use tracing::instrument;
use versioncontrol_core::{Branch, BranchAction, RepoId, RevisionId, VcsError};

use crate::exec;
use crate::repo::GitRepo;

/// The local-heads ref namespace. Everything under it is a branch.
const HEADS_PREFIX: &str = "refs/heads/";

/// Enumerate the local branches of `repo`.
///
/// `git show-ref --heads` exits 1 with no output in a repository that has
/// no branches yet; that is a valid empty result, not an error. Non-zero
/// exit *with* output means the tool actually failed.
#[instrument(skip_all, fields(repo_id = %repo.repo_id()))]
pub(crate) fn fetch_branches(repo: &GitRepo) -> Result<BTreeMap<String, Branch>, VcsError> {
    let args = ["show-ref", "--heads"];
    let output = exec::run_git(repo, &args)?;

    if !output.success() {
        if output.stdout.trim().is_empty() && output.stderr.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        return Err(output.into_failure(&exec::command_line(&args)));
    }

    Ok(parse_show_ref(repo.repo_id(), output.lines()))
}

/// Parse `show-ref --heads`-style output lines into a branch map.
///
/// Each well-formed line is `<full-hash><space><ref-path>` with the ref
/// path under `refs/heads/`. The tool is trusted but its output is
/// defensively guarded: empty lines, lines without a field separator, refs
/// outside the heads namespace, and names that are empty after
/// prefix-stripping are all dropped with a debug diagnostic rather than
/// failing the whole enumeration. Duplicate names (should not happen for
/// distinct heads) resolve last-write-wins.
pub(crate) fn parse_show_ref<'a>(
    repo_id: RepoId,
    lines: impl Iterator<Item = &'a str>,
) -> BTreeMap<String, Branch> {
    let mut branches = BTreeMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((hash, ref_path)) = line.split_once(' ') else {
            tracing::debug!(line = %line, "dropped show-ref line without a field separator");
            continue;
        };

        let Some(name) = ref_path.strip_prefix(HEADS_PREFIX) else {
            tracing::debug!(line = %line, "dropped show-ref line outside the heads namespace");
            continue;
        };
        if name.is_empty() {
            tracing::debug!(line = %line, "dropped show-ref line with an empty branch name");
            continue;
        }

        // The line is trimmed and non-empty, so the field before the first
        // space is never empty and this parse cannot fail.
        let Ok(tip) = hash.parse::<RevisionId>() else {
            continue;
        };

        branches.insert(
            name.to_owned(),
            Branch {
                repo_id,
                name: name.to_owned(),
                action: BranchAction::Modified,
                label_id: None,
                tip,
            },
        );
    }

    branches
}
