use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tempfile::TempDir;
use versioncontrol_core::{
    BranchAction, Capabilities, RepoId, RevisionFormat, VcsBackend, VcsError, VcsRepository,
};
use versioncontrol_git::GitRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

/// Run a git command that consumes stdin (e.g. `update-ref --stdin`).
fn git_stdin(dir: &Path, args: &[&str], input: &str) {
    let mut child = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn setup_repo() -> (TempDir, GitRepo) {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir.path(), &["config", "user.email", "test@test.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    let repo = GitRepo::open(RepoId(1), dir.path());
    (dir, repo)
}

/// Create an empty commit and return its full hash.
fn commit(dir: &Path, message: &str) -> String {
    git(dir, &["commit", "--allow-empty", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

// ===========================================================================
// 1. Branch enumeration
// ===========================================================================

#[test]
fn empty_repo_has_no_branches() {
    let (_dir, repo) = setup_repo();
    let branches = repo.branches().unwrap();
    assert!(branches.is_empty());
}

#[test]
fn branches_lists_local_heads() {
    let (dir, repo) = setup_repo();
    let main_tip = commit(dir.path(), "initial commit");
    git(dir.path(), &["branch", "feature/x"]);

    let branches = repo.branches().unwrap();
    assert_eq!(branches.len(), 2);

    let main = &branches["main"];
    assert_eq!(main.tip.as_str(), main_tip);
    assert_eq!(main.action, BranchAction::Modified);
    assert_eq!(main.label_id, None);
    assert_eq!(main.repo_id, RepoId(1));

    assert_eq!(branches["feature/x"].tip.as_str(), main_tip);
}

#[test]
fn enumeration_is_a_fresh_snapshot() {
    let (dir, repo) = setup_repo();
    let first_tip = commit(dir.path(), "first");
    git(dir.path(), &["branch", "stable"]);
    let second_tip = commit(dir.path(), "second");

    let branches = repo.branches().unwrap();
    assert_eq!(branches["main"].tip.as_str(), second_tip);
    // The branch created before the second commit keeps its old tip.
    assert_eq!(branches["stable"].tip.as_str(), first_tip);
}

#[test]
fn enumeration_handles_output_beyond_the_pipe_buffer() {
    let (dir, _repo) = setup_repo();
    let tip = commit(dir.path(), "initial commit");

    // ~130 KiB of show-ref output, well past the OS pipe buffer (~64 KiB).
    // The executor must keep draining while the child writes, or the child
    // blocks and the deadline kills a perfectly healthy enumeration.
    let mut batch = String::new();
    for i in 0..2000 {
        batch.push_str(&format!("create refs/heads/branch-{i:04} {tip}\n"));
    }
    git_stdin(dir.path(), &["update-ref", "--stdin"], &batch);

    let repo = GitRepo::open_with_timeout(RepoId(1), dir.path(), Duration::from_secs(5));
    let branches = repo.branches().unwrap();
    assert_eq!(branches.len(), 2001);
    assert_eq!(branches["branch-0000"].tip.as_str(), tip);
    assert_eq!(branches["branch-1999"].tip.as_str(), tip);
}

// ===========================================================================
// 2. Revision formatting
// ===========================================================================

#[test]
fn short_format_matches_git_abbreviation() {
    let (dir, repo) = setup_repo();
    let tip = commit(dir.path(), "initial commit");

    let branches = repo.branches().unwrap();
    let revision = &branches["main"].tip;
    assert_eq!(
        repo.format_revision(revision, RevisionFormat::Short),
        tip[..7]
    );
    assert_eq!(repo.format_revision(revision, RevisionFormat::Full), tip);
}

// ===========================================================================
// 3. Failure modes
// ===========================================================================

#[test]
fn empty_root_fails_with_configuration_error() {
    let repo = GitRepo::open(RepoId(1), "");
    assert!(matches!(
        repo.branches(),
        Err(VcsError::Configuration { .. })
    ));
}

#[test]
fn missing_root_fails_with_spawn_error() {
    let repo = GitRepo::open(RepoId(1), "/nonexistent/path/to/repo");
    assert!(matches!(repo.branches(), Err(VcsError::ToolSpawn { .. })));
}

// ===========================================================================
// 4. Backend registration
// ===========================================================================

#[test]
fn backend_registration() {
    let (_dir, repo) = setup_repo();
    let backend = repo.backend();
    assert_eq!(backend.name(), "Git");
    assert!(
        backend
            .capabilities()
            .contains(Capabilities::ATOMIC_COMMITS)
    );
}
