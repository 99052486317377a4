//! Subprocess invocation for the `git` binary.
//!
//! One blocking process per call, no retries. The repository's metadata
//! directory is handed to each child as scoped subprocess environment
//! (`GIT_DIR`), so nothing process-global is ever mutated and concurrent
//! invocations against the same handle cannot interfere.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use versioncontrol_core::VcsError;

use crate::repo::GitRepo;

/// How often to poll a running child while waiting for it to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of one `git` invocation.
///
/// A non-zero exit is not an error at this layer: callers decide whether it
/// means "nothing to report" or a hard failure (`git show-ref --heads`
/// exits 1 in a branchless repository).
pub(crate) struct GitOutput {
    code: Option<i32>,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl GitOutput {
    /// `true` if the process exited with status 0.
    pub(crate) fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Ordered stdout lines, exactly as the tool produced them.
    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines()
    }

    /// Convert a non-zero exit into the error surfaced to callers,
    /// preserving the captured output for diagnostics.
    pub(crate) fn into_failure(self, command: &str) -> VcsError {
        VcsError::ToolFailed {
            command: command.to_owned(),
            code: self.code,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

/// Render the command line for error reporting.
pub(crate) fn command_line(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

/// Run `git` with `args` against `repo`, blocking until it exits or the
/// handle's deadline expires.
///
/// Triggers the handle's environment setup on first use (see
/// [`GitRepo::git_dir`]). On deadline expiry the child is killed and
/// [`VcsError::ToolTimeout`] is returned.
pub(crate) fn run_git(repo: &GitRepo, args: &[&str]) -> Result<GitOutput, VcsError> {
    let git_dir = repo.git_dir()?;
    let timeout = repo.timeout();
    let start = Instant::now();

    let mut child = Command::new("git")
        .args(args)
        .current_dir(repo.root())
        .env("GIT_DIR", git_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| VcsError::ToolSpawn {
            command: command_line(args),
            source,
        })?;

    // Drain both pipes while the child runs. A child whose output exceeds
    // the OS pipe buffer blocks on write until someone reads, so the pipes
    // must be consumed concurrently with the wait loop.
    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let stdout = join_reader(stdout_reader);
                let stderr = join_reader(stderr_reader);
                return Ok(GitOutput {
                    code: status.code(),
                    stdout,
                    stderr,
                });
            }
            Ok(None) => {
                // Still running — enforce the deadline.
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    // The kill closed the pipes; the readers hit EOF.
                    let _ = join_reader(stdout_reader);
                    let _ = join_reader(stderr_reader);
                    return Err(VcsError::ToolTimeout {
                        command: command_line(args),
                        timeout,
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(source) => {
                return Err(VcsError::ToolSpawn {
                    command: command_line(args),
                    source,
                });
            }
        }
    }
}

fn spawn_reader(pipe: Option<impl Read + Send + 'static>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        pipe.map(|mut p| {
            let mut buf = Vec::new();
            let _ = p.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
        .unwrap_or_default()
    })
}

fn join_reader(reader: thread::JoinHandle<String>) -> String {
    reader.join().unwrap_or_default()
}
