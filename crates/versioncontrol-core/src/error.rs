//! Error types for version-control operations.
//!
//! [`VcsError`] is the single error type returned by all
//! [`VcsRepository`](crate::VcsRepository) trait methods. It uses rich enum
//! variants so callers can match on specific failure modes (bad repository
//! configuration, missing tool, non-zero exit, timeout) without parsing
//! error messages.
//!
//! Malformed lines in tool output are deliberately *not* represented here:
//! backends recover from them locally and surface only total failure to run
//! the tool.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors returned by [`VcsRepository`](crate::VcsRepository) operations.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The repository handle is misconfigured (empty or unusable root path).
    #[error("invalid repository configuration at `{}`: {reason}", path.display())]
    Configuration {
        /// The offending repository root.
        path: PathBuf,
        /// Why the configuration is unusable.
        reason: String,
    },

    /// The external tool could not be spawned (binary missing, permission
    /// denied, etc.).
    #[error("failed to spawn `{command}`: {source}")]
    ToolSpawn {
        /// The command line that failed to start.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited non-zero.
    ///
    /// Carries the captured output so callers can surface diagnostics
    /// without re-running the tool.
    #[error("`{command}` exited with status {code:?}: {stderr}")]
    ToolFailed {
        /// The command line that failed.
        command: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The external tool did not finish within the execution deadline and
    /// was killed. Guards against hangs on unresponsive filesystems such as
    /// network mounts.
    #[error("`{command}` timed out after {timeout:?}")]
    ToolTimeout {
        /// The command line that was killed.
        command: String,
        /// The deadline that expired.
        timeout: Duration,
    },
}
