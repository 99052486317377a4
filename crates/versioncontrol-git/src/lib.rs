//! Git backend for the versioncontrol abstraction layer.
//!
//! This crate teaches the host framework how to talk to Git repositories by
//! shelling out to the installed `git` binary and parsing its textual
//! output. It is deliberately *not* a Git protocol client: no wire protocol,
//! no object format, no repository storage — just process invocation and
//! output scraping behind the [`VcsRepository`](versioncontrol_core::VcsRepository)
//! trait.
//!
//! # Crate layout
//!
//! - [`repo`] — the [`GitRepo`] handle implementing the core traits.
//! - [`backend`] — the [`GitBackend`] registration value.
//! - [`labels`] — label selection between two items.
//! - `exec` — subprocess invocation with a bounded deadline.
//! - `branches` — `show-ref --heads` output parsing.

pub mod backend;
mod branches;
mod exec;
pub mod labels;
pub mod repo;

pub use backend::GitBackend;
pub use repo::GitRepo;
