//! Version-control abstraction layer.
//!
//! This crate defines the vocabulary shared between the host framework and
//! its version-control backends. Backend plugins (such as
//! `versioncontrol-git`) depend on this crate and implement the traits in
//! [`backend`]; the host framework programs against the traits and never
//! sees a backend-specific type.
//!
//! # Crate layout
//!
//! - [`backend`] — the [`VcsBackend`] and [`VcsRepository`] traits.
//! - [`types`] — value types used in trait signatures ([`RevisionId`],
//!   [`Branch`], [`Capabilities`], etc.).
//! - [`error`] — the [`VcsError`] enum returned by all trait methods.

pub mod backend;
pub mod error;
pub mod types;

// Re-export the traits and commonly used types at the crate root for
// ergonomic imports: `use versioncontrol_core::{VcsRepository, Branch};`
pub use backend::{LabelIntersector, VcsBackend, VcsRepository};
pub use error::VcsError;
pub use types::{
    Branch, BranchAction, Capabilities, Item, LabelId, RepoId, RevisionFormat, RevisionId,
    RevisionIdError,
};
