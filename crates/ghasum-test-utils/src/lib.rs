//! Shared test utilities for the ghasum workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: upstream action repositories served over `file://`
//! - [`repo`]: [`WorkflowRepo`](repo::WorkflowRepo) builder for repositories with workflows

pub mod git;
pub mod repo;
