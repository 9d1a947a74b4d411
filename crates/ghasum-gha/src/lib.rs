//! Workflow discovery and action resolution
//!
//! Maps GitHub Actions workflow files to the set of unique actions
//! (`owner/project@ref`) they depend on.

pub mod action;
pub mod error;
pub mod resolve;
pub mod workflow;

pub use action::{Action, parse_uses};
pub use error::{Error, Result};
pub use resolve::{job_actions, repo_actions, workflow_actions};
pub use workflow::{Job, Step, Workflow};
