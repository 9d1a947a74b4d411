//! Checksum reconciliation for GitHub Actions dependencies
//!
//! Ties the lower crates together into the three ledger operations:
//!
//! - [`initialize`]: create `.github/workflows/gha.sum` from scratch
//! - [`update`]: recompute every checksum and rewrite the ledger in place
//! - [`verify`]: recompute checksums and report [`Problem`]s against the ledger
//!
//! ```text
//!                       ghasum-cli
//!                           |
//!                      ghasum-core
//!                           |
//!     +-----------+---------+--------+-----------+
//!     |           |         |        |           |
//! ghasum-fs ghasum-sumfile ghasum-gha ghasum-git ghasum-cache
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod operations;
pub mod problem;

pub use config::Config;
pub use error::{Error, Result};
pub use operations::{initialize, update, verify};
pub use problem::{Problem, compare};
