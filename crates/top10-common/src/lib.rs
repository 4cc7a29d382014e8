//! USA Top 10 Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the USA Top 10 workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used by the seeder and the server:
//!
//! - **Types**: The destination record and its region classification
//! - **Logging**: Centralised `tracing` subscriber setup
//! - **Checksums**: Digests for the emitted seed script
//! - **Error Handling**: Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use top10_common::types::Region;
//!
//! assert_eq!(Region::from_state("Florida"), Region::Southeast);
//! assert_eq!(Region::from_state("Texas"), Region::Usa);
//! ```

pub mod checksum;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, Top10Error};
pub use types::{DestinationRecord, Region};
