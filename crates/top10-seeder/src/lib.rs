//! USA Top 10 Seeder Library
//!
//! Builds the destinations table for the USA Top 10 site from the public
//! encyclopedia: each catalog place is resolved to a page, summarised,
//! given a hero image, and written out as a SQL seed script that is applied
//! to the local SQLite store.
//!
//! # Stages
//!
//! - **Title resolution** ([`wiki::TitleResolver`]): strict, a failure aborts the run
//! - **Summary extraction** ([`wiki::SummaryExtractor`]): best-effort
//! - **Image download** ([`images::ImageMaterializer`]): best-effort
//! - **Record building** ([`record::RecordBuilder`])
//! - **Seed emission** ([`seed::SeedEmitter`]): one transaction, script committed after the store
//!
//! # Example
//!
//! ```no_run
//! use top10_seeder::{Pipeline, SeederConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SeederConfig::from_env();
//!     let outcome = Pipeline::connect(&config).await?.run().await?;
//!     println!("seeded {} destinations ({})", outcome.records, outcome.digest);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod images;
pub mod pipeline;
pub mod record;
pub mod seed;
pub mod stage;
pub mod store;
pub mod wiki;

pub use catalog::{Catalog, DefaultsTable, EditorialDefaults};
pub use config::SeederConfig;
pub use error::{Result, SeedError};
pub use fetcher::{FetchError, Fetcher};
pub use pipeline::Pipeline;
pub use seed::{render_script, SeedEmitter, SeedOutcome};
pub use stage::{Stage, StageOutcome};
