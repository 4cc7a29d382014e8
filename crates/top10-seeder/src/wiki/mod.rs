//! Encyclopedia client
//!
//! Two read-only endpoints are used: the search API to turn a place query into
//! a canonical title, and the REST summary API for extract, thumbnail and
//! coordinates. Both go through the shared [`crate::fetcher::Fetcher`].

pub mod models;
pub mod search;
pub mod summary;

pub use models::PageSummary;
pub use search::TitleResolver;
pub use summary::SummaryExtractor;
