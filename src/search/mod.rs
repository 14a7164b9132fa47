//! Search orchestration module
//!
//! Validates caller input, routes plain keywords to a single catalog fetch
//! and include/exclude expressions to the multi-page aggregator.

mod error;
mod exclusion;
mod executor;
mod models;
mod plain;

pub use error::SearchError;
pub use executor::Search;
pub use models::*;
