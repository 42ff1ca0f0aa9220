//! Service layer: query engine, aggregator and per-endpoint orchestration.
//!
//! `query` and `aggregate` are pure functions over record snapshots. The
//! endpoint modules take a snapshot from the store, run it through them and
//! shape the response.

pub mod aggregate;
pub mod clusters;
pub mod insights;
pub mod query;
pub mod recipes;

pub use clusters::get_clusters;
pub use insights::{build_insights, get_insights};
pub use query::{filter_records, paginate, query, Filterable, QueryResult};
pub use recipes::get_recipes;
