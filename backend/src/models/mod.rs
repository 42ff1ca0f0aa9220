//! Domain records and request filters.

pub mod filter;
pub mod nutrition;
pub mod recipe;

pub use filter::*;
pub use nutrition::*;
pub use recipe::*;
