//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::DietTypeFilter;
pub use crate::models::FilterSpec;
pub use crate::models::NutrientField;
pub use crate::models::NutritionProfile;
pub use crate::models::Recipe;
pub use crate::models::RecipeId;
pub use crate::routes::clusters::Cluster;
pub use crate::routes::clusters::ClusterList;
pub use crate::routes::insights::BarData;
pub use crate::routes::insights::BarDataset;
pub use crate::routes::insights::ChartBundle;
pub use crate::routes::insights::Heatmap;
pub use crate::routes::insights::InsightsResponse;
pub use crate::routes::insights::PieData;
pub use crate::routes::insights::PieDataset;
pub use crate::routes::insights::ScatterData;
pub use crate::routes::insights::ScatterDataset;
pub use crate::routes::insights::ScatterPoint;
pub use crate::routes::insights::SummaryStats;
pub use crate::routes::meta::ResponseMeta;
pub use crate::routes::recipes::RecipeListResponse;
