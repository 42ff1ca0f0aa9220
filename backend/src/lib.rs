//! # Nutritional Insights backend
//!
//! Filtered, paginated views and chart-ready aggregates over a small
//! nutrition/recipe dataset, served as a REST API for the dashboard frontend.
//!
//! ## Architecture
//!
//! - [`models`]: Records (`NutritionProfile`, `Recipe`) and the per-request `FilterSpec`
//! - [`routes`]: Serializable response shapes and endpoint paths
//! - [`api`]: Flat re-export of the public DTO surface
//! - [`services`]: Query engine, aggregator and endpoint orchestration
//! - [`db`]: Record store traits, in-memory and Postgres backends, seeding
//! - [`config`]: Server bind configuration
//! - `http`: Axum router and handlers (feature `http-server`)

// RepositoryError carries structured context
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
