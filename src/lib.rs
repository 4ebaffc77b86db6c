//! expense-trend - expense trends and budget depletion
//!
//! This library turns a set of expense records plus an optional budget
//! figure into two time series: spend over time and remaining budget over
//! time. Series are either granular (one point per expense) or aggregated
//! into calendar buckets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, budget)
//! - `trends`: The pure aggregation and depletion engine
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML output
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_trend::trends::{compute_series, FilterContext, Granularity, ViewMode};
//! use expense_trend::models::BudgetContext;
//!
//! let output = compute_series(
//!     &records,
//!     &FilterContext::default(),
//!     ViewMode::Auto,
//!     Granularity::Month,
//!     &BudgetContext::from_input("2500"),
//!     now,
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod trends;

pub use error::{TrendError, TrendResult};
