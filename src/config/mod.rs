//! Configuration module for expense-trend
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrendPaths;
pub use settings::Settings;
