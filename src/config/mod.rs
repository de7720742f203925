//! Configuration module for the paycheck planner
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Settings persistence (flow variant, fixed-expense policy)

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::{FixedPolicy, FlowVariant, Settings};
