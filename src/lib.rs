//! Paycheck Planner - step-by-step paycheck allocation
//!
//! This library walks one paycheck through fixed expenses, discretionary
//! wants and savings or debt goals, validating every allocation against the
//! income, and renders a summary of the result.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and config-path management
//! - `error`: Validation and application error types
//! - `models`: Money, categories, the budget record and the summary
//! - `services`: The allocation model
//! - `wizard`: Step ordering and the interactive prompt flow
//! - `display`: Currency formatting and terminal output
//! - `export`: Summary export (JSON, YAML, CSV)
//! - `cli`: Command handlers for the `paycheck` binary
//!
//! # Example
//!
//! ```rust
//! use paycheck_planner::config::Settings;
//! use paycheck_planner::models::{Category, Money};
//! use paycheck_planner::services::AllocationService;
//!
//! let mut plan = AllocationService::new(&Settings::default());
//! plan.set_income("1000").unwrap();
//! plan.allocate_fixed(Category::Housing, Money::zero());
//! plan.allocate_expense(Category::Food, "50").unwrap();
//! assert_eq!(plan.remaining(), Money::from_dollars(575));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod wizard;

pub use error::{PlannerError, PlannerResult, ValidationError};
