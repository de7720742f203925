//! Core data models for the paycheck planner
//!
//! This module contains the data structures of the allocation domain:
//! money amounts, categories, the budget record and the plan summary.

pub mod amount;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod summary;

pub use amount::RawAmount;
pub use budget::Budget;
pub use category::{Category, CategoryKind, CategorySet, UnknownCategory};
pub use ids::SessionId;
pub use money::Money;
pub use summary::{LineKind, Summary, SummaryLine};
