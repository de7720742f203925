//! Business logic layer
//!
//! The allocation model lives here; the wizard and CLI drive it and never
//! touch the budget record directly.

pub mod allocation;

pub use allocation::AllocationService;
