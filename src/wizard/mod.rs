//! Paycheck planning wizard
//!
//! The session state machine that orders the allocation steps, and an
//! interactive prompt runner on top of it.

pub mod runner;
pub mod session;

pub use runner::{WizardRunner, RESTART_KEYWORD};
pub use session::{PlanningSession, WizardStep};
