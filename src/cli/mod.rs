//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and allocation model.

pub mod config;
pub mod plan;

pub use config::{handle_config_command, ConfigArgs};
pub use plan::{handle_plan_command, handle_quick_command, QuickArgs};
