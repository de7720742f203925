//! Display formatting for terminal output
//!
//! Currency formatting, the summary table and the guidance messages the
//! wizard prints between steps.

pub mod currency;
pub mod messages;
pub mod summary;

pub use currency::{CurrencyFormatter, LocaleFormatter, PlainFormatter};
pub use messages::{housing_message, wants_guideline_message, SavingsOutlook};
pub use summary::format_summary_table;
