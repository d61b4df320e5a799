//! Command implementations

pub mod daily;
pub mod report;
pub mod save;

pub use daily::{DailyError, run_daily};
pub use report::{NotificationOutcome, ReportError, ReportOptions, ReportOutcome, report};
pub use save::{SaveError, save_solution};
