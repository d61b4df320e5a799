//! Terminal output formatting
//!
//! The solution line itself and the messages printed around it.

pub mod display;
pub mod formatters;

pub use display::{print_creating_directory, print_notification_guidance, print_saved};
pub use formatters::{long_date, notification_for, solution_file_name, solution_line};
