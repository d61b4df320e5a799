//! Wordle Daily
//!
//! Fetches the daily Wordle solution, prints it, optionally pushes it to an ntfy
//! topic and optionally saves it to a text file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::api::{PuzzleSource, SolutionFetcher, build_client};
//! use wordle_daily::config::Config;
//! use wordle_daily::core::resolve;
//! use wordle_daily::output::solution_line;
//!
//! let config = Config::default();
//! let fetcher = SolutionFetcher::new(config.api_base.clone(), build_client(config.timeout).unwrap());
//!
//! let date = resolve(Some("15-06-2024")).unwrap();
//! let record = fetcher.fetch(&date).unwrap();
//! println!("{}", solution_line(&date, &record));
//! ```

// Core domain types
pub mod core;

// Runtime configuration
pub mod config;

// Puzzle service and notification endpoint
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
