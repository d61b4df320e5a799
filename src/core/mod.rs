//! Core domain types
//!
//! The date a puzzle is requested for and the puzzle record itself. Nothing here
//! touches the network or the filesystem.

pub mod date;
mod puzzle;

pub use date::{DateError, ResolvedDate, resolve};
pub use puzzle::{DataFormatError, PuzzleRecord};
