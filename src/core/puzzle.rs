//! Puzzle data returned by the Wordle service
//!
//! A response looks like:
//!
//! ```json
//! {
//!     "id": 1691,
//!     "solution": "proud",
//!     "print_date": "2024-06-15",
//!     "days_since_launch": 1092,
//!     "editor": "Tracy Bennett"
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error type for response bodies that do not carry a usable puzzle
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("Wordle API response is missing the '{0}' field")]
    MissingField(&'static str),
    #[error("Wordle API response is not valid puzzle JSON")]
    Malformed(#[source] serde_json::Error),
}

/// Wire shape; every field may be absent so that missing data is reported by name
#[derive(Deserialize)]
struct RawPuzzle {
    id: Option<i64>,
    solution: Option<String>,
    print_date: Option<String>,
    days_since_launch: Option<i64>,
    editor: Option<String>,
}

/// The decoded puzzle for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRecord {
    pub id: Option<i64>,
    pub solution: String,
    pub print_date: Option<String>,
    pub days_since_launch: Option<i64>,
    pub editor: Option<String>,
}

impl PuzzleRecord {
    /// Decode a response body
    ///
    /// # Errors
    /// Returns `DataFormatError::Malformed` if the body is not a JSON object of the
    /// expected field types, and `DataFormatError::MissingField` if `solution` is
    /// absent or empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::PuzzleRecord;
    ///
    /// let record = PuzzleRecord::from_json(r#"{"solution":"proud"}"#).unwrap();
    /// assert_eq!(record.solution, "proud");
    ///
    /// assert!(PuzzleRecord::from_json(r#"{"id":1}"#).is_err());
    /// ```
    pub fn from_json(body: &str) -> Result<Self, DataFormatError> {
        let raw: RawPuzzle = serde_json::from_str(body).map_err(DataFormatError::Malformed)?;

        let solution = raw
            .solution
            .filter(|solution| !solution.is_empty())
            .ok_or(DataFormatError::MissingField("solution"))?;

        Ok(Self {
            id: raw.id,
            solution,
            print_date: raw.print_date,
            days_since_launch: raw.days_since_launch,
            editor: raw.editor,
        })
    }
}
