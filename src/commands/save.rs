//! Solution file persistence

use crate::core::ResolvedDate;
use crate::output::{print_creating_directory, solution_file_name};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to create solutions directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write solution file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write to output")]
    Output(#[from] io::Error),
}

/// Write `line` to `<dir>/Wordle_Solution_<ISO date>.txt`
///
/// Creates `dir` if it does not exist and replaces any existing file. The file
/// holds exactly `line`, with no trailing newline.
///
/// # Errors
/// Returns `SaveError` if the directory or file cannot be written.
pub fn save_solution<W: Write>(
    out: &mut W,
    dir: &Path,
    date: &ResolvedDate,
    line: &str,
) -> Result<PathBuf, SaveError> {
    if !dir.exists() {
        print_creating_directory(out, dir)?;
        fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(solution_file_name(date));
    fs::write(&path, line).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "solution saved");

    Ok(path)
}
