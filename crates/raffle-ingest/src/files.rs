//! Reading prize and submission lists from text files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use raffle_model::{RaffleError, Result};

use crate::prize_list::{PrizeListImport, parse_prize_lines};
use crate::submission_list::{SubmissionImport, parse_submission_lines};

/// Cleans up a typed or drag-and-dropped path: trims whitespace, strips
/// surrounding double quotes, and expands a leading `~` to the home directory.
pub fn normalize_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches('"');
    let Some(rest) = trimmed.strip_prefix('~') else {
        return PathBuf::from(trimmed);
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) if rest.starts_with(['/', '\\']) => home.join(&rest[1..]),
        _ => PathBuf::from(trimmed),
    }
}

fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(RaffleError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Reads a prize list file.
///
/// # Errors
///
/// Returns [`RaffleError::FileNotFound`] if `path` is not a file, or an I/O
/// error if it cannot be read as UTF-8 text.
pub fn read_prize_file(path: &Path) -> Result<PrizeListImport> {
    let text = read_text(path)?;
    let import = parse_prize_lines(&text);
    info!(
        path = %path.display(),
        lines = text.lines().count(),
        prizes = import.names.len(),
        skipped = import.skipped.len(),
        "imported prizes"
    );
    Ok(import)
}

/// Reads a submission list file.
///
/// # Errors
///
/// Returns [`RaffleError::FileNotFound`] if `path` is not a file, or an I/O
/// error if it cannot be read as UTF-8 text.
pub fn read_submission_file(path: &Path) -> Result<SubmissionImport> {
    let text = read_text(path)?;
    let import = parse_submission_lines(&text);
    info!(
        path = %path.display(),
        lines = text.lines().count(),
        submissions = import.submissions.len(),
        skipped = import.skipped.len(),
        "imported submissions"
    );
    Ok(import)
}
