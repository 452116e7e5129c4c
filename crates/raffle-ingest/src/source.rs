//! Prize and submission sources.
//!
//! A raffle takes its prizes and submissions either from files or from
//! line-by-line manual entry. Both are modelled behind [`PrizeSource`] and
//! [`SubmissionSource`] so the draw does not care where the data came from.
//! Manual sources are generic over their reader and writer so they can be
//! driven from in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use raffle_model::{Prize, RaffleError, Result, Submission};

use crate::SkippedLine;
use crate::files::{read_prize_file, read_submission_file};
use crate::submission_list::parse_submission_entry;

/// Keyword that ends manual entry (case-insensitive).
pub const DONE_KEYWORD: &str = "done";

pub trait PrizeSource {
    /// Collects prize names in entry order.
    fn prize_names(&mut self) -> Result<Vec<String>>;
}

pub trait SubmissionSource {
    /// Collects submissions in entry order.
    fn submissions(&mut self) -> Result<Vec<Submission>>;
}

#[derive(Debug, Clone)]
pub struct FilePrizeSource {
    path: PathBuf,
    skipped: Vec<SkippedLine>,
}

impl FilePrizeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skipped: Vec::new(),
        }
    }

    /// Lines skipped by the most recent read.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

impl PrizeSource for FilePrizeSource {
    fn prize_names(&mut self) -> Result<Vec<String>> {
        let import = read_prize_file(&self.path)?;
        self.skipped = import.skipped;
        Ok(import.names)
    }
}

#[derive(Debug, Clone)]
pub struct FileSubmissionSource {
    path: PathBuf,
    skipped: Vec<SkippedLine>,
}

impl FileSubmissionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skipped: Vec::new(),
        }
    }

    /// Lines skipped by the most recent read.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

impl SubmissionSource for FileSubmissionSource {
    fn submissions(&mut self) -> Result<Vec<Submission>> {
        let import = read_submission_file(&self.path)?;
        self.skipped = import.skipped;
        Ok(import.submissions)
    }
}

/// Writes `prompt`, then reads one trimmed line, or `None` at end of input.
///
/// # Errors
///
/// Returns an I/O error if writing the prompt or reading the line fails.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_done(entry: &str) -> bool {
    entry.eq_ignore_ascii_case(DONE_KEYWORD)
}

/// Prompts for one prize per line until `done` or end of input.
pub struct ManualPrizeSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ManualPrizeSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PrizeSource for ManualPrizeSource<R, W> {
    fn prize_names(&mut self) -> Result<Vec<String>> {
        writeln!(
            self.output,
            "Enter each prize on a separate line. Type '{DONE_KEYWORD}' when finished."
        )?;
        let mut names = Vec::new();
        loop {
            let prompt = format!("Prize {}: ", names.len() + 1);
            let Some(entry) = prompt_line(&mut self.input, &mut self.output, &prompt)? else {
                break;
            };
            if is_done(&entry) {
                break;
            }
            match Prize::validate_name(&entry) {
                Ok(()) => names.push(entry),
                Err(RaffleError::EmptyPrizeName) => {
                    writeln!(self.output, "Prize cannot be empty, try again.")?;
                }
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
        Ok(names)
    }
}

/// Prompts for `name, number` entries until `done` or end of input.
pub struct ManualSubmissionSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ManualSubmissionSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> SubmissionSource for ManualSubmissionSource<R, W> {
    fn submissions(&mut self) -> Result<Vec<Submission>> {
        writeln!(
            self.output,
            "Enter submissions in the format: name, number (type '{DONE_KEYWORD}' to finish)"
        )?;
        let mut submissions = Vec::new();
        loop {
            let prompt = format!("Submission {}: ", submissions.len() + 1);
            let Some(entry) = prompt_line(&mut self.input, &mut self.output, &prompt)? else {
                break;
            };
            if is_done(&entry) {
                break;
            }
            match parse_submission_entry(&entry) {
                Ok(submission) => submissions.push(submission),
                Err(_) => writeln!(self.output, "Invalid format! Please use: name, number")?,
            }
        }
        Ok(submissions)
    }
}
