//! Submission lists: `name, number` per line.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use raffle_model::{RaffleError, Result, Submission};

use crate::SkippedLine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionImport {
    pub submissions: Vec<Submission>,
    pub skipped: Vec<SkippedLine>,
}

/// Splits one line into trimmed comma-separated fields. Quotes are literal
/// text, so a quoted name still cannot contain a comma.
fn read_fields(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    reader.records().next()?.ok()
}

/// Parses one `name, number` entry.
///
/// # Errors
///
/// Returns [`RaffleError::InvalidSubmission`] unless the line holds exactly
/// two comma-separated fields, a non-empty name and an integer.
pub fn parse_submission_entry(line: &str) -> Result<Submission> {
    let invalid = || RaffleError::InvalidSubmission {
        line: line.trim().to_string(),
    };
    let record = read_fields(line).ok_or_else(invalid)?;
    if record.len() != 2 {
        return Err(invalid());
    }
    let (name, number) = (&record[0], &record[1]);
    let name = name.trim_matches('\u{feff}');
    if name.is_empty() {
        return Err(invalid());
    }
    let guess = number.parse::<i64>().map_err(|_| invalid())?;
    Ok(Submission::new(name, guess))
}

/// Parses a submission list, skipping blank lines and reporting malformed ones.
///
/// Fields are split on commas without quote handling, so a name cannot itself
/// contain a comma.
pub fn parse_submission_lines(text: &str) -> SubmissionImport {
    let mut import = SubmissionImport::default();
    for (index, line) in text.lines().enumerate() {
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        let line_number = index as u64 + 1;
        match parse_submission_entry(content) {
            Ok(submission) => import.submissions.push(submission),
            Err(error) => {
                warn!(line_number, line = %content, "skipped invalid submission line");
                import.skipped.push(SkippedLine {
                    line_number,
                    content: content.to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }
    debug!(
        submissions = import.submissions.len(),
        skipped = import.skipped.len(),
        "parsed submission list"
    );
    import
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_entry() {
        assert_eq!(
            parse_submission_entry("  Ada ,  42 ").unwrap(),
            Submission::new("Ada", 42)
        );
        assert_eq!(
            parse_submission_entry("Bob,-3").unwrap(),
            Submission::new("Bob", -3)
        );
    }

    #[test]
    fn quotes_are_part_of_the_name() {
        assert_eq!(
            parse_submission_entry("\"Ada\", 7").unwrap(),
            Submission::new("\"Ada\"", 7)
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        for line in ["Ada", "Ada, 4, 5", "Ada, four", ", 4", "", "\"Ada, Jr\", 4"] {
            assert!(
                matches!(
                    parse_submission_entry(line),
                    Err(RaffleError::InvalidSubmission { .. })
                ),
                "expected rejection for {line:?}"
            );
        }
    }

    #[test]
    fn reports_skipped_lines_with_numbers() {
        let text = "Ada, 10\nnot a line\n\nBob, 20\nCy, x\n";
        let import = parse_submission_lines(text);
        assert_eq!(
            import.submissions,
            vec![Submission::new("Ada", 10), Submission::new("Bob", 20)]
        );
        let lines: Vec<u64> = import.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![2, 5]);
    }
}
