pub mod files;
pub mod prize_list;
pub mod source;
pub mod submission_list;

pub use files::{normalize_input_path, read_prize_file, read_submission_file};
pub use prize_list::{PrizeListImport, parse_prize_lines};
pub use source::{
    FilePrizeSource, FileSubmissionSource, ManualPrizeSource, ManualSubmissionSource, PrizeSource,
    SubmissionSource, prompt_line,
};
pub use submission_list::{SubmissionImport, parse_submission_entry, parse_submission_lines};

use serde::{Deserialize, Serialize};

/// An input line that was ignored during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the source text.
    pub line_number: u64,
    pub content: String,
    pub reason: String,
}
