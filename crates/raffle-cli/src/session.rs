//! Interactive prompts for collecting raffle input.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use raffle_ingest::{
    FilePrizeSource, FileSubmissionSource, ManualPrizeSource, ManualSubmissionSource, PrizeSource,
    SkippedLine, SubmissionSource, normalize_input_path, prompt_line,
};
use raffle_model::Submission;

/// Where a list of prizes or submissions comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Manual,
    File,
}

/// Prompt/answer session over any reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompts and reads a trimmed answer (empty at end of input).
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer =
            prompt_line(&mut self.input, &mut self.output, prompt).context("read answer")?;
        Ok(answer.unwrap_or_default())
    }

    /// Asks a yes/no question; only `y` or `yes` count as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{question} (Y/N): "))?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Offers manual entry or file import.
    ///
    /// # Errors
    ///
    /// Fails on any answer other than `1` or `2`.
    pub fn choose_mode(&mut self, import_hint: &str) -> Result<InputMode> {
        self.say("[1] Manual input")?;
        self.say(format!("[2] Import from .txt file ({import_hint})"))?;
        match self.ask("\nEnter 1 or 2: ")?.as_str() {
            "1" => Ok(InputMode::Manual),
            "2" => Ok(InputMode::File),
            other => bail!("invalid choice '{other}'"),
        }
    }

    fn ask_path(&mut self, example: &str) -> Result<PathBuf> {
        self.say("\nTip: You can type the filename OR drag & drop the file into this window.")?;
        let answer = self.ask(&format!("Enter the filename (e.g., {example}): "))?;
        Ok(normalize_input_path(&answer))
    }

    fn report_skipped(&mut self, kind: &str, skipped: &[SkippedLine]) -> Result<()> {
        for line in skipped {
            self.say(format!(
                "Skipped {kind} line {}: '{}' ({})",
                line.line_number, line.content, line.reason
            ))?;
        }
        Ok(())
    }

    /// Collects prize names from `file`, or asks how to collect them.
    pub fn collect_prizes(&mut self, file: Option<&Path>) -> Result<Vec<String>> {
        let path = match file {
            Some(path) => path.to_path_buf(),
            None => match self.choose_mode("1 prize per line, max 100 chars")? {
                InputMode::Manual => {
                    let names =
                        ManualPrizeSource::new(&mut self.input, &mut self.output).prize_names()?;
                    return Ok(names);
                }
                InputMode::File => self.ask_path("prizes.txt")?,
            },
        };
        let mut source = FilePrizeSource::new(&path);
        let names = source
            .prize_names()
            .with_context(|| format!("import prizes from {}", path.display()))?;
        self.say(format!(
            "Imported {} prizes from {}",
            names.len(),
            path.display()
        ))?;
        self.report_skipped("prize", source.skipped())?;
        Ok(names)
    }

    /// Collects submissions from `file`, or asks how to collect them.
    pub fn collect_submissions(&mut self, file: Option<&Path>) -> Result<Vec<Submission>> {
        let path = match file {
            Some(path) => path.to_path_buf(),
            None => match self.choose_mode("format: name, number, 1 per line")? {
                InputMode::Manual => {
                    let submissions = ManualSubmissionSource::new(&mut self.input, &mut self.output)
                        .submissions()?;
                    return Ok(submissions);
                }
                InputMode::File => self.ask_path("entries.txt")?,
            },
        };
        let mut source = FileSubmissionSource::new(&path);
        let submissions = source
            .submissions()
            .with_context(|| format!("import submissions from {}", path.display()))?;
        self.say(format!(
            "Imported {} submissions from {}",
            submissions.len(),
            path.display()
        ))?;
        self.report_skipped("submission", source.skipped())?;
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<String>, Vec<u8>> {
        Session::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn confirm_accepts_y_only() {
        assert!(session("Y\n").confirm("Show?").unwrap());
        assert!(session("yes\n").confirm("Show?").unwrap());
        assert!(!session("n\n").confirm("Show?").unwrap());
        assert!(!session("").confirm("Show?").unwrap());
    }

    #[test]
    fn ask_writes_prompt_and_trims_answer() {
        let mut session = session("  Ada  \n");
        assert_eq!(session.ask("Name: ").unwrap(), "Ada");
        assert_eq!(session.ask("Again: ").unwrap(), "");
        assert_eq!(String::from_utf8(session.into_output()).unwrap(), "Name: Again: ");
    }

    #[test]
    fn invalid_mode_is_an_error() {
        assert!(session("3\n").choose_mode("hint").is_err());
        assert_eq!(
            session(" 2 \n").choose_mode("hint").unwrap(),
            InputMode::File
        );
    }

    #[test]
    fn manual_prizes_through_menu() {
        let mut session = session("1\nMug\nHat\ndone\n");
        let names = session.collect_prizes(None).unwrap();
        assert_eq!(names, vec!["Mug", "Hat"]);
    }
}
