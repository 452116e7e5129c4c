use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use raffle_ingest::{
    FilePrizeSource, FileSubmissionSource, ManualPrizeSource, ManualSubmissionSource, PrizeSource,
    SubmissionSource, normalize_input_path, read_prize_file, read_submission_file,
};
use raffle_model::{RaffleError, Submission};

fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_prize_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let long = "y".repeat(120);
    let path = write_temp(&dir, "prizes.txt", &format!("Mug\n\n{long}\nGift card\n"));

    let import = read_prize_file(&path).expect("read prizes");

    assert_eq!(import.names, vec!["Mug", "Gift card"]);
    assert_eq!(import.skipped.len(), 1);
    assert_eq!(import.skipped[0].line_number, 3);
}

#[test]
fn reads_submission_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_temp(&dir, "entries.txt", "Ada, 12\nBob 40\n\nCy,7\n");

    let import = read_submission_file(&path).expect("read entries");

    assert_eq!(
        import.submissions,
        vec![Submission::new("Ada", 12), Submission::new("Cy", 7)]
    );
    assert_eq!(import.skipped.len(), 1);
    assert_eq!(import.skipped[0].line_number, 2);
    assert_eq!(import.skipped[0].content, "Bob 40");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.txt");
    assert!(matches!(
        read_prize_file(&path),
        Err(RaffleError::FileNotFound(_))
    ));
    // A directory is not a file either.
    assert!(matches!(
        read_submission_file(dir.path()),
        Err(RaffleError::FileNotFound(_))
    ));
}

#[test]
fn file_sources_keep_skipped_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prizes = write_temp(&dir, "prizes.txt", &format!("Mug\n{}\n", "z".repeat(101)));
    let entries = write_temp(&dir, "entries.txt", "Ada, 1\nbroken\n");

    let mut prize_source = FilePrizeSource::new(&prizes);
    assert_eq!(prize_source.prize_names().unwrap(), vec!["Mug"]);
    assert_eq!(prize_source.skipped().len(), 1);

    let mut submission_source = FileSubmissionSource::new(&entries);
    assert_eq!(submission_source.submissions().unwrap().len(), 1);
    assert_eq!(submission_source.skipped().len(), 1);
}

#[test]
fn normalizes_dropped_paths() {
    assert_eq!(
        normalize_input_path("  \"/tmp/prizes.txt\"  "),
        PathBuf::from("/tmp/prizes.txt")
    );
    assert_eq!(normalize_input_path("entries.txt"), PathBuf::from("entries.txt"));
    assert_eq!(normalize_input_path("~user/prizes.txt"), PathBuf::from("~user/prizes.txt"));
    if let Some(home) = dirs::home_dir() {
        assert_eq!(normalize_input_path("\"~/prizes.txt\""), home.join("prizes.txt"));
        assert_eq!(normalize_input_path("~"), home);
    }
}

#[test]
fn manual_prizes_until_done() {
    let long = "p".repeat(101);
    let input = format!("Mug\n\n{long}\nHat\nDONE\nIgnored\n");
    let mut output = Vec::new();

    let names = ManualPrizeSource::new(Cursor::new(input), &mut output)
        .prize_names()
        .expect("manual prizes");

    assert_eq!(names, vec!["Mug", "Hat"]);
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Prize 1: "));
    assert!(transcript.contains("Prize cannot be empty"));
    assert!(transcript.contains("too long"));
    assert!(transcript.contains("Prize 3: "));
}

#[test]
fn manual_submissions_until_end_of_input() {
    let input = "Ada, 10\nnonsense\nBob, 20\n";
    let mut output = Vec::new();

    let submissions = ManualSubmissionSource::new(Cursor::new(input), &mut output)
        .submissions()
        .expect("manual submissions");

    assert_eq!(
        submissions,
        vec![Submission::new("Ada", 10), Submission::new("Bob", 20)]
    );
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Invalid format! Please use: name, number"));
    assert!(transcript.contains("Submission 2: "));
}
