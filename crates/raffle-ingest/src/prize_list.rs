//! Prize lists: one prize name per line.

use tracing::warn;

use raffle_model::Prize;

use crate::SkippedLine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeListImport {
    pub names: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses prize names, trimming each line and ignoring blank ones.
///
/// Names longer than [`raffle_model::MAX_PRIZE_NAME_CHARS`] are skipped and
/// reported in [`PrizeListImport::skipped`].
pub fn parse_prize_lines(text: &str) -> PrizeListImport {
    let mut import = PrizeListImport::default();
    for (index, line) in text.lines().enumerate() {
        let name = line.trim().trim_matches('\u{feff}');
        if name.is_empty() {
            continue;
        }
        let line_number = index as u64 + 1;
        match Prize::validate_name(name) {
            Ok(()) => import.names.push(name.to_string()),
            Err(error) => {
                warn!(line_number, %error, "skipped prize line");
                import.skipped.push(SkippedLine {
                    line_number,
                    content: name.to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }
    import
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_names_in_order() {
        let import = parse_prize_lines("Mug\n\n  Hat  \r\nPoster\n");
        assert_eq!(import.names, vec!["Mug", "Hat", "Poster"]);
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn skips_overlong_names_with_line_number() {
        let long = "x".repeat(101);
        let import = parse_prize_lines(&format!("Mug\n{long}\nHat"));
        assert_eq!(import.names, vec!["Mug", "Hat"]);
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].line_number, 2);
    }

    #[test]
    fn keeps_duplicate_names() {
        let import = parse_prize_lines("Mug\nMug\n");
        assert_eq!(import.names, vec!["Mug", "Mug"]);
    }
}
