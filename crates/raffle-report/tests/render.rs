//! Tests for raffle result renderers.

use raffle_model::{
    Allocation, DistanceRecord, Prize, PrizeInsight, RankedEntry, Submission,
};
use raffle_report::{
    CsvRenderer, JsonRenderer, ResultRenderer, TableRenderer, result_rows, summary_line,
};

fn record(name: &str, guess: i64, distance: u64) -> DistanceRecord {
    DistanceRecord {
        submitter_name: name.to_string(),
        guess,
        distance,
    }
}

fn allocations() -> Vec<Allocation> {
    vec![
        Allocation {
            position: 1,
            prize: Prize::new("Mug", 10),
            winner: Some(Submission::new("Ada", 8)),
            distances: vec![record("Ada", 8, 2), record("Bob", 12, 2)],
            ties: vec!["Bob".to_string()],
        },
        Allocation {
            position: 2,
            prize: Prize::new("Hat", 90),
            winner: None,
            distances: vec![],
            ties: vec![],
        },
    ]
}

fn insights() -> Vec<PrizeInsight> {
    vec![
        PrizeInsight {
            position: 1,
            prize: Prize::new("Mug", 10),
            entries: vec![
                RankedEntry {
                    record: record("Ada", 8, 2),
                    tied: false,
                },
                RankedEntry {
                    record: record("Bob", 12, 2),
                    tied: true,
                },
            ],
        },
        PrizeInsight {
            position: 2,
            prize: Prize::new("Hat", 90),
            entries: vec![],
        },
    ]
}

#[test]
fn result_rows_snapshot() {
    insta::assert_json_snapshot!(result_rows(&allocations()), @r#"
    [
      {
        "position": 1,
        "prize": "Mug",
        "number": 10,
        "winner": "Ada",
        "guess": 8,
        "ties": "Bob"
      },
      {
        "position": 2,
        "prize": "Hat",
        "number": 90,
        "winner": null,
        "guess": null,
        "ties": ""
      }
    ]
    "#);
}

#[test]
fn table_marks_missing_winner_and_ties() {
    let output = TableRenderer::plain()
        .render_results(&allocations())
        .expect("render results");

    assert!(output.contains("Mug"));
    assert!(output.contains("Ada"));
    assert!(output.contains("⚠ Bob"));
    assert!(output.contains("No eligible winner"));
    assert!(!output.contains('\u{1b}'), "plain tables carry no ANSI codes");
}

#[test]
fn table_lists_prizes_in_order() {
    let prizes = vec![Prize::new("Mug", 10), Prize::new("Hat", 90)];
    let output = TableRenderer::plain()
        .render_prizes(&prizes)
        .expect("render prizes");

    let mug = output.find("Mug").expect("mug row");
    let hat = output.find("Hat").expect("hat row");
    assert!(mug < hat);
    assert!(output.contains("Number"));
}

#[test]
fn table_insights_flag_ties() {
    let output = TableRenderer::plain()
        .render_insights(&insights())
        .expect("render insights");

    assert!(output.contains("Prize: Mug (10)"));
    assert!(output.contains("Prize: Hat (90)"));
    assert!(output.contains("No eligible submissions"));
    let bob_line = output
        .lines()
        .find(|line| line.contains("Bob"))
        .expect("bob row");
    assert!(bob_line.contains('⚠'));
    let ada_line = output
        .lines()
        .find(|line| line.contains("Ada"))
        .expect("ada row");
    assert!(!ada_line.contains('⚠'));
}

#[test]
fn json_results_parse_back() {
    let output = JsonRenderer
        .render_results(&allocations())
        .expect("render json");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value[0]["winner"], "Ada");
    assert!(value[1]["winner"].is_null());
}

#[test]
fn csv_results_have_header_and_rows() {
    let output = CsvRenderer
        .render_results(&allocations())
        .expect("render csv");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "position,prize,number,winner,guess,ties");
    assert_eq!(lines[1], "1,Mug,10,Ada,8,Bob");
    assert_eq!(lines[2], "2,Hat,90,,,");
}

#[test]
fn csv_insights_flatten_rankings() {
    let output = CsvRenderer
        .render_insights(&insights())
        .expect("render csv");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[0],
        "position,prize,number,rank,submitter,guess,distance,tied"
    );
    assert_eq!(lines[2], "1,Mug,10,2,Bob,12,2,true");
    assert_eq!(lines.len(), 3);
}

#[test]
fn summary_counts_awarded_prizes() {
    assert_eq!(summary_line(&allocations()), "1 of 2 prizes awarded");
    assert_eq!(summary_line(&allocations()[..1]), "1 of 1 prize awarded");
}

#[test]
fn json_report_is_one_document() {
    let prizes = vec![Prize::new("Mug", 10), Prize::new("Hat", 90)];
    let output = JsonRenderer
        .render_report(&prizes, &allocations(), Some(insights().as_slice()))
        .expect("render report");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["prizes"][1]["assigned_number"], 90);
    assert_eq!(value["results"][0]["ties"], "Bob");
    assert_eq!(value["insights"][0]["entries"][1]["tied"], true);
    assert_eq!(value["insights"][0]["entries"][1]["submitter_name"], "Bob");

    let without = JsonRenderer
        .render_report(&prizes, &allocations(), None)
        .expect("render report");
    let value: serde_json::Value = serde_json::from_str(&without).expect("valid json");
    assert!(value.get("insights").is_none());
}

fn read_csv(output: &str) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let headers = reader.headers().expect("csv header").clone();
    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("uniform csv records");
    (headers, records)
}

#[test]
fn csv_report_is_one_table() {
    let prizes = vec![Prize::new("Mug", 10), Prize::new("Hat", 90)];
    let output = CsvRenderer
        .render_report(&prizes, &allocations(), None)
        .expect("render report");

    let (headers, records) = read_csv(&output);
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["position", "prize", "number", "winner", "guess", "ties"]
    );
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][3], "Ada");
    assert_eq!(&records[1][3], "");
}

#[test]
fn csv_report_widens_results_with_rankings() {
    let prizes = vec![Prize::new("Mug", 10), Prize::new("Hat", 90)];
    let output = CsvRenderer
        .render_report(&prizes, &allocations(), Some(insights().as_slice()))
        .expect("render report");

    let (headers, records) = read_csv(&output);
    assert_eq!(headers.len(), 11);
    assert_eq!(&headers[6], "rank");
    assert_eq!(&headers[8], "submitter_guess");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "1,Mug,10,Ada,8,Bob,1,Ada,8,2,false");
    assert_eq!(lines[2], "1,Mug,10,Ada,8,Bob,2,Bob,12,2,true");
    assert_eq!(lines[3], "2,Hat,90,,,,,,,,");
    assert_eq!(records.len(), 3);
}
