//! End-to-end tests for the normalization pipeline.

use std::io::Cursor;

use csvnorm_core::{RunStats, normalize_stream};
use csvnorm_model::NormalizeOptions;
use csvnorm_transform::RuleSet;

fn run(input: &[u8]) -> (String, RunStats) {
    let mut output = Vec::new();
    let stats = normalize_stream(
        Cursor::new(input),
        &mut output,
        &RuleSet::default(),
        &NormalizeOptions::default(),
    )
    .expect("pipeline run");
    (String::from_utf8(output).expect("utf-8 output"), stats)
}

#[test]
fn normalizes_a_simple_file() {
    let (output, stats) = run(b"Column1, FullName, ZIP\nTest, name1, 1\n");
    assert_eq!(output, "Column1,FullName,ZIP\nTest,NAME1,00001\n");
    assert_eq!(
        stats,
        RunStats {
            rows_read: 1,
            rows_emitted: 1,
            rows_dropped: 0,
        }
    );
}

#[test]
fn full_recognized_column_set() {
    let input = b"Timestamp,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes\n\
        10/2/04 8:44:11 AM,94121,Monkey Alberto,1:23:45.678,1:23:32.123,zzz,I am the Walrus\n";
    let (output, _) = run(input);
    let mut lines = output.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Timestamp,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes"
    );
    assert_eq!(
        lines.next().unwrap(),
        "2004-10-02T10:44:11.000-05:00,94121,MONKEY ALBERTO,5025.678,5012.123,10037.801,I am the Walrus"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn invalid_rows_are_dropped_and_order_is_preserved() {
    let input = b"FullName,FooDuration\n\
        first,0:01:00\n\
        broken,0a:25:36.159\n\
        second,0:00:02\n\
        also broken,1:23\n\
        third,0:00:03\n";
    let (output, stats) = run(input);
    assert_eq!(
        output,
        "FullName,FooDuration\nFIRST,60\nSECOND,2\nTHIRD,3\n"
    );
    assert_eq!(
        stats,
        RunStats {
            rows_read: 5,
            rows_emitted: 3,
            rows_dropped: 2,
        }
    );
}

#[test]
fn invalid_timestamp_drops_the_whole_row() {
    let input = b"Timestamp,FullName\n\
        10/2/04 8:44:11,ignored\n\
        10/2/04 8:44:11 AM,kept\n";
    let (output, stats) = run(input);
    assert_eq!(
        output,
        "Timestamp,FullName\n2004-10-02T10:44:11.000-05:00,KEPT\n"
    );
    assert_eq!(stats.rows_dropped, 1);
}

#[test]
fn unrecognized_columns_pass_through_including_replacement_chars() {
    let input = b"Notes,ZIP\nsuper\xc3\xa9,12\n\xff\xfe,3\n";
    let (output, _) = run(input);
    assert_eq!(
        output,
        "Notes,ZIP\nsuper\u{e9},00012\n\u{fffd}\u{fffd},00003\n"
    );
}

#[test]
fn duplicate_headers_keep_first_occurrence() {
    let (output, _) = run(b"A,a,B\n1,2,3\n");
    assert_eq!(output, "A,B\n1,3\n");
}

#[test]
fn short_records_treat_missing_fields_as_empty() {
    let (output, _) = run(b"FullName,ZIP\nonly name\n");
    assert_eq!(output, "FullName,ZIP\nONLY NAME,00000\n");
}

#[test]
fn quoted_fields_survive_the_round_trip() {
    let (output, _) = run(b"Address\n\"123 Main St, Apt 2\"\n");
    assert_eq!(output, "Address\n\"123 Main St, Apt 2\"\n");
}

#[test]
fn empty_input_produces_empty_output() {
    let (output, stats) = run(b"");
    assert_eq!(output, "");
    assert_eq!(stats, RunStats::default());
}

#[test]
fn header_only_input_emits_just_the_header() {
    let (output, stats) = run(b"FullName,ZIP\n");
    assert_eq!(output, "FullName,ZIP\n");
    assert_eq!(stats.rows_read, 0);
}

#[test]
fn reads_from_a_file_handle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("input.csv");
    std::fs::write(&path, "ZIP\n7\n").expect("write input");

    let mut output = Vec::new();
    let stats = normalize_stream(
        std::fs::File::open(&path).expect("open input"),
        &mut output,
        &RuleSet::default(),
        &NormalizeOptions::default(),
    )
    .expect("pipeline run");
    assert_eq!(String::from_utf8(output).unwrap(), "ZIP\n00007\n");
    assert_eq!(stats.rows_emitted, 1);
}
