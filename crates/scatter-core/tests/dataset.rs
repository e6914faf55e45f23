// File: crates/scatter-core/tests/dataset.rs
// Purpose: Decoding of the published JSON/CSV layouts and the log-and-skip policy for bad records.

use scatter_core::{ChartError, Dataset};

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn loads_json_fixture() {
    let ds = Dataset::load(fixture("cyclists.json")).expect("load json");
    assert_eq!(ds.len(), 7);
    assert!(ds.skipped.is_empty());

    let first = &ds.records[0];
    assert_eq!(first.name, "Marco Pantani");
    assert_eq!(first.raw_time, "36:50");
    assert_eq!((first.time.minute(), first.time.second()), (36, 50));
    assert_eq!(first.place, 1);
    assert_eq!(first.seconds, 2210);
    assert!(first.has_allegation());
}

#[test]
fn clock_components_match_input_for_every_record() {
    let ds = Dataset::load(fixture("cyclists.json")).expect("load json");
    for r in &ds.records {
        let (m, s) = r.raw_time.split_once(':').expect("MM:SS");
        assert_eq!(r.time.minute(), m.parse::<u32>().unwrap(), "{}", r.raw_time);
        assert_eq!(r.time.second(), s.parse::<u32>().unwrap(), "{}", r.raw_time);
    }
}

#[test]
fn malformed_records_are_skipped_with_their_index() {
    let payload = r#"[
        {"Time": "36:50", "Place": 1, "Seconds": 2210, "Name": "A", "Year": 1995,
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Time": "3650", "Place": 2, "Seconds": 2210, "Name": "B", "Year": 1996,
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Time": "37:00", "Place": 3, "Seconds": 2220, "Year": 1997,
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Time": "37:10", "Place": 4, "Seconds": 2230, "Name": "D", "Year": "later",
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Time": "37:20", "Place": 5, "Seconds": 2240, "Name": "E", "Year": 1999,
         "Nationality": "FRA", "Doping": "Admitted", "URL": ""}
    ]"#;
    let ds = Dataset::from_json_str(payload).expect("array decodes");
    assert_eq!(ds.records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["A", "E"]);
    assert_eq!(ds.skipped.iter().map(|s| s.index).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(ds.skipped[0].reason.contains("MM:SS"), "{}", ds.skipped[0].reason);
    assert!(ds.skipped[1].reason.contains("Name"), "{}", ds.skipped[1].reason);
}

#[test]
fn non_array_payload_is_a_decode_error() {
    let err = Dataset::from_json_str(r#"{"Time": "36:50"}"#).unwrap_err();
    assert!(matches!(err, ChartError::Decode(_)));
}

#[test]
fn empty_dataset_is_rejected() {
    let ds = Dataset::from_json_str("[]").expect("empty array decodes");
    assert!(ds.is_empty());
    assert!(matches!(ds.require_records(), Err(ChartError::EmptyDataset)));
}

#[test]
fn all_malformed_dataset_is_rejected() {
    let payload = r#"[
        {"Time": "36-50", "Place": 1, "Seconds": 2210, "Name": "A", "Year": 1995,
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Time": "37:75", "Place": 2, "Seconds": 2295, "Name": "B", "Year": 1996,
         "Nationality": "ITA", "Doping": "", "URL": ""},
        {"Place": 3, "Name": "C"}
    ]"#;
    let ds = Dataset::from_json_str(payload).expect("array decodes");
    assert!(ds.is_empty());
    assert_eq!(ds.skipped.len(), 3);
    assert!(ds.skipped[1].reason.contains("seconds out of range"), "{}", ds.skipped[1].reason);
    assert!(matches!(ds.require_records(), Err(ChartError::EmptyDataset)));
}

#[test]
fn loads_csv_fixture_and_skips_bad_rows() {
    let ds = Dataset::load(fixture("cyclists.csv")).expect("load csv");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records[1].name, "Carlos Sastre");
    assert!(!ds.records[1].has_allegation());
    assert_eq!(ds.skipped.len(), 1);
    assert_eq!(ds.skipped[0].index, 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Dataset::load(fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}
