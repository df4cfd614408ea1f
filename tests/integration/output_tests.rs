//! Integration tests for CSV file output

mod common;

use std::fs;

use common::sample_record;
use research_paper_fetcher::output::{CSV_HEADERS, save_to_csv};
use research_paper_fetcher::{ErrorKind, NOT_AVAILABLE, PaperRecord};
use tempfile::tempdir;

#[test]
fn test_save_to_csv_round_trips_through_reader() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("papers.csv");

    let mut no_company = sample_record();
    no_company.pubmed_id = "38222222".to_string();
    no_company.non_academic_authors = vec![NOT_AVAILABLE.to_string()];
    no_company.company_affiliations = vec![NOT_AVAILABLE.to_string()];
    no_company.corresponding_author_email = String::new();

    save_to_csv(&path, &[sample_record(), no_company]).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, CSV_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    assert_eq!(&rows[0][0], "38111111");
    assert_eq!(&rows[0][3], r#"["Chidi Okafor"]"#);
    assert_eq!(&rows[0][4], r#"["Helix Pharma Inc., Cambridge, MA, USA"]"#);
    assert_eq!(&rows[0][5], "chidi.okafor@helixpharma.com");

    assert_eq!(&rows[1][3], r#"["N/A"]"#);
    assert_eq!(&rows[1][4], r#"["N/A"]"#);
    assert_eq!(&rows[1][5], NOT_AVAILABLE);
}

#[test]
fn test_save_to_csv_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("papers.csv");
    fs::write(&path, "stale contents\nmore stale\nand more\n").unwrap();

    save_to_csv(&path, &[] as &[PaperRecord]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("PubmedID,"));
}

#[test]
fn test_save_to_missing_directory_reports_write_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("papers.csv");

    let err = save_to_csv(&path, &[sample_record()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileWriteFailure);
}
