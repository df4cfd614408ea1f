//! Rendering of [`PaperRecord`]s to the console or a CSV file

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::{NOT_AVAILABLE, PaperRecord};

/// Column names of the CSV output, in order
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Authors",
    "Company Affiliations",
    "Corresponding Author Email",
];

/// One flattened CSV row; list fields are pre-rendered
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PubmedID")]
    pubmed_id: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Publication Date")]
    publication_date: &'a str,
    #[serde(rename = "Non-academic Authors")]
    non_academic_authors: String,
    #[serde(rename = "Company Affiliations")]
    company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    corresponding_author_email: &'a str,
}

impl<'a> From<&'a PaperRecord> for CsvRow<'a> {
    fn from(record: &'a PaperRecord) -> Self {
        let email = record.corresponding_author_email.trim();

        Self {
            pubmed_id: &record.pubmed_id,
            title: &record.title,
            publication_date: &record.publication_date,
            non_academic_authors: render_list(&record.non_academic_authors),
            company_affiliations: render_list(&record.company_affiliations),
            corresponding_author_email: if email.is_empty() { NOT_AVAILABLE } else { email },
        }
    }
}

/// Render a list field the way Rust debug-prints a sequence, e.g. `["A", "B"]`
pub fn render_list(values: &[String]) -> String {
    format!("{:?}", values)
}

/// Write records as CSV (header plus one row per record) to any writer
pub fn write_csv<W: Write>(writer: W, records: &[PaperRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty result set still gets a header
    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Save records to a UTF-8 CSV file at `path`, replacing any existing file
#[instrument(skip(records), fields(path = %path.display(), records = records.len()))]
pub fn save_to_csv(path: &Path, records: &[PaperRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)?;
    debug!("CSV written");
    Ok(())
}

/// Print each record as a single-line JSON object
pub fn print_records<W: Write>(mut out: W, records: &[PaperRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
