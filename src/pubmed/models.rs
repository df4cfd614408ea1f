use serde::{Deserialize, Serialize};

/// Placeholder for missing emails and empty author/affiliation lists
pub const NOT_AVAILABLE: &str = "N/A";

/// A fetched paper with its company-affiliated authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed ID
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    /// Article title, `"Unknown"` when missing
    #[serde(rename = "Title")]
    pub title: String,
    /// Space-joined year, month and day; empty when none are present
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Names of company-affiliated authors, or `["N/A"]`
    #[serde(rename = "Non-academic Authors")]
    pub non_academic_authors: Vec<String>,
    /// Raw affiliation strings of those authors, or `["N/A"]`
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: Vec<String>,
    /// First email found in any author affiliation, or `"N/A"`
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// `true` if at least one author was classified as company-affiliated
    pub fn has_company_authors(&self) -> bool {
        !(self.non_academic_authors.len() == 1 && self.non_academic_authors[0] == NOT_AVAILABLE)
    }
}

/// Publication date parts as they appear in `PubDate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationDate {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl PublicationDate {
    /// Join the parts with single spaces and trim the result
    ///
    /// Missing parts render as empty strings, so a year-only date renders as
    /// just the year.
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.year.as_deref().unwrap_or(""),
            self.month.as_deref().unwrap_or(""),
            self.day.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
