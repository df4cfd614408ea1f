//! Affiliation classification
//!
//! Decides whether an author's free-text affiliation describes a company or an
//! academic institution. Matching is a case-insensitive substring check over two
//! fixed keyword tables; an academic keyword always wins over a company keyword.

use serde::{Deserialize, Serialize};

/// Keywords that mark an affiliation as a company
pub const COMPANY_KEYWORDS: &[&str] = &["Inc.", "Ltd.", "Pharma", "Biotech", "Corporation", "GmbH"];

/// Keywords that mark an affiliation as academic; checked first
pub const UNIVERSITY_KEYWORDS: &[&str] = &[
    "University",
    "Institute",
    "College",
    "Research Center",
    "Hospital",
];

/// Classification of an author affiliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffiliationClass {
    /// Matches a university-type keyword
    Academic,
    /// Matches a company-type keyword and no university-type keyword
    Company,
    /// Missing, empty, or matching neither table
    Unknown,
}

impl AffiliationClass {
    pub fn is_company(self) -> bool {
        self == AffiliationClass::Company
    }
}

/// Classify an affiliation string
///
/// # Example
///
/// ```
/// use research_paper_fetcher::affiliation::{classify_affiliation, AffiliationClass};
///
/// assert_eq!(classify_affiliation(Some("Acme Pharma Ltd., Basel")), AffiliationClass::Company);
/// assert_eq!(classify_affiliation(Some("Pharma Unit, Kyoto University")), AffiliationClass::Academic);
/// assert_eq!(classify_affiliation(None), AffiliationClass::Unknown);
/// ```
pub fn classify_affiliation(affiliation: Option<&str>) -> AffiliationClass {
    let Some(text) = affiliation.filter(|t| !t.is_empty()) else {
        return AffiliationClass::Unknown;
    };

    let lower = text.to_lowercase();

    if contains_any(&lower, UNIVERSITY_KEYWORDS) {
        AffiliationClass::Academic
    } else if contains_any(&lower, COMPANY_KEYWORDS) {
        AffiliationClass::Company
    } else {
        AffiliationClass::Unknown
    }
}

/// `true` if the affiliation is company-affiliated
pub fn is_company_affiliation(affiliation: Option<&str>) -> bool {
    classify_affiliation(affiliation).is_company()
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}
