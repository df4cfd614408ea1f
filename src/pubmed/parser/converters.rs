//! Conversion from accumulated article state to [`PaperRecord`]

use tracing::debug;

use super::extractors::{UNKNOWN, extract_email_from_text, format_author_name};
use super::xml_types::{ArticleXml, AuthorXml, PubDateXml};
use crate::affiliation::classify_affiliation;
use crate::pubmed::models::{NOT_AVAILABLE, PaperRecord, PublicationDate};

impl ArticleXml {
    pub(super) fn pmid(&self) -> Option<&str> {
        self.pmid.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub(super) fn into_record(self, pmid: &str) -> PaperRecord {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();

        let publication_date = self
            .pub_date
            .as_ref()
            .map(render_pub_date)
            .unwrap_or_default();

        let mut non_academic_authors = Vec::new();
        let mut company_affiliations = Vec::new();
        let mut corresponding_author_email: Option<String> = None;

        for author in &self.authors {
            let Some(affiliation) = affiliation_text(author) else {
                continue;
            };

            if corresponding_author_email.is_none() {
                corresponding_author_email =
                    extract_email_from_text(affiliation).map(str::to_string);
            }

            if classify_affiliation(Some(affiliation)).is_company() {
                let name =
                    format_author_name(author.fore_name.as_deref(), author.last_name.as_deref());
                debug!(pmid = %pmid, author = %name, "Company-affiliated author");
                non_academic_authors.push(name);
                company_affiliations.push(affiliation.to_string());
            }
        }

        PaperRecord {
            pubmed_id: pmid.to_string(),
            title,
            publication_date,
            non_academic_authors: or_placeholder(non_academic_authors),
            company_affiliations: or_placeholder(company_affiliations),
            corresponding_author_email: corresponding_author_email
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

fn render_pub_date(pub_date: &PubDateXml) -> String {
    let date = PublicationDate {
        year: pub_date.year.clone(),
        month: pub_date.month.clone(),
        day: pub_date.day.clone(),
    };

    let rendered = date.render();
    if rendered.is_empty() {
        pub_date
            .medline_date
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    } else {
        rendered
    }
}

/// The author's affiliation exactly as written, unless it is blank
fn affiliation_text(author: &AuthorXml) -> Option<&str> {
    author
        .affiliation
        .as_deref()
        .filter(|a| !a.trim().is_empty())
}

fn or_placeholder(values: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        values
    }
}
