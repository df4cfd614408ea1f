//! PubMed XML parser module
//!
//! Parses PubMed EFetch XML responses into [`PaperRecord`]s, classifying each
//! author's affiliation and picking up the first contact email on the way.
//!
//! The response is read as a stream of quick-xml events. Text inside
//! `ArticleTitle` and `Affiliation` is collected across any nested markup
//! (`<i>`, `<sub>`, MathML), so one record's formatting never affects the rest.
//!
//! # Module Organization
//!
//! - `xml_types` - Per-article accumulation state driven by reader events
//! - `extractors` - Email and author name extraction
//! - `converters` - Conversion from accumulated state to [`PaperRecord`]

mod converters;
mod extractors;
mod xml_types;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{instrument, warn};

use crate::error::{FetcherError, Result};
use crate::pubmed::models::PaperRecord;
use xml_types::{ArticleXml, Capture};

/// Parse every `<PubmedArticle>` in an EFetch XML response
///
/// Records are returned in document order. Articles without a PMID are
/// logged and skipped; other record types such as `<PubmedBookArticle>` are
/// ignored.
///
/// # Errors
///
/// Returns [`FetcherError::XmlError`] if the document is malformed.
///
/// # Example
///
/// ```
/// use research_paper_fetcher::pubmed::parse_papers_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID Version="1">12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let papers = parse_papers_from_xml(xml)?;
/// assert_eq!(papers[0].title, "Example Article");
/// assert_eq!(papers[0].non_academic_authors, vec!["N/A"]);
/// # Ok::<(), research_paper_fetcher::FetcherError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers_from_xml(xml: &str) -> Result<Vec<PaperRecord>> {
    let mut reader = Reader::from_str(xml);

    let mut papers = Vec::new();
    let mut depth = 0usize;
    let mut article: Option<ArticleXml> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if capture.is_some() {
                    continue;
                }
                match article.as_mut() {
                    Some(current) => {
                        capture = current
                            .open(e.name().as_ref(), depth)
                            .map(|field| Capture::new(field, depth));
                    }
                    None if e.name().as_ref() == b"PubmedArticle" => {
                        article = Some(ArticleXml::new(depth));
                    }
                    None => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                if capture.is_none() {
                    if let Some(current) = article.as_mut() {
                        current.empty(e.name().as_ref(), depth + 1);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(capture) = capture.as_mut() {
                    match e.unescape() {
                        Ok(text) => capture.text.push_str(&text),
                        Err(_) => capture.text.push_str(&String::from_utf8_lossy(&e)),
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(capture) = capture.as_mut() {
                    capture.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(done) = capture.take_if(|c| c.depth == depth) {
                    if let Some(current) = article.as_mut() {
                        current.apply(done.field, done.text);
                    }
                }
                if let Some(current) = article.as_mut() {
                    current.close(depth);
                }
                if let Some(finished) = article.take_if(|a| a.depth == depth) {
                    match finished.pmid().map(str::to_string) {
                        Some(pmid) => papers.push(finished.into_record(&pmid)),
                        None => warn!("Article without PMID, skipping"),
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FetcherError::XmlError(format!(
                    "Failed to parse XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(FetcherError::XmlError(format!(
            "Unexpected end of document with {} unclosed element(s)",
            depth
        )));
    }

    Ok(papers)
}
