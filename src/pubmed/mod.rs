//! PubMed client for searching and fetching paper records
//!
//! This module talks to the PubMed E-utilities ESearch and EFetch endpoints
//! and turns the EFetch XML into [`PaperRecord`]s.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::{INDUSTRY_FILTER, PubMedClient};
pub use models::{NOT_AVAILABLE, PaperRecord, PublicationDate};
pub use parser::parse_papers_from_xml;
