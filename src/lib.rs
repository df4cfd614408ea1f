//! # Research Paper Fetcher
//!
//! Searches PubMed, fetches the matching records and flags authors whose
//! affiliation points at a company rather than an academic institution.
//!
//! The pipeline has three steps:
//!
//! - **ID lookup**: ESearch with the query plus an industry-affiliation filter
//! - **Record fetch**: one batched EFetch call, parsed into [`PaperRecord`]s
//! - **Output**: JSON lines on the console or a six-column CSV file
//!
//! ## Quick Start
//!
//! ```no_run
//! use research_paper_fetcher::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new()?;
//!
//!     let ids = client.search_paper_ids("cancer treatment").await;
//!     let papers = client.fetch_paper_details(ids.as_slice()).await;
//!
//!     for paper in &papers {
//!         println!("{}: {:?}", paper.title, paper.non_academic_authors);
//!     }
//!
//!     research_paper_fetcher::output::save_to_csv("papers.csv".as_ref(), &papers)?;
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod output;
pub mod pubmed;

// Re-export main types for convenience
pub use affiliation::{AffiliationClass, classify_affiliation, is_company_affiliation};
pub use config::ClientConfig;
pub use error::{ErrorKind, FetcherError, Result};
pub use pubmed::{NOT_AVAILABLE, PaperRecord, PubMedClient};
