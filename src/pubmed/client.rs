use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{FetcherError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::parser::parse_papers_from_xml;
use crate::pubmed::responses::ESearchResult;

/// Filter appended to every search to bias results toward industry papers
pub const INDUSTRY_FILTER: &str = "industry[Affiliation]";

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use research_paper_fetcher::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), research_paper_fetcher::FetcherError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// The configured timeout and user agent are applied to the underlying
    /// HTTP client.
    ///
    /// # Example
    ///
    /// ```
    /// use research_paper_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@example.com");
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), research_paper_fetcher::FetcherError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a PubMed client around an existing HTTP client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return up to `max_results` PMIDs
    ///
    /// The query is combined with [`INDUSTRY_FILTER`] before it is sent.
    ///
    /// # Errors
    ///
    /// * `FetcherError::EmptyQuery` - If the query is empty or whitespace, no request is made
    /// * `FetcherError::RequestError` - If the HTTP request fails or the JSON body cannot be decoded
    /// * `FetcherError::ApiError` - If NCBI answers with an error status or an `ERROR` field
    #[instrument(skip(self), fields(query = %query, limit = self.config.max_results))]
    pub async fn try_search_paper_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Err(FetcherError::EmptyQuery);
        }

        let term = build_search_term(query);
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(&term),
            self.config.max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let search_result: ESearchResult = response.json().await?;

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(FetcherError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let ids = search_result.esearchresult.idlist;
        info!(
            total = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            returned = ids.len(),
            "Search completed"
        );

        Ok(ids)
    }

    /// Search PubMed, logging any failure and returning no IDs instead
    pub async fn search_paper_ids(&self, query: &str) -> Vec<String> {
        match self.try_search_paper_ids(query).await {
            Ok(ids) => ids,
            Err(FetcherError::EmptyQuery) => {
                error!("Query cannot be empty");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "API Error: Failed to fetch paper IDs");
                Vec::new()
            }
        }
    }

    /// Fetch and parse paper details for `ids` in one batched EFetch request
    ///
    /// # Errors
    ///
    /// * `FetcherError::NoPaperIds` - If `ids` is empty, no request is made
    /// * `FetcherError::RequestError` - If the HTTP request fails
    /// * `FetcherError::ApiError` - If NCBI answers with an error status
    /// * `FetcherError::XmlError` - If the response is not a valid article set
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn try_fetch_paper_details<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<PaperRecord>> {
        if ids.is_empty() {
            return Err(FetcherError::NoPaperIds);
        }

        let id_list = ids
            .iter()
            .map(|id| urlencoding::encode(id.as_ref().trim()).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        );

        debug!(batch_size = ids.len(), "Making batch EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        if xml_text.trim().is_empty() {
            warn!("EFetch returned an empty body");
            return Ok(Vec::new());
        }

        let papers = parse_papers_from_xml(&xml_text)?;
        info!(
            requested = ids.len(),
            parsed = papers.len(),
            "Batch fetch completed"
        );

        Ok(papers)
    }

    /// Fetch paper details, logging any failure and returning no records instead
    pub async fn fetch_paper_details<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Vec<PaperRecord> {
        match self.try_fetch_paper_details(ids).await {
            Ok(papers) => papers,
            Err(FetcherError::NoPaperIds) => {
                error!("No valid paper IDs provided");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "API Error: Failed to fetch paper details");
                Vec::new()
            }
        }
    }

    /// Search and fetch in one go; an empty search short-circuits
    pub async fn search_and_fetch(&self, query: &str) -> Vec<PaperRecord> {
        let ids = self.search_paper_ids(query).await;
        if ids.is_empty() {
            return Vec::new();
        }

        self.fetch_paper_details(ids.as_slice()).await
    }

    /// Send a GET request with the NCBI etiquette parameters appended
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(FetcherError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

/// Combine a user query with [`INDUSTRY_FILTER`]
pub fn build_search_term(query: &str) -> String {
    format!("{} AND {}", query, INDUSTRY_FILTER)
}
