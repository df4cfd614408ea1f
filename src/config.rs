//! Client configuration
//!
//! Holds the endpoint location, request timeout and the NCBI etiquette
//! parameters (`email`, `tool`) sent with every E-utilities request.

use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on the number of IDs returned by a search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use research_paper_fetcher::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@example.com")
///     .with_tool("my-fetcher");
///
/// assert_eq!(config.effective_tool(), "my-fetcher");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Override for the E-utilities base URL (used by tests)
    pub base_url: Option<String>,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
    /// Maximum number of IDs requested from ESearch
    pub max_results: usize,
    /// Contact email forwarded to NCBI
    pub email: Option<String>,
    /// Tool name forwarded to NCBI
    pub tool: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_results: DEFAULT_MAX_RESULTS,
            email: None,
            tool: None,
            user_agent: None,
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("research-paper-fetcher/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or("research-paper-fetcher")
    }

    /// Query parameters appended to every request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
