//! Integration tests for the search and fetch pipeline using mocked HTTP responses
//!
//! These tests use wiremock to simulate the NCBI ESearch and EFetch endpoints.

mod common;

use common::{
    ESEARCH_EMPTY, ESEARCH_TWO_IDS, create_mock_client, load_fixture, mount_efetch,
    mount_esearch,
};
use research_paper_fetcher::{ErrorKind, FetcherError, NOT_AVAILABLE};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_search_sends_filtered_term_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer treatment AND industry[Affiliation]"))
        .and(query_param("retmax", "5"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "tester@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_mock_client(&server);
    let ids = client.search_paper_ids("cancer treatment").await;

    assert_eq!(ids, vec!["38111111", "38222222"]);
}

#[tokio::test]
#[traced_test]
async fn test_empty_query_makes_no_request() {
    let server = MockServer::start().await;
    mount_esearch(&server, ESEARCH_TWO_IDS).await;
    let client = create_mock_client(&server);

    assert!(client.search_paper_ids("").await.is_empty());
    assert!(client.search_paper_ids("   ").await.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 0, "No HTTP requests should be made for an empty query");
}

#[tokio::test]
#[traced_test]
async fn test_search_server_error_is_non_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = create_mock_client(&server);

    let err = client.try_search_paper_ids("cancer").await.unwrap_err();
    assert!(matches!(err, FetcherError::ApiError { status: 500, .. }));
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);

    assert!(client.search_paper_ids("cancer").await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_api_error_field() {
    let server = MockServer::start().await;
    mount_esearch(&server, r#"{"esearchresult": {"ERROR": "Invalid query syntax"}}"#).await;
    let client = create_mock_client(&server);

    let err = client.try_search_paper_ids("cancer[[").await.unwrap_err();
    assert!(err.to_string().contains("Invalid query syntax"));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_batches_ids_in_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "38111111,38222222"))
        .and(query_param("retmode", "xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("efetch_cancer_treatment.xml")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_mock_client(&server);
    let papers = client
        .try_fetch_paper_details(&["38111111", "38222222"])
        .await
        .expect("fetch should succeed");

    assert_eq!(papers.len(), 2);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_extracts_company_authors() {
    let server = MockServer::start().await;
    mount_efetch(&server, &load_fixture("efetch_cancer_treatment.xml")).await;
    let client = create_mock_client(&server);

    let papers = client.fetch_paper_details(&["38111111", "38222222"]).await;
    assert_eq!(papers.len(), 2);

    let industry = &papers[0];
    assert_eq!(industry.pubmed_id, "38111111");
    assert_eq!(
        industry.title,
        "Targeted KRAS inhibition in cancer treatment: a phase II study."
    );
    assert_eq!(industry.publication_date, "2024 Jan 05");
    assert_eq!(industry.non_academic_authors, vec!["Chidi Okafor", "Lena Weber"]);
    assert_eq!(
        industry.company_affiliations,
        vec![
            "Clinical Development, Helix Pharma Inc., Cambridge, MA, USA. chidi.okafor@helixpharma.com.",
            "Translational Science, NovaCell Biotech GmbH, Munich, Germany. lena.weber@novacell.de",
        ]
    );
    assert_eq!(industry.corresponding_author_email, "chidi.okafor@helixpharma.com");

    let academic = &papers[1];
    assert_eq!(academic.pubmed_id, "38222222");
    assert_eq!(academic.publication_date, "2023");
    assert_eq!(academic.non_academic_authors, vec![NOT_AVAILABLE]);
    assert_eq!(academic.company_affiliations, vec![NOT_AVAILABLE]);
    assert_eq!(academic.corresponding_author_email, NOT_AVAILABLE);
    assert!(!academic.has_company_authors());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_malformed_xml_is_non_fatal() {
    let server = MockServer::start().await;
    mount_efetch(&server, "<PubmedArticleSet><PubmedArticle><MedlineCitation>").await;
    let client = create_mock_client(&server);

    let err = client.try_fetch_paper_details(&["1"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);

    assert!(client.fetch_paper_details(&["1"]).await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_tolerates_mixed_record_types_and_markup() {
    let server = MockServer::start().await;
    mount_efetch(
        &server,
        r#"<?xml version="1.0" ?>
<PubmedArticleSet>
<PubmedArticle><MedlineCitation><PMID Version="1">1</PMID><Article>
<ArticleTitle>Effect of <mml:math><mml:mi>x</mml:mi></mml:math> dosing</ArticleTitle>
</Article></MedlineCitation></PubmedArticle>
<PubmedBookArticle><BookDocument><PMID Version="1">99</PMID></BookDocument></PubmedBookArticle>
<PubmedArticle><MedlineCitation><PMID Version="1">2</PMID><Article>
<ArticleTitle>Two</ArticleTitle>
</Article></MedlineCitation></PubmedArticle>
</PubmedArticleSet>"#,
    )
    .await;
    let client = create_mock_client(&server);

    let papers = client.try_fetch_paper_details(&["1", "99", "2"]).await.unwrap();
    let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Effect of x dosing", "Two"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_and_fetch_pipeline() {
    let server = MockServer::start().await;
    mount_esearch(&server, ESEARCH_TWO_IDS).await;
    mount_efetch(&server, &load_fixture("efetch_cancer_treatment.xml")).await;
    let client = create_mock_client(&server);

    let papers = client.search_and_fetch("cancer treatment").await;

    assert_eq!(papers.len(), 2);
    assert!(papers[0].has_company_authors());
}

#[tokio::test]
#[traced_test]
async fn test_search_and_fetch_no_hits_skips_efetch() {
    let server = MockServer::start().await;
    mount_esearch(&server, ESEARCH_EMPTY).await;
    mount_efetch(&server, &load_fixture("efetch_cancer_treatment.xml")).await;
    let client = create_mock_client(&server);

    let papers = client.search_and_fetch("nothing matches this").await;
    assert!(papers.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1, "Only the ESearch request should be made");
    assert_eq!(received[0].url.path(), "/esearch.fcgi");
}
