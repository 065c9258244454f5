//! Source clients over the real reqwest transport
//!
//! A `wiremock` server plays both upstream databases so status handling,
//! the two-request UniProt fetch and timeouts run through actual HTTP.

use bioapi_server::{
    config::UpstreamConfig,
    sources::{pdb, uniprot, Upstream},
    upstream::ReqwestFetch,
    ProteinError, ProteinResolver,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

mod common;
use common::fixture;

fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        pdb_base_url: format!("{}/rest/v1/core/entry", server.uri()),
        uniprot_base_url: format!("{}/uniprotkb", server.uri()),
        timeout_secs: 2,
        user_agent: "BioAPI/test".to_string(),
    }
}

fn resolver(config: &UpstreamConfig) -> ProteinResolver {
    let http = ReqwestFetch::new(config).unwrap();
    ProteinResolver::new(Arc::new(http), config)
}

// ============================================================================
// PDB
// ============================================================================

#[tokio::test]
async fn test_pdb_fetch_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/core/entry/4HHB"))
        .and(header("user-agent", "BioAPI/test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("pdb_4hhb.json")))
        .expect(1)
        .mount(&server)
        .await;

    let config = upstream_config(&server);
    let client = pdb::PdbClient::new(
        Arc::new(ReqwestFetch::new(&config).unwrap()),
        config.pdb_base_url.as_str(),
    );

    let entry = client.fetch("4HHB").await.unwrap();
    assert_eq!(entry.rcsb_entry_container_identifiers.entry_id, "4HHB");
    assert_eq!(entry.exptl[0].method.as_deref(), Some("X-RAY DIFFRACTION"));

    let record = pdb::normalize(&entry);
    assert_eq!(record.entry_audit.first_public_date, "1984-07-17");
    assert_eq!(record.entry_audit.entry_version, 2);
}

#[tokio::test]
async fn test_pdb_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/core/entry/0XXX"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"status": 404, "message": "No data found for entry 0XXX"}"#,
        ))
        .mount(&server)
        .await;

    let err = resolver(&upstream_config(&server))
        .resolve("0XXX")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProteinError::UpstreamError {
            upstream: Upstream::Pdb,
            id: "0XXX".to_string(),
            status: Some(404),
            message: "Failed to fetch protein data for ID 0XXX".to_string(),
        }
    );
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/core/entry/4HHB"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fixture("pdb_4hhb.json"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = upstream_config(&server);
    config.timeout_secs = 1;

    let err = resolver(&config).resolve("4HHB").await.unwrap_err();
    assert!(matches!(
        err,
        ProteinError::UpstreamUnavailable { upstream: Upstream::Pdb, .. }
    ));
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    let config = UpstreamConfig {
        pdb_base_url: "http://127.0.0.1:1/rest/v1/core/entry".to_string(),
        ..UpstreamConfig::default()
    };

    let err = resolver(&config).resolve("4HHB").await.unwrap_err();
    assert_eq!(err.code(), "UPSTREAM_UNAVAILABLE");
}

// ============================================================================
// UniProt
// ============================================================================

#[tokio::test]
async fn test_uniprot_fetch_makes_json_then_fasta_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P69905"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("uniprot_p69905.json")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P69905"))
        .and(query_param("format", "fasta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("p69905.fasta")))
        .expect(1)
        .mount(&server)
        .await;

    let config = upstream_config(&server);
    let client = uniprot::UniprotClient::new(
        Arc::new(ReqwestFetch::new(&config).unwrap()),
        config.uniprot_base_url.as_str(),
    );

    let entry = client.fetch("P69905").await.unwrap();
    assert_eq!(entry.primary_accession.as_deref(), Some("P69905"));
    assert_eq!(entry.sequence, fixture("p69905.fasta"));

    let record = uniprot::normalize(&entry);
    assert_eq!(
        record.functions,
        vec!["Involved in oxygen transport from the lung to the various peripheral tissues"]
    );
    assert_eq!(record.entry_audit.sequence_version, 2);
    assert_eq!(record.entry_audit.entry_version, 250);
}

#[tokio::test]
async fn test_uniprot_fasta_failure_fails_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P69905"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("uniprot_p69905.json")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P69905"))
        .and(query_param("format", "fasta"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = resolver(&upstream_config(&server))
        .resolve("P69905")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProteinError::UpstreamError {
            upstream: Upstream::Uniprot,
            status: Some(500),
            ..
        }
    ));
}

#[tokio::test]
async fn test_uniprot_json_failure_skips_fasta_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/Q00000"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/Q00000"))
        .and(query_param("format", "fasta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(">sp|Q00000\n"))
        .expect(0)
        .mount(&server)
        .await;

    let result = resolver(&upstream_config(&server)).resolve("Q00000").await;
    assert!(result.is_err());
}
