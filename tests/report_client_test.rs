//! HTTP-level tests for the credit report client against a wiremock server.

mod common;

use common::{test_client, ENDPOINT_PATH, REPORT_JSON};
use creditscore::error::ReportError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetches_and_decodes_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REPORT_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let report = test_client(&server.uri()).get_credit_report().await.unwrap();

    assert_eq!(report.credit_report_info.score, 514);
    assert_eq!(report.credit_report_info.max_score_value, 700);
    assert_eq!(report.account_idv_status, "PASS");
    assert!(report.coaching_summary.is_some());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REPORT_JSON, "application/json"))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/", server.uri()));

    assert_eq!(client.url(), format!("{}/endpoint.json", server.uri()));
    assert!(client.get_credit_report().await.is_ok());
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("NoSuchKey"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_credit_report()
        .await
        .unwrap_err();

    match &err {
        ReportError::Status { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "NoSuchKey");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Server error (404): NoSuchKey");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"accountIDVStatus": "PASS"}"#))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_credit_report()
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Decode(_)));
    assert!(err.to_string().starts_with("Invalid credit report: "));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop a server so the port is closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let err = test_client(&uri).get_credit_report().await.unwrap_err();

    assert!(err.is_transport());
}
