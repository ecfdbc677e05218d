//! Common test utilities for integration tests.
//!
//! Fixtures for the report endpoint plus helpers that wire a client to a
//! wiremock server.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use creditscore::client::CreditReportClient;
use creditscore::config::AppConfig;
use std::time::Duration;

/// Path the client requests under the base URL.
pub const ENDPOINT_PATH: &str = "/endpoint.json";

/// A report document as served by the endpoint.
pub const REPORT_JSON: &str = r#"{
    "accountIDVStatus": "PASS",
    "creditReportInfo": {
        "score": 514,
        "scoreBand": 4,
        "clientRef": "CS-SED-655426-708782",
        "status": "MATCH",
        "maxScoreValue": 700,
        "minScoreValue": 0,
        "monthsSinceLastDefaulted": -1,
        "hasEverDefaulted": false,
        "monthsSinceLastDelinquent": 1,
        "hasEverBeenDelinquent": true,
        "percentageCreditUsed": 44,
        "percentageCreditUsedDirectionFlag": 1,
        "changedScore": 0,
        "currentShortTermDebt": 13758,
        "currentShortTermNonPromotionalDebt": 13758,
        "currentShortTermCreditLimit": 30600,
        "currentShortTermCreditUtilisation": 44,
        "changeInShortTermDebt": 549,
        "currentLongTermDebt": 24682,
        "currentLongTermNonPromotionalDebt": 24682,
        "currentLongTermCreditLimit": null,
        "currentLongTermCreditUtilisation": null,
        "changeInLongTermDebt": -327,
        "numPositiveScoreFactors": 9,
        "numNegativeScoreFactors": 0,
        "equifaxScoreBand": 4,
        "equifaxScoreBandDescription": "Excellent",
        "daysUntilNextReport": 9
    },
    "dashboardStatus": "PASS",
    "personaType": "INEXPERIENCED",
    "coachingSummary": {
        "activeTodo": false,
        "activeChat": true,
        "numberOfTodoItems": 0,
        "numberOfCompletedTodoItems": 0,
        "selected": true
    },
    "augmentedCreditScore": null
}"#;

/// Config pointing at `base_url` with a short timeout.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig::default()
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(2))
}

/// Real reqwest-backed client for `base_url`.
pub fn test_client(base_url: &str) -> CreditReportClient {
    CreditReportClient::from_config(&test_config(base_url)).expect("client should build")
}
