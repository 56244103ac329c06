//! HTTP surface tests
//!
//! Every test builds the router around in-memory ports, so no upstream
//! service or network access is needed.

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;

use core_kernel::FixedExchangeRateProvider;
use infra_external::mock::{MockBehavior, MockDocumentAnalyzer, MockTranslator};
use infra_external::{PolicyAnalysis, PolicyAnalysisPatch, UnconfiguredUpstream};
use interface_api::{auth::create_token, config::ApiConfig, create_router, AppState};
use test_utils::ClaimFixtures;

const SECRET: &str = "test-secret";

fn test_config(auth_enabled: bool) -> ApiConfig {
    ApiConfig {
        auth_enabled,
        jwt_secret: SECRET.to_string(),
        ..ApiConfig::default()
    }
}

fn complete_patch() -> PolicyAnalysisPatch {
    PolicyAnalysis {
        coverage_summary: "Own damage and third-party cover".to_string(),
        coverage_amount: dec!(750000),
        deductible: dec!(2500),
        exclusions: vec!["Racing".to_string()],
        waiting_period_days: 15,
        claim_process: vec!["Call the helpline".to_string()],
    }
    .into()
}

fn server_with(
    config: ApiConfig,
    documents: Arc<MockDocumentAnalyzer>,
    translator: Arc<MockTranslator>,
) -> TestServer {
    let state = AppState::with_ports(
        config,
        Arc::new(FixedExchangeRateProvider::default()),
        documents,
        translator,
    );
    TestServer::new(create_router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(
        test_config(false),
        Arc::new(MockDocumentAnalyzer::succeeding(complete_patch())),
        Arc::new(MockTranslator::new(MockBehavior::Succeed)),
    )
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_is_public() {
        let server = server_with(
            test_config(true),
            Arc::new(MockDocumentAnalyzer::succeeding(complete_patch())),
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
        );

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_with_healthy_upstreams() {
        let response = server().get("/health/ready").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["upstreams"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ready_degraded_without_upstream_urls() {
        let state = AppState::with_ports(
            test_config(false),
            Arc::new(FixedExchangeRateProvider::default()),
            Arc::new(UnconfiguredUpstream::new("document-analysis")),
            Arc::new(UnconfiguredUpstream::new("translation")),
        );
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/health/ready").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "degraded");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let response = server().get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod fraud_detection {
    use super::*;

    #[tokio::test]
    async fn test_recent_policy_scenario() {
        let response = server()
            .post("/api/v1/fraud/detect")
            .json(&ClaimFixtures::recent_policy_json())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["score"], 45);
        assert_eq!(body["displayScore"], 45);
        assert_eq!(body["riskLevel"], "Medium");

        let flags = body["flags"].as_array().unwrap();
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0]["type"], "Recent Policy");
        assert_eq!(flags[0]["severity"], "High");
        assert_eq!(
            flags[0]["description"],
            "Policy was purchased only 9 days before the incident"
        );
        assert_eq!(flags[1]["type"], "Missing Police Report");
        assert!(!body["recommendations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_benign_claim() {
        let response = server()
            .post("/api/v1/fraud/detect")
            .json(&ClaimFixtures::benign())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["score"], 0);
        assert_eq!(body["riskLevel"], "Low");
        assert!(body["flags"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_display_score_is_capped() {
        let response = server()
            .post("/api/v1/fraud/detect")
            .json(&ClaimFixtures::every_rule_triggered())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["score"], 120);
        assert_eq!(body["displayScore"], 100);
        assert_eq!(body["riskLevel"], "Very High");
        assert_eq!(body["flags"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_short_severity_alias_accepted() {
        let mut claim = ClaimFixtures::recent_policy_json();
        claim["incidentSeverity"] = json!("Major");

        let response = server().post("/api/v1/fraud/detect").json(&claim).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["score"], 45);
    }

    #[tokio::test]
    async fn test_out_of_order_dates_rejected() {
        let mut claim = ClaimFixtures::recent_policy_json();
        claim["reportDate"] = json!("2024-01-05");

        let response = server().post("/api/v1/fraud/detect").json(&claim).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.json::<Value>();
        assert_eq!(body["error"], "validation_error");
        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 1);
        assert!(details[0].as_str().unwrap().contains("reportDate"));
    }

    #[tokio::test]
    async fn test_all_violations_reported() {
        let mut claim = ClaimFixtures::recent_policy_json();
        claim["premiumAmount"] = json!(0);
        claim["incidentHour"] = json!(24);

        let response = server().post("/api/v1/fraud/detect").json(&claim).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["details"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_field_rejected() {
        let mut claim = ClaimFixtures::recent_policy_json();
        claim.as_object_mut().unwrap().remove("lossDate");

        let response = server().post("/api/v1/fraud/detect").json(&claim).await;
        assert!(response.status_code().is_client_error());
    }
}

mod documents {
    use super::*;

    fn upload_form() -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(b"%PDF-1.4 policy".to_vec())
                .file_name("policy.pdf")
                .mime_type("application/pdf"),
        )
    }

    #[tokio::test]
    async fn test_upstream_analysis_returned() {
        let response = server()
            .post("/api/v1/documents/analyze")
            .multipart(upload_form())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["degraded"], false);
        assert_eq!(body["source"], "upstream");
        assert_eq!(body["value"]["waitingPeriodDays"], 15);
        assert_eq!(body["value"]["exclusions"], json!(["Racing"]));
    }

    #[tokio::test]
    async fn test_partial_analysis_is_merged_and_degraded() {
        let patch = PolicyAnalysisPatch {
            coverage_summary: Some("Fire and flood".to_string()),
            ..PolicyAnalysisPatch::default()
        };
        let server = server_with(
            test_config(false),
            Arc::new(MockDocumentAnalyzer::succeeding(patch)),
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
        );

        let response = server
            .post("/api/v1/documents/analyze")
            .multipart(upload_form())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let defaults = PolicyAnalysis::default_analysis();
        assert_eq!(body["degraded"], true);
        assert_eq!(body["source"], "merged");
        assert_eq!(body["value"]["coverageSummary"], "Fire and flood");
        assert_eq!(body["value"]["waitingPeriodDays"], defaults.waiting_period_days);
    }

    #[tokio::test]
    async fn test_upstream_failure_serves_default_analysis() {
        let server = server_with(
            test_config(false),
            Arc::new(MockDocumentAnalyzer::failing()),
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
        );

        let response = server
            .post("/api/v1/documents/analyze")
            .multipart(upload_form())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["degraded"], true);
        assert_eq!(body["source"], "fallback");
        assert_eq!(
            body["value"]["coverageSummary"],
            PolicyAnalysis::default_analysis().coverage_summary
        );
    }

    #[tokio::test]
    async fn test_missing_file_part_rejected() {
        let documents = Arc::new(MockDocumentAnalyzer::succeeding(complete_patch()));
        let server = server_with(
            test_config(false),
            documents.clone(),
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
        );

        let form = MultipartForm::new().add_text("note", "no file here");
        let response = server.post("/api/v1/documents/analyze").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
        assert_eq!(documents.calls(), 0);
    }
}

mod translation {
    use super::*;

    #[tokio::test]
    async fn test_translations_keep_order() {
        let response = server()
            .post("/api/v1/translate")
            .json(&json!({
                "texts": ["Submit claim", "Upload policy"],
                "targetLanguage": "hi"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["translations"], json!(["hi:Submit claim", "hi:Upload policy"]));
        assert_eq!(body["degraded"], false);
    }

    #[tokio::test]
    async fn test_failure_serves_identity_fallback() {
        let server = server_with(
            test_config(false),
            Arc::new(MockDocumentAnalyzer::succeeding(complete_patch())),
            Arc::new(MockTranslator::new(MockBehavior::Fail)),
        );

        let response = server
            .post("/api/v1/translate")
            .json(&json!({ "texts": ["Submit claim"], "targetLanguage": "ta" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["translations"], json!(["[ta] Submit claim"]));
        assert_eq!(body["degraded"], true);
    }

    #[tokio::test]
    async fn test_invalid_language_rejected() {
        let response = server()
            .post("/api/v1/translate")
            .json(&json!({ "texts": ["Submit claim"], "targetLanguage": "" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let details = response.json::<Value>()["details"].clone();
        assert!(details[0].as_str().unwrap().starts_with("target_language"));
    }
}

mod currency {
    use super::*;

    #[tokio::test]
    async fn test_usd_to_inr() {
        let response = server()
            .get("/api/v1/currency/convert")
            .add_query_param("amount", "100")
            .add_query_param("from", "USD")
            .add_query_param("to", "INR")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let converted: Decimal = body["converted"].as_str().unwrap().parse().unwrap();
        assert_eq!(converted, dec!(8350));
        assert_eq!(body["rate"], "83.5");
        assert_eq!(body["formatted"], "₹8350.00");
    }

    #[tokio::test]
    async fn test_identity_conversion() {
        let response = server()
            .get("/api/v1/currency/convert")
            .add_query_param("amount", "42.5")
            .add_query_param("from", "inr")
            .add_query_param("to", "INR")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["rate"], "1");
    }

    #[tokio::test]
    async fn test_unknown_currency_rejected() {
        let response = server()
            .get("/api/v1/currency/convert")
            .add_query_param("amount", "1")
            .add_query_param("from", "XYZ")
            .add_query_param("to", "INR")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_amount_too_large_to_convert_rejected() {
        let response = server()
            .get("/api/v1/currency/convert")
            .add_query_param("amount", "79228162514264337593543950335")
            .add_query_param("from", "USD")
            .add_query_param("to", "INR")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_missing_rate_rejected() {
        let response = server()
            .get("/api/v1/currency/convert")
            .add_query_param("amount", "1")
            .add_query_param("from", "EUR")
            .add_query_param("to", "GBP")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod auth {
    use super::*;

    fn secured_server() -> TestServer {
        server_with(
            test_config(true),
            Arc::new(MockDocumentAnalyzer::succeeding(complete_patch())),
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
        )
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let response = secured_server()
            .post("/api/v1/fraud/detect")
            .json(&ClaimFixtures::benign())
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["error"], "unauthorized");
    }

    #[tokio::test]
    async fn test_token_with_wrong_secret_rejected() {
        let token = create_token("adjuster-7", "some-other-secret", 300).unwrap();

        let response = secured_server()
            .post("/api/v1/fraud/detect")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&ClaimFixtures::benign())
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_accepted() {
        let token = create_token("adjuster-7", SECRET, 300).unwrap();

        let response = secured_server()
            .post("/api/v1/fraud/detect")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&ClaimFixtures::recent_policy_json())
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["score"], 45);
    }
}
