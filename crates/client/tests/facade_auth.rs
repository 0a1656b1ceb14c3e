//! Integration tests for bearer attachment and the global 401 handler
//!
//! These exercise the cross-cutting facade policies end to end:
//! - `Authorization: Bearer <token>` on every request while a session exists
//! - no auth header at all when the store is empty
//! - 401 from any endpoint evicts the session and notifies the redirect sink
//! - resource methods perform exactly one request, with no hidden retries

use tapverse_client::auth::SessionStore;
use tapverse_client::errors::ApiError;
use tapverse_domain::LoginRequest;
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, Request, ResponseTemplate};

mod support;
use support::{anonymous_harness, authenticated_harness, failure_body, success_body};

/// Matches only requests that carry no Authorization header.
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[tokio::test]
async fn bearer_header_is_attached_verbatim() {
    let harness = authenticated_harness().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!([]))))
        .expect(1)
        .mount(&harness.server)
        .await;

    let clients = harness.client.clients().get_all().await.unwrap();
    assert!(clients.is_empty());
}

#[tokio::test]
async fn anonymous_requests_carry_no_auth_header() {
    let harness = anonymous_harness().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!([]))))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness.client.clients().get_all().await.unwrap();
}

#[tokio::test]
async fn a_401_evicts_the_session_and_notifies_the_sink() {
    let harness = authenticated_harness().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_json(failure_body("token expired")))
        .mount(&harness.server)
        .await;

    let error = harness.client.projects().get_all().await.unwrap_err();
    assert!(matches!(error, ApiError::Unauthorized));

    assert!(harness.store.token().await.unwrap().is_none(), "token evicted");
    assert!(harness.store.profile().await.unwrap().is_none(), "profile evicted");
    assert_eq!(harness.redirect.targets(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn the_401_handler_fires_for_every_endpoint() {
    let harness = authenticated_harness().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/keywords/research"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let video_error = harness.client.video().get_all().await.unwrap_err();
    assert!(matches!(video_error, ApiError::Unauthorized));

    let request = tapverse_domain::KeywordResearchRequest {
        seed: "crm".to_string(),
        market: None,
        limit: None,
    };
    let keywords_error = harness.client.keywords().research(&request).await.unwrap_err();
    assert!(matches!(keywords_error, ApiError::Unauthorized));

    assert_eq!(harness.redirect.targets().len(), 2, "one notification per 401");
}

#[tokio::test]
async fn get_all_is_idempotent_and_sends_exactly_one_request_per_call() {
    let harness = authenticated_harness().await;
    let body = success_body(serde_json::json!([{
        "id": "abc",
        "tapverse_client_id": "TC-1",
        "company_name": "Acme",
        "website": null,
        "industry": null,
        "contact_email": null
    }]));
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(2)
        .mount(&harness.server)
        .await;

    let first = harness.client.clients().get_all().await.unwrap();
    let second = harness.client.clients().get_all().await.unwrap();
    assert_eq!(first, second, "same request, same decoded result");
}

#[tokio::test]
async fn login_equips_every_subsequent_request() {
    let harness = anonymous_harness().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!({
            "token": "issued-1",
            "user": {
                "id": "u-1",
                "email": "ops@agency.test",
                "name": null,
                "role": "admin",
                "agency_id": null
            }
        }))))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(header("authorization", "Bearer issued-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!([]))))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = LoginRequest {
        email: "ops@agency.test".to_string(),
        password: "hunter2".to_string(),
    };
    harness.client.auth().login(&request).await.unwrap();
    harness.client.clients().get_all().await.unwrap();
}

#[tokio::test]
async fn requests_after_logout_are_anonymous() {
    let harness = authenticated_harness().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!({}))))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(serde_json::json!([]))))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness.client.auth().logout().await.unwrap();
    harness.client.clients().get_all().await.unwrap();
}
