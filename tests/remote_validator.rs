//! Tests for `RemoteTokenValidator` against a wiremock token authority.
//!
//! Covers success decoding, the rejected/infrastructure split by status code,
//! and transport failures (unreachable authority, client-side timeout).

use std::time::Duration;

use bearer_gate::services::token::{
    RejectReason, RemoteTokenValidator, TokenValidator, ValidateError, ValidatedToken,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn validator_for(server: &MockServer) -> RemoteTokenValidator {
    let base = Url::parse(&server.uri()).unwrap();
    RemoteTokenValidator::new(&base, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn accepted_token_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/validate"))
        .and(body_json(json!({"access_token": "token1234"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user_payload": {"user_id": 1, "role": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let validated = validator_for(&server)
        .validate("token1234")
        .await
        .expect("validated");

    assert_eq!(
        validated,
        ValidatedToken {
            user_id: 1,
            role_code: 1
        }
    );
}

#[tokio::test]
async fn not_found_is_rejected_not_infrastructure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = validator_for(&server).validate("t").await.unwrap_err();

    assert!(matches!(
        err,
        ValidateError::Rejected {
            reason: RejectReason::NotFound,
            ..
        }
    ));
}

#[tokio::test]
async fn rejection_body_refines_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"reason": "expired", "message": "access_token expired"})),
        )
        .mount(&server)
        .await;

    let err = validator_for(&server).validate("t").await.unwrap_err();

    match err {
        ValidateError::Rejected { reason, detail } => {
            assert_eq!(reason, RejectReason::Expired);
            assert_eq!(detail, "access_token expired");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_infrastructure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal srv error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = validator_for(&server).validate("t").await.unwrap_err();

    assert!(matches!(err, ValidateError::Infrastructure(_)), "{err:?}");
}

#[tokio::test]
async fn undecodable_success_body_is_infrastructure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": 1})))
        .mount(&server)
        .await;

    let err = validator_for(&server).validate("t").await.unwrap_err();

    assert!(matches!(err, ValidateError::Infrastructure(_)), "{err:?}");
}

#[tokio::test]
async fn slow_authority_times_out_as_infrastructure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user_payload": {"user_id": 1, "role": 0}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    let base = Url::parse(&server.uri()).unwrap();
    let validator = RemoteTokenValidator::new(&base, Duration::from_millis(50)).unwrap();

    let err = validator.validate("t").await.unwrap_err();

    assert!(matches!(err, ValidateError::Infrastructure(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_authority_is_infrastructure() {
    // Port 9 (discard) on loopback is not expected to have a listener.
    let base = Url::parse("http://127.0.0.1:9").unwrap();
    let validator = RemoteTokenValidator::new(&base, Duration::from_secs(2)).unwrap();

    let err = validator.validate("t").await.unwrap_err();

    assert!(matches!(err, ValidateError::Infrastructure(_)), "{err:?}");
}

#[tokio::test]
async fn single_attempt_no_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let _ = validator_for(&server).validate("t").await;

    server.verify().await;
}
