//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case::invalid(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::unavailable(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn decode_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, expected_trace_id);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": "x" }));

    let payload = decode_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn not_found_payload_is_passed_through(expected_trace_id: String) {
    let error = Error::not_found("product 42 is not available")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "productId": 42 }));

    let payload = decode_response(
        error,
        StatusCode::NOT_FOUND,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.message(), "product 42 is not available");
    assert_eq!(payload.details(), Some(&json!({ "productId": 42 })));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let payload = decode_response(
        Error::service_unavailable("review service down"),
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(payload.trace_id(), None);
}

#[derive(Deserialize)]
struct NamedBody {
    #[expect(dead_code, reason = "only decoded to exercise the extractor")]
    name: String,
}

async fn accept_named(_body: web::Json<NamedBody>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[actix_web::test]
async fn malformed_json_bodies_become_invalid_request_payloads() {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(accept_named)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Error = actix_test::read_body_json(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert!(payload.message().starts_with("invalid JSON body"));
}
