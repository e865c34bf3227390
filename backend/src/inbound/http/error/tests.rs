//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

const TRACE_ID: &str = "6f1f4b5e-3a8f-4d4c-9b4a-0c1d2e3f4a5b";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked: postgres://admin:pw@db")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"query": "SELECT 1"}))
}

async fn decode(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON decodes")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("login required"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace(internal_error: Error) {
    let response = ResponseError::error_response(&internal_error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(TRACE_ID));

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), REDACTED_MESSAGE);
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn conflict_details_reach_the_client() {
    let error = Error::conflict("category name already exists")
        .with_details(json!({"constraint": "categories_name_key"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let payload = decode(response).await;
    assert_eq!(payload.message(), "category name already exists");
    assert_eq!(
        payload.details(),
        Some(&json!({"constraint": "categories_name_key"}))
    );
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), REDACTED_MESSAGE);
    assert_eq!(err.details(), None);
}

#[derive(Deserialize)]
struct Body {
    #[serde(rename = "name")]
    _name: String,
}

#[derive(Deserialize)]
struct Flags {
    #[serde(rename = "available")]
    _available: Option<bool>,
}

#[rstest]
#[case("/body", "body")]
#[case("/path/not-a-uuid", "path")]
#[case("/query?available=perhaps", "query")]
#[actix_web::test]
async fn extractor_rejections_use_the_error_envelope(#[case] uri: &str, #[case] field: &str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .route(
                "/body",
                web::post().to(|_: web::Json<Body>| async { HttpResponse::Ok() }),
            )
            .route(
                "/path/{id}",
                web::get().to(|_: web::Path<uuid::Uuid>| async { HttpResponse::Ok() }),
            )
            .route(
                "/query",
                web::get().to(|_: web::Query<Flags>| async { HttpResponse::Ok() }),
            ),
    )
    .await;

    let request = if field == "body" {
        actix_test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request()
    } else {
        actix_test::TestRequest::get().uri(uri).to_request()
    };
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload: Error = actix_test::read_body_json(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        payload.details(),
        Some(&json!({"field": field, "code": "malformed"}))
    );
}
